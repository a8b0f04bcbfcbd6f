//! Wireless connectivity
//!
//! The connectivity manager is the only owner of the radio. The agent asks
//! it to associate once at startup and then checks the link before every
//! cycle.

pub mod manager;
pub mod state;

pub use manager::ConnectivityManager;
pub use state::{ConnectivityState, LinkEvent};
