//! Embassy async tasks
//!
//! The agent runs alone on its task; the network stack runner is the only
//! other long-lived task.

pub mod agent;
pub mod net;

pub use agent::{agent_task, DeskAgent};
pub use net::net_task;
