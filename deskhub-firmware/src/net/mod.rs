//! Network adapters
//!
//! Bind the core's radio and HTTP traits to esp-radio and embassy-net.

pub mod http;
pub mod wifi;

pub use http::{ReqwlessClient, TcpClientPool};
pub use wifi::EspRadio;
