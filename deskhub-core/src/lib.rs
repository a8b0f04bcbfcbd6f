//! Board-agnostic core logic for the Desk Hub status dashboard
//!
//! This crate contains the poll/parse/render cycle without any dependency
//! on specific hardware:
//!
//! - Compiled-in device configuration and its TOML loader
//! - Status snapshot decoding with per-field defaults
//! - Status fetcher over the [`deskhub_hal::HttpClient`] trait
//! - Connectivity state machine over the [`deskhub_hal::WifiRadio`] trait
//! - Two-panel dashboard renderer over [`deskhub_display::DisplayBackend`]
//! - The agent that sequences one cycle at a time

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod agent;
pub mod config;
pub mod connectivity;
pub mod dashboard;
pub mod status;

#[cfg(test)]
mod testing;

pub use agent::{Agent, CycleOutcome};
pub use config::{ConfigError, DeviceConfig};
pub use connectivity::{ConnectivityManager, ConnectivityState};
pub use dashboard::DashboardRenderer;
pub use status::{FetchError, StatusFetcher, StatusSnapshot};
