//! Desk Hub Hardware Abstraction Layer
//!
//! This crate defines the network-facing traits the dashboard core is
//! written against. Board crates implement them on top of their radio
//! driver and TCP/IP stack, and tests implement them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  deskhub-core (connectivity, fetcher)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  deskhub-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  deskhub-firmware (esp-radio, reqwless) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`wifi::WifiRadio`] - Station-mode association and link status
//! - [`http::HttpClient`] - Plain HTTP GET exchanges

#![no_std]
#![deny(unsafe_code)]

pub mod http;
pub mod wifi;

// Re-export key traits at crate root for convenience
pub use http::{HttpClient, Response, STATUS_OK};
pub use wifi::{LinkStatus, WifiRadio};
