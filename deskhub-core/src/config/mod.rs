//! Configuration types
//!
//! The device runs from a single configuration compiled into the firmware
//! image. It is parsed once at startup and handed out by reference.

pub mod types;

pub use types::*;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// TOML syntax error, missing key, wrong type or overlong string
    Parse,
    /// A value parsed but is out of range (names the offending key)
    Invalid(&'static str),
    /// Endpoint URL does not fit its buffer
    UrlTooLong,
}
