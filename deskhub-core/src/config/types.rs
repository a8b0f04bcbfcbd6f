//! Configuration type definitions
//!
//! These types mirror the sections of `device.toml`:
//!
//! ```toml
//! [wifi]
//! ssid = "office"
//! passphrase = "secret"
//!
//! [backend]
//! host = "192.168.0.104"
//! port = 8000
//! path = "/status"
//!
//! [timing]            # optional
//! poll_interval_s = 30
//! association_poll_ms = 500
//! ```

use core::fmt::{self, Write};

use heapless::String;
use serde::Deserialize;

use super::ConfigError;

/// Maximum SSID length (802.11 limit)
pub const MAX_SSID_LEN: usize = 32;

/// Maximum WPA passphrase length
pub const MAX_PASSPHRASE_LEN: usize = 64;

/// Maximum backend host length
pub const MAX_HOST_LEN: usize = 64;

/// Maximum request path length
pub const MAX_PATH_LEN: usize = 64;

/// Maximum endpoint URL length (`http://` + host + `:65535` + path)
pub const MAX_URL_LEN: usize = 7 + MAX_HOST_LEN + 6 + MAX_PATH_LEN;

/// Default seconds between poll cycles
pub const DEFAULT_POLL_INTERVAL_S: u32 = 30;

/// Default milliseconds between association status polls
pub const DEFAULT_ASSOCIATION_POLL_MS: u32 = 500;

/// Fully built endpoint URL
pub type EndpointUrl = String<MAX_URL_LEN>;

/// Complete device configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Wireless network credentials
    pub wifi: WifiConfig,
    /// Status backend address
    pub backend: BackendConfig,
    /// Poll cadence
    #[serde(default)]
    pub timing: TimingConfig,
}

/// Wireless network credentials
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct WifiConfig {
    /// Network name
    pub ssid: String<MAX_SSID_LEN>,
    /// WPA passphrase
    pub passphrase: String<MAX_PASSPHRASE_LEN>,
}

// Keep the passphrase out of logs
impl fmt::Debug for WifiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiConfig")
            .field("ssid", &self.ssid)
            .field("passphrase", &"***")
            .finish()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for WifiConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "WifiConfig {{ ssid: {}, passphrase: *** }}", self.ssid.as_str());
    }
}

/// Status backend address
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BackendConfig {
    /// Host name or IPv4 literal
    pub host: String<MAX_HOST_LEN>,
    /// TCP port
    pub port: u16,
    /// Request path, starting with `/`
    pub path: String<MAX_PATH_LEN>,
}

impl BackendConfig {
    /// Build the `http://{host}:{port}{path}` endpoint URL
    pub fn endpoint_url(&self) -> Result<EndpointUrl, ConfigError> {
        let mut url = EndpointUrl::new();
        write!(url, "http://{}:{}{}", self.host, self.port, self.path)
            .map_err(|_| ConfigError::UrlTooLong)?;
        Ok(url)
    }
}

/// Poll cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct TimingConfig {
    /// Seconds between poll cycles
    pub poll_interval_s: u32,
    /// Milliseconds between association status polls
    pub association_poll_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            poll_interval_s: DEFAULT_POLL_INTERVAL_S,
            association_poll_ms: DEFAULT_ASSOCIATION_POLL_MS,
        }
    }
}

impl DeviceConfig {
    /// Parse and validate a `device.toml` document
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: DeviceConfig = toml::from_str(source).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that the TOML types alone do not enforce
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wifi.ssid.is_empty() {
            return Err(ConfigError::Invalid("wifi.ssid"));
        }
        if self.backend.host.is_empty() {
            return Err(ConfigError::Invalid("backend.host"));
        }
        if self.backend.port == 0 {
            return Err(ConfigError::Invalid("backend.port"));
        }
        if !self.backend.path.starts_with('/') {
            return Err(ConfigError::Invalid("backend.path"));
        }
        if self.timing.poll_interval_s == 0 {
            return Err(ConfigError::Invalid("timing.poll_interval_s"));
        }
        if self.timing.association_poll_ms == 0 {
            return Err(ConfigError::Invalid("timing.association_poll_ms"));
        }
        Ok(())
    }
}
