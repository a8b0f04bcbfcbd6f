//! Wireless station abstractions
//!
//! Provides the association interface used by the connectivity manager.
//! The radio driver, the network stack and address acquisition all live
//! behind this trait.

use core::net::Ipv4Addr;

/// Link status as reported by the radio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Not associated with any access point
    Down,
    /// Association or address acquisition in progress
    Associating,
    /// Associated and holding an IPv4 address
    Up,
}

impl LinkStatus {
    /// Check if the link can carry traffic
    pub fn is_up(&self) -> bool {
        matches!(self, LinkStatus::Up)
    }
}

/// Wireless radio in station mode
///
/// `begin` only starts association; progress is observed by polling
/// [`WifiRadio::link_status`]. Implementations are expected to re-issue the
/// connect request on their own when they see the link drop after `begin`.
pub trait WifiRadio {
    /// Error type for radio control operations
    type Error;

    /// Start associating with the named network
    fn begin(&mut self, ssid: &str, passphrase: &str) -> Result<(), Self::Error>;

    /// Current link status (non-blocking)
    fn link_status(&mut self) -> LinkStatus;

    /// Address acquired from the network, if any
    fn local_address(&self) -> Option<Ipv4Addr>;
}
