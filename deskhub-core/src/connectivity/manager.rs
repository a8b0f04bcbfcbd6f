//! Connectivity manager
//!
//! Owns the radio and the connectivity state. `ensure_connected` has no
//! timeout: with wrong credentials the device waits forever.

use core::net::Ipv4Addr;

use deskhub_hal::WifiRadio;
use embedded_hal_async::delay::DelayNs;

use super::state::{ConnectivityState, LinkEvent};
use crate::config::WifiConfig;

/// Connectivity manager
pub struct ConnectivityManager<R, D> {
    radio: R,
    delay: D,
    state: ConnectivityState,
    poll_interval_ms: u32,
}

impl<R: WifiRadio, D: DelayNs> ConnectivityManager<R, D> {
    /// Create a manager
    ///
    /// - `poll_interval_ms`: Wait between association status polls
    pub fn new(radio: R, delay: D, poll_interval_ms: u32) -> Self {
        Self {
            radio,
            delay,
            state: ConnectivityState::Disconnected,
            poll_interval_ms,
        }
    }

    /// Last observed state
    pub fn state(&self) -> ConnectivityState {
        self.state
    }

    /// Get access to the underlying radio
    pub fn radio(&self) -> &R {
        &self.radio
    }

    /// Address acquired from the network, if connected
    pub fn local_address(&self) -> Option<Ipv4Addr> {
        self.radio.local_address()
    }

    /// Associate and wait until the link is up
    ///
    /// A rejected `begin` is retried at the poll interval. Returns only
    /// once the state is [`ConnectivityState::Connected`].
    pub async fn ensure_connected(&mut self, credentials: &WifiConfig) {
        while self
            .radio
            .begin(credentials.ssid.as_str(), credentials.passphrase.as_str())
            .is_err()
        {
            self.delay.delay_ms(self.poll_interval_ms).await;
        }
        self.state = self.state.transition(LinkEvent::AssociationStarted);

        while !self.refresh().is_connected() {
            self.delay.delay_ms(self.poll_interval_ms).await;
        }
    }

    /// Non-blocking link check
    ///
    /// Polls the radio once, so a dropped link is observed here.
    pub fn is_connected(&mut self) -> bool {
        self.refresh().is_connected()
    }

    fn refresh(&mut self) -> ConnectivityState {
        let event = LinkEvent::from(self.radio.link_status());
        self.state = self.state.transition(event);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{credentials, MockDelay, MockRadio};
    use deskhub_hal::LinkStatus;
    use embassy_futures::block_on;

    #[test]
    fn test_starts_disconnected() {
        let manager = ConnectivityManager::new(MockRadio::new(), MockDelay::default(), 500);
        assert_eq!(manager.state(), ConnectivityState::Disconnected);
    }

    #[test]
    fn test_ensure_connected_polls_until_up() {
        let radio = MockRadio::scripted([
            LinkStatus::Down,
            LinkStatus::Down,
            LinkStatus::Associating,
            LinkStatus::Up,
        ]);
        let mut manager = ConnectivityManager::new(radio, MockDelay::default(), 500);

        block_on(manager.ensure_connected(&credentials()));

        assert_eq!(manager.state(), ConnectivityState::Connected);
        assert_eq!(manager.radio().begun, [(String::from("office"), String::from("hunter22"))]);
        // One wait after each of the three polls that were not up
        assert_eq!(manager.delay.delays_ms, [500, 500, 500]);
    }

    #[test]
    fn test_already_up_returns_without_waiting() {
        let radio = MockRadio::scripted([LinkStatus::Up]);
        let mut manager = ConnectivityManager::new(radio, MockDelay::default(), 500);

        block_on(manager.ensure_connected(&credentials()));

        assert!(manager.delay.delays_ms.is_empty());
        assert!(manager.is_connected());
    }

    #[test]
    fn test_begin_rejection_is_retried() {
        let mut radio = MockRadio::scripted([LinkStatus::Up]);
        radio.begin_failures = 2;
        let mut manager = ConnectivityManager::new(radio, MockDelay::default(), 250);

        block_on(manager.ensure_connected(&credentials()));

        assert_eq!(manager.radio().begin_calls, 3);
        assert_eq!(manager.delay.delays_ms, [250, 250]);
        assert_eq!(manager.state(), ConnectivityState::Connected);
    }

    #[test]
    fn test_is_connected_observes_drop() {
        let radio = MockRadio::scripted([LinkStatus::Up, LinkStatus::Up, LinkStatus::Down]);
        let mut manager = ConnectivityManager::new(radio, MockDelay::default(), 500);

        block_on(manager.ensure_connected(&credentials()));
        assert!(manager.is_connected());
        assert!(!manager.is_connected());
        assert_eq!(manager.state(), ConnectivityState::Disconnected);
    }

    #[test]
    fn test_is_connected_does_not_wait() {
        let radio = MockRadio::scripted([LinkStatus::Down]);
        let mut manager = ConnectivityManager::new(radio, MockDelay::default(), 500);

        assert!(!manager.is_connected());
        assert!(manager.delay.delays_ms.is_empty());
    }

    #[test]
    fn test_local_address_from_radio() {
        let mut radio = MockRadio::scripted([LinkStatus::Up]);
        radio.address = Some(Ipv4Addr::new(192, 168, 0, 42));
        let mut manager = ConnectivityManager::new(radio, MockDelay::default(), 500);

        block_on(manager.ensure_connected(&credentials()));
        assert_eq!(manager.local_address(), Some(Ipv4Addr::new(192, 168, 0, 42)));
    }
}
