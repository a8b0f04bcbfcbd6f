//! Connectivity state machine
//!
//! Transitions are driven only by what the radio reports when polled.

use deskhub_hal::LinkStatus;

/// Connectivity states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConnectivityState {
    /// No association requested, or the link dropped
    #[default]
    Disconnected,
    /// Association requested, link not yet usable
    Connecting,
    /// Associated with an address
    Connected,
}

/// Radio observations that move the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// Association was requested or is in progress
    AssociationStarted,
    /// Link is up with an address
    LinkUp,
    /// Radio reports no association
    LinkDown,
}

impl From<LinkStatus> for LinkEvent {
    fn from(status: LinkStatus) -> Self {
        match status {
            LinkStatus::Down => LinkEvent::LinkDown,
            LinkStatus::Associating => LinkEvent::AssociationStarted,
            LinkStatus::Up => LinkEvent::LinkUp,
        }
    }
}

impl ConnectivityState {
    /// Check if traffic can flow
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectivityState::Connected)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: LinkEvent) -> Self {
        use ConnectivityState::*;
        use LinkEvent::*;

        match (self, event) {
            (_, LinkUp) => Connected,
            (_, AssociationStarted) => Connecting,

            // The radio reports down until the first association completes
            (Connecting, LinkDown) => Connecting,
            (Connected, LinkDown) => Disconnected,
            (Disconnected, LinkDown) => Disconnected,
        }
    }
}
