//! esp-radio station adapter
//!
//! Association is driven with the non-blocking controller calls and
//! observed by polling. The embassy-net stack supplies the DHCP state.

use core::net::Ipv4Addr;

use alloc::string::String;
use defmt::*;
use deskhub_hal::{LinkStatus, WifiRadio};
use embassy_net::Stack;
use embassy_time::{Duration, Instant};
use esp_radio::wifi::{ClientConfig, ModeConfig, WifiController, WifiError};

/// Minimum spacing between connect requests after the link drops
const RECONNECT_INTERVAL: Duration = Duration::from_secs(10);

/// Station-mode radio backed by esp-radio
pub struct EspRadio<'d> {
    controller: WifiController<'d>,
    stack: Stack<'d>,
    /// When the last connect request went out, `None` before `begin`
    last_attempt: Option<Instant>,
}

impl<'d> EspRadio<'d> {
    pub fn new(controller: WifiController<'d>, stack: Stack<'d>) -> Self {
        Self {
            controller,
            stack,
            last_attempt: None,
        }
    }

    fn reconnect(&mut self) {
        info!("Wi-Fi link down, reconnecting");
        if let Err(e) = self.controller.connect() {
            warn!("Wi-Fi connect error: {:?}", e);
        }
        self.last_attempt = Some(Instant::now());
    }
}

impl WifiRadio for EspRadio<'_> {
    type Error = WifiError;

    fn begin(&mut self, ssid: &str, passphrase: &str) -> Result<(), Self::Error> {
        let config = ModeConfig::Client(
            ClientConfig::default()
                .with_ssid(String::from(ssid))
                .with_password(String::from(passphrase)),
        );
        self.controller.set_config(&config)?;

        if !matches!(self.controller.is_started(), Ok(true)) {
            info!("Starting Wi-Fi STA");
            self.controller.start()?;
        }

        info!("Connecting to Wi-Fi SSID=\"{}\"", ssid);
        self.controller.connect()?;
        self.last_attempt = Some(Instant::now());
        Ok(())
    }

    fn link_status(&mut self) -> LinkStatus {
        let status = if matches!(self.controller.is_connected(), Ok(true)) {
            if self.stack.is_config_up() {
                LinkStatus::Up
            } else {
                LinkStatus::Associating
            }
        } else {
            match self.last_attempt {
                None => LinkStatus::Down,
                Some(at) if at.elapsed() < RECONNECT_INTERVAL => LinkStatus::Associating,
                Some(_) => {
                    self.reconnect();
                    LinkStatus::Down
                }
            }
        };

        trace!("Wi-Fi link status: {:?}", status);
        status
    }

    fn local_address(&self) -> Option<Ipv4Addr> {
        self.stack.config_v4().map(|config| config.address.address())
    }
}
