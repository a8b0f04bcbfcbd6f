//! Poll/parse/render agent
//!
//! Sequences the components one step at a time on a single task: associate
//! once, then per cycle check the link, fetch, and render on success. A
//! failed cycle leaves the display showing the last good render. The caller
//! owns the sleep between cycles.

use core::net::Ipv4Addr;

use deskhub_display::{DisplayBackend, DisplayError};
use deskhub_hal::{HttpClient, WifiRadio};
use embedded_hal_async::delay::DelayNs;

use crate::config::{ConfigError, DeviceConfig, EndpointUrl};
use crate::connectivity::ConnectivityManager;
use crate::dashboard::DashboardRenderer;
use crate::status::{FetchError, StatusFetcher};

/// Result of one poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// A fresh snapshot is on the display
    Rendered,
    /// Nothing was drawn; the display keeps the previous render
    Skipped(FetchError),
    /// A snapshot was fetched but drawing it failed
    RenderFailed(DisplayError),
}

/// The dashboard agent
pub struct Agent<'c, R, D, C, B> {
    config: &'c DeviceConfig,
    url: EndpointUrl,
    connectivity: ConnectivityManager<R, D>,
    fetcher: StatusFetcher<C>,
    renderer: DashboardRenderer<B>,
}

impl<'c, R, D, C, B> Agent<'c, R, D, C, B>
where
    R: WifiRadio,
    D: DelayNs,
    C: HttpClient,
    B: DisplayBackend,
{
    /// Assemble an agent from its collaborators
    ///
    /// Fails only if the endpoint URL does not fit its buffer.
    pub fn new(
        config: &'c DeviceConfig,
        radio: R,
        delay: D,
        client: C,
        backend: B,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            config,
            url: config.backend.endpoint_url()?,
            connectivity: ConnectivityManager::new(
                radio,
                delay,
                config.timing.association_poll_ms,
            ),
            fetcher: StatusFetcher::new(client),
            renderer: DashboardRenderer::new(backend),
        })
    }

    /// URL polled every cycle
    pub fn endpoint_url(&self) -> &str {
        self.url.as_str()
    }

    /// Seconds to sleep between cycles
    pub fn poll_interval_s(&self) -> u32 {
        self.config.timing.poll_interval_s
    }

    /// Link management, including the acquired address
    pub fn connectivity(&self) -> &ConnectivityManager<R, D> {
        &self.connectivity
    }

    /// Status fetcher and its HTTP client
    pub fn fetcher(&self) -> &StatusFetcher<C> {
        &self.fetcher
    }

    /// Dashboard renderer and its display backend
    pub fn renderer(&self) -> &DashboardRenderer<B> {
        &self.renderer
    }

    /// One-time setup
    ///
    /// Shows the connecting screen, waits for the link with no timeout,
    /// then shows the acquired address. Association goes ahead even if the
    /// display fails; the first display error is returned afterwards.
    pub async fn start(&mut self) -> Result<(), DisplayError> {
        let connecting = self.renderer.show_connecting();

        self.connectivity.ensure_connected(&self.config.wifi).await;

        let address = self
            .connectivity
            .local_address()
            .unwrap_or(Ipv4Addr::UNSPECIFIED);
        let ready = self.renderer.show_network_ready(address);

        connecting.and(ready)
    }

    /// Run one cycle: link check, fetch, render on success
    pub async fn cycle(&mut self) -> CycleOutcome {
        if !self.connectivity.is_connected() {
            return CycleOutcome::Skipped(FetchError::NotConnected);
        }

        let snapshot = match self.fetcher.fetch(&self.url).await {
            Ok(snapshot) => snapshot,
            Err(err) => return CycleOutcome::Skipped(err),
        };

        match self.renderer.render(&snapshot) {
            Ok(()) => CycleOutcome::Rendered,
            Err(err) => CycleOutcome::RenderFailed(err),
        }
    }
}
