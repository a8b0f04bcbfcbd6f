//! Dashboard agent task
//!
//! Runs setup once, then one poll cycle every `poll_interval_s` seconds.
//! The sleep is fixed: no backoff after failures.

use defmt::*;
use deskhub_core::{Agent, CycleOutcome, FetchError};
use deskhub_display::GraphicsBackend;
use embassy_time::{Delay, Timer};

use crate::board::Tft;
use crate::net::{EspRadio, ReqwlessClient};

/// The agent with its concrete collaborators
pub type DeskAgent = Agent<
    'static,
    EspRadio<'static>,
    Delay,
    ReqwlessClient<'static>,
    GraphicsBackend<Tft>,
>;

/// Agent task - owns the radio, HTTP client and display
#[embassy_executor::task]
pub async fn agent_task(mut agent: DeskAgent) {
    info!(
        "Agent task started (url={}, interval={}s)",
        agent.endpoint_url(),
        agent.poll_interval_s()
    );

    info!("Connecting to Wi-Fi...");
    if let Err(e) = agent.start().await {
        warn!("Display error during setup: {:?}", e);
    }
    match agent.connectivity().local_address() {
        Some(address) => info!("WiFi connected, IP: {}", Display2Format(&address)),
        None => warn!("WiFi connected without an IPv4 address"),
    }

    let interval = u64::from(agent.poll_interval_s());
    loop {
        match agent.cycle().await {
            CycleOutcome::Rendered => info!("Dashboard updated"),
            CycleOutcome::Skipped(FetchError::Decode(e)) => warn!(
                "Cycle skipped, JSON error: {} at line {} column {}",
                e.reason(),
                e.line,
                e.column
            ),
            CycleOutcome::Skipped(e) => warn!("Cycle skipped, {}: {:?}", e.category(), e),
            CycleOutcome::RenderFailed(e) => error!("Render failed: {:?}", e),
        }

        Timer::after_secs(interval).await;
    }
}
