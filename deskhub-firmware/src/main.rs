//! Desk Hub - Status Dashboard Firmware
//!
//! Main firmware binary for the Adafruit Feather ESP32-S3 TFT. Joins the
//! configured Wi-Fi network, polls the status backend and draws mail and
//! weather on the built-in panel.

#![no_std]
#![no_main]

extern crate alloc;

use defmt::*;
use embassy_executor::Spawner;
use embassy_net::dns::DnsSocket;
use embassy_net::tcp::client::TcpClient;
use embassy_net::StackResources;
use embassy_time::{Delay, Timer};
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;
use esp_radio::Controller;
use static_cell::StaticCell;
use {esp_backtrace as _, esp_println as _};

use deskhub_core::DeviceConfig;
use deskhub_display::GraphicsBackend;

use crate::board::TftPins;
use crate::net::{EspRadio, ReqwlessClient, TcpClientPool};
use crate::tasks::DeskAgent;

mod board;
mod net;
mod tasks;

esp_bootloader_esp_idf::esp_app_desc!();

// Heap size: 72KB (esp-radio, JSON documents, TOML parsing)
const HEAP_SIZE: usize = 72 * 1024;

/// Embedded configuration (compiled into firmware)
/// Edit device.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../device.toml");

// Static cells for values the tasks borrow forever
static DEVICE_CONFIG: StaticCell<DeviceConfig> = StaticCell::new();
static RADIO: StaticCell<Controller<'static>> = StaticCell::new();
static NET_RESOURCES: StaticCell<StackResources<3>> = StaticCell::new();
static TCP_POOL: StaticCell<TcpClientPool> = StaticCell::new();

/// Main entry point
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    info!("Desk Hub firmware starting...");

    let peripherals = esp_hal::init(esp_hal::Config::default().with_cpu_clock(CpuClock::max()));

    // esp-radio requires an allocator
    esp_alloc::heap_allocator!(#[esp_hal::ram(reclaimed)] size: HEAP_SIZE);

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);
    info!("Peripherals initialized");

    let config: &'static DeviceConfig = match DeviceConfig::from_toml(EMBEDDED_CONFIG) {
        Ok(config) => DEVICE_CONFIG.init(config),
        Err(e) => {
            error!("Invalid device.toml: {:?}", e);
            halt().await
        }
    };
    info!(
        "Configuration loaded (ssid={}, backend={}:{})",
        config.wifi.ssid.as_str(),
        config.backend.host.as_str(),
        config.backend.port
    );

    let (tft, _rails) = match board::init_tft(TftPins {
        spi: peripherals.SPI2,
        sck: peripherals.GPIO36,
        mosi: peripherals.GPIO35,
        cs: peripherals.GPIO7,
        dc: peripherals.GPIO39,
        rst: peripherals.GPIO40,
        backlight: peripherals.GPIO45,
        power: peripherals.GPIO21,
    }) {
        Ok(parts) => parts,
        Err(e) => {
            error!("Display init failed: {:?}", e);
            halt().await
        }
    };
    info!("Display initialized");

    let radio = match esp_radio::init() {
        Ok(radio) => RADIO.init(radio),
        Err(e) => {
            error!("esp-radio init failed: {:?}", e);
            halt().await
        }
    };
    let (controller, interfaces) =
        match esp_radio::wifi::new(radio, peripherals.WIFI, Default::default()) {
            Ok(parts) => parts,
            Err(e) => {
                error!("Wi-Fi driver init failed: {:?}", e);
                halt().await
            }
        };

    let rng = Rng::new();
    let seed = (rng.random() as u64) << 32 | rng.random() as u64;
    let (stack, runner) = embassy_net::new(
        interfaces.sta,
        embassy_net::Config::dhcpv4(Default::default()),
        NET_RESOURCES.init(StackResources::new()),
        seed,
    );
    info!("Network stack initialized");

    let client = ReqwlessClient::new(
        TcpClient::new(stack, TCP_POOL.init(TcpClientPool::new())),
        DnsSocket::new(stack),
    );

    let agent = match DeskAgent::new(
        config,
        EspRadio::new(controller, stack),
        Delay,
        client,
        GraphicsBackend::new(tft),
    ) {
        Ok(agent) => agent,
        Err(e) => {
            error!("Endpoint URL invalid: {:?}", e);
            halt().await
        }
    };

    spawner.spawn(tasks::net_task(runner)).unwrap();
    spawner.spawn(tasks::agent_task(agent)).unwrap();

    info!("All tasks spawned, firmware running");

    // All work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

/// Park after an unrecoverable startup error
async fn halt() -> ! {
    loop {
        Timer::after_secs(1).await;
    }
}
