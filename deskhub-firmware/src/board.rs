//! Adafruit Feather ESP32-S3 TFT wiring
//!
//! 1.14" ST7789 panel (135x240) on SPI2, used in landscape.
//!
//! | Signal       | GPIO |
//! |--------------|------|
//! | TFT_CS       | 7    |
//! | TFT_DC       | 39   |
//! | TFT_RST      | 40   |
//! | TFT_BACKLITE | 45   |
//! | TFT_I2C_POWER| 21   |
//! | SCK          | 36   |
//! | MOSI         | 35   |

use embassy_time::Delay;
use embedded_hal_bus::spi::{ExclusiveDevice, NoDelay};
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::peripherals::{GPIO21, GPIO35, GPIO36, GPIO39, GPIO40, GPIO45, GPIO7, SPI2};
use esp_hal::spi::master::{Config as SpiConfig, ConfigError, Spi};
use esp_hal::spi::Mode;
use esp_hal::time::Rate;
use esp_hal::Blocking;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;
use static_cell::StaticCell;

/// Native panel size in portrait
const PANEL_WIDTH: u16 = 135;
const PANEL_HEIGHT: u16 = 240;

/// Offset of the visible area inside the controller's 240x320 RAM
const PANEL_OFFSET_X: u16 = 52;
const PANEL_OFFSET_Y: u16 = 40;

const SPI_FREQUENCY_MHZ: u32 = 40;

/// Command buffer for the SPI display interface
static DISPLAY_BUFFER: StaticCell<[u8; 512]> = StaticCell::new();

type TftSpi = ExclusiveDevice<Spi<'static, Blocking>, Output<'static>, NoDelay>;

/// Initialised TFT panel
pub type Tft = mipidsi::Display<SpiInterface<'static, TftSpi, Output<'static>>, ST7789, Output<'static>>;

/// Pins and peripherals owned by the display
pub struct TftPins {
    pub spi: SPI2<'static>,
    pub sck: GPIO36<'static>,
    pub mosi: GPIO35<'static>,
    pub cs: GPIO7<'static>,
    pub dc: GPIO39<'static>,
    pub rst: GPIO40<'static>,
    pub backlight: GPIO45<'static>,
    pub power: GPIO21<'static>,
}

/// Backlight and panel power outputs
///
/// Both rails switch off when this is dropped.
pub struct TftRails {
    _backlight: Output<'static>,
    _power: Output<'static>,
}

/// Display bring-up errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum BoardError {
    /// SPI configuration rejected
    Spi,
    /// Panel did not accept its init sequence
    Panel,
}

impl From<ConfigError> for BoardError {
    fn from(_: ConfigError) -> Self {
        BoardError::Spi
    }
}

/// Power up and initialise the TFT in landscape
pub fn init_tft(pins: TftPins) -> Result<(Tft, TftRails), BoardError> {
    let rails = TftRails {
        _power: Output::new(pins.power, Level::High, OutputConfig::default()),
        _backlight: Output::new(pins.backlight, Level::High, OutputConfig::default()),
    };

    let spi = Spi::new(
        pins.spi,
        SpiConfig::default()
            .with_frequency(Rate::from_mhz(SPI_FREQUENCY_MHZ))
            .with_mode(Mode::_0),
    )?
    .with_sck(pins.sck)
    .with_mosi(pins.mosi);

    let cs = Output::new(pins.cs, Level::High, OutputConfig::default());
    let spi_device = ExclusiveDevice::new_no_delay(spi, cs).map_err(|_| BoardError::Spi)?;

    let dc = Output::new(pins.dc, Level::Low, OutputConfig::default());
    let rst = Output::new(pins.rst, Level::High, OutputConfig::default());

    let buffer = DISPLAY_BUFFER.init([0; 512]);
    let interface = SpiInterface::new(spi_device, dc, buffer);

    let tft = Builder::new(ST7789, interface)
        .display_size(PANEL_WIDTH, PANEL_HEIGHT)
        .display_offset(PANEL_OFFSET_X, PANEL_OFFSET_Y)
        .orientation(Orientation::new().rotate(Rotation::Deg270))
        .invert_colors(ColorInversion::Inverted)
        .reset_pin(rst)
        .init(&mut Delay)
        .map_err(|_| BoardError::Panel)?;

    Ok((tft, rails))
}
