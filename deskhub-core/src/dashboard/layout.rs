//! Fixed dashboard layout
//!
//! Positions are top-left corners on the landscape 240x135 panel.

use deskhub_display::{Color, TextSize};

/// Panel width in pixels
pub const SCREEN_WIDTH: u16 = 240;

/// Panel height in pixels
pub const SCREEN_HEIGHT: u16 = 135;

/// Left margin for all text
pub const MARGIN_X: u16 = 5;

/// Background colour
pub const BACKGROUND: Color = Color::Black;

/// Where and how one piece of text is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub x: u16,
    pub y: u16,
    pub size: TextSize,
    pub color: Color,
}

impl Slot {
    const fn small(y: u16, color: Color) -> Self {
        Self {
            x: MARGIN_X,
            y,
            size: TextSize::Small,
            color,
        }
    }

    const fn large(y: u16, color: Color) -> Self {
        Self {
            x: MARGIN_X,
            y,
            size: TextSize::Large,
            color,
        }
    }
}

/// Full-width horizontal divider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub y: u16,
    pub color: Color,
}

/// Rectangular area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

pub const TITLE_TEXT: &str = "Desk Hub";
pub const TITLE: Slot = Slot::small(4, Color::White);
pub const TITLE_RULE: Rule = Rule {
    y: 18,
    color: Color::White,
};

// Mail panel
pub const MAIL_LABEL_TEXT: &str = "Mail";
pub const MAIL_LABEL: Slot = Slot::small(21, Color::Cyan);
pub const UNREAD: Slot = Slot::large(32, Color::White);
pub const LATEST_LABEL_TEXT: &str = "Latest:";
pub const LATEST_LABEL: Slot = Slot::small(55, Color::Yellow);
pub const SUBJECT: Slot = Slot::small(66, Color::Cyan);

pub const PANEL_RULE: Rule = Rule {
    y: 80,
    color: Color::Blue,
};

// Weather panel
pub const WEATHER_LABEL_TEXT: &str = "Weather";
pub const WEATHER_LABEL: Slot = Slot::small(83, Color::Green);
pub const TEMPERATURE: Slot = Slot::large(94, Color::White);
pub const DESCRIPTION: Slot = Slot::small(117, Color::Magenta);

// Setup screens
pub const CONNECTING_TEXT: &str = "Connecting WiFi...";
pub const CONNECTING: Slot = Slot::small(60, Color::White);
pub const NETWORK_READY: Slot = Slot::small(60, Color::Green);
pub const STATUS_BAND: Band = Band {
    x: 0,
    y: 55,
    width: SCREEN_WIDTH,
    height: 20,
};
