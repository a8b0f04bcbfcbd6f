//! Dashboard renderer
//!
//! Draws a [`StatusSnapshot`] into the fixed two-panel layout. Each render
//! clears the whole surface first, so rendering the same snapshot twice
//! leaves the same picture.

use core::fmt::Write;
use core::net::Ipv4Addr;

use deskhub_display::{DisplayBackend, DisplayError};
use heapless::String;

use super::layout::{self, Rule, Slot};
use crate::status::StatusSnapshot;

/// Formatting buffer for a single line of dynamic text
const LINE_CAPACITY: usize = 48;

/// Dashboard renderer
///
/// The only component that draws on the display.
pub struct DashboardRenderer<B> {
    backend: B,
}

impl<B: DisplayBackend> DashboardRenderer<B> {
    /// Create a renderer over a display backend
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get access to the underlying backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Show the connecting indicator
    pub fn show_connecting(&mut self) -> Result<(), DisplayError> {
        self.backend.clear(layout::BACKGROUND)?;
        self.draw_title()?;
        self.text(layout::CONNECTING, layout::CONNECTING_TEXT)?;
        self.backend.flush()
    }

    /// Replace the connecting indicator with the acquired address
    pub fn show_network_ready(&mut self, address: Ipv4Addr) -> Result<(), DisplayError> {
        let band = layout::STATUS_BAND;
        self.backend
            .fill_rect(band.x, band.y, band.width, band.height, layout::BACKGROUND)?;

        let mut line: String<LINE_CAPACITY> = String::new();
        let _ = write!(line, "WiFi OK: {}", address);
        self.text(layout::NETWORK_READY, &line)?;
        self.backend.flush()
    }

    /// Clear the display and draw both panels
    pub fn render(&mut self, snapshot: &StatusSnapshot) -> Result<(), DisplayError> {
        self.backend.clear(layout::BACKGROUND)?;
        self.draw_title()?;
        self.draw_mail(snapshot)?;
        self.rule(layout::PANEL_RULE)?;
        self.draw_weather(snapshot)?;
        self.backend.flush()
    }

    fn draw_title(&mut self) -> Result<(), DisplayError> {
        self.text(layout::TITLE, layout::TITLE_TEXT)?;
        self.rule(layout::TITLE_RULE)
    }

    fn draw_mail(&mut self, snapshot: &StatusSnapshot) -> Result<(), DisplayError> {
        self.text(layout::MAIL_LABEL, layout::MAIL_LABEL_TEXT)?;

        let mut line: String<LINE_CAPACITY> = String::new();
        let _ = write!(line, "Unread: {}", snapshot.unread_count());
        self.text(layout::UNREAD, &line)?;

        self.text(layout::LATEST_LABEL, layout::LATEST_LABEL_TEXT)?;
        self.text(layout::SUBJECT, snapshot.latest_subject())
    }

    fn draw_weather(&mut self, snapshot: &StatusSnapshot) -> Result<(), DisplayError> {
        self.text(layout::WEATHER_LABEL, layout::WEATHER_LABEL_TEXT)?;

        let mut line: String<LINE_CAPACITY> = String::new();
        let _ = write!(line, "{:.1} C", snapshot.temperature());
        self.text(layout::TEMPERATURE, &line)?;

        self.text(layout::DESCRIPTION, snapshot.weather_description())
    }

    fn text(&mut self, slot: Slot, text: &str) -> Result<(), DisplayError> {
        self.backend
            .draw_text(slot.x, slot.y, text, slot.size, slot.color)
    }

    fn rule(&mut self, rule: Rule) -> Result<(), DisplayError> {
        self.backend
            .draw_hline(0, rule.y, layout::SCREEN_WIDTH, rule.color)
    }
}
