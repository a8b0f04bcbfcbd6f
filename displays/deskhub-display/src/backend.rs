//! Display backend trait
//!
//! Defines the drawing interface the dashboard renderer targets.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
}

/// Colours available to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    White,
    Cyan,
    Yellow,
    Green,
    Blue,
    Magenta,
}

/// Text faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextSize {
    /// Labels and free text
    Small,
    /// Headline values
    Large,
}

/// Display backend trait
///
/// Provides a hardware-agnostic interface for drawing to a colour panel.
/// All coordinates are in pixels from the top-left corner of the surface.
/// Drawing outside the surface is clipped, never an error.
pub trait DisplayBackend {
    /// Fill the entire surface with one colour
    fn clear(&mut self, color: Color) -> Result<(), DisplayError>;

    /// Fill a rectangle
    fn fill_rect(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        color: Color,
    ) -> Result<(), DisplayError>;

    /// Draw a one pixel high horizontal line
    fn draw_hline(&mut self, x: u16, y: u16, length: u16, color: Color)
        -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at (`x`, `y`)
    ///
    /// Text is drawn on a single line with no wrapping.
    fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        text: &str,
        size: TextSize,
        color: Color,
    ) -> Result<(), DisplayError>;

    /// Flush buffered content to the display
    ///
    /// For displays with internal buffers, this sends the buffer to the hardware.
    fn flush(&mut self) -> Result<(), DisplayError>;
}
