//! Dashboard rendering
//!
//! Two fixed panels (mail above, weather below) drawn with a full
//! clear-and-redraw on every render. There is no layout engine; every
//! position lives in [`layout`].

pub mod layout;
pub mod renderer;

pub use renderer::DashboardRenderer;
