//! Display abstraction trait and shared drawing backend for Desk Hub
//!
//! This crate provides:
//! - `DisplayBackend` trait for a fixed-resolution colour surface
//! - `Color` and `TextSize`, the small palette and two text faces the
//!   dashboard draws with
//! - `GraphicsBackend`, an adapter from any `embedded-graphics` RGB565
//!   draw target to `DisplayBackend`
//!
//! # Architecture
//!
//! The dashboard renderer only knows about `DisplayBackend`. Board crates
//! wrap their panel driver (e.g. an ST7789 driven through `mipidsi`) in a
//! `GraphicsBackend`, and tests substitute a recording backend or an
//! in-memory framebuffer.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod graphics;

// Re-export key types
pub use backend::{Color, DisplayBackend, DisplayError, TextSize};
pub use graphics::GraphicsBackend;
