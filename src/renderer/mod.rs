//! Rendering abstraction
//!
//! The simulation never touches a display surface directly. Hosts implement
//! [`RenderTarget`]: one `clear` per tick, then one `fill_circle` per ball in
//! collection order.

pub mod ascii;
pub mod commands;

pub use ascii::AsciiTarget;
pub use commands::{CommandBuffer, DrawCommand};

use glam::DVec2;

use crate::sim::Color;

/// A surface the simulation can draw onto
pub trait RenderTarget {
    /// Paint the whole `width` × `height` arena with the background
    fn clear(&mut self, width: f64, height: f64);

    /// Draw a filled circle
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
}
