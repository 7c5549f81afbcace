//! Pointer input

use glam::DVec2;

/// A click in host window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Translate into arena coordinates given the surface's on-screen origin
    pub fn to_arena(&self, surface_origin: DVec2) -> DVec2 {
        DVec2::new(self.x - surface_origin.x, self.y - surface_origin.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_arena_subtracts_origin() {
        let event = PointerEvent::new(130.0, 95.0);
        assert_eq!(event.to_arena(DVec2::new(30.0, 15.0)), DVec2::new(100.0, 80.0));
        assert_eq!(event.to_arena(DVec2::ZERO), DVec2::new(130.0, 95.0));
    }
}
