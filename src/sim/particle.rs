//! Ball entity
//!
//! Balls move at constant velocity between collisions. Mass is tied to radius:
//! bigger balls are heavier.

use glam::DVec2;
use rand::Rng;

use super::vector;

/// Cosmetic fill color, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random opaque color
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// CSS `rgb(r, g, b)` form
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Perceived brightness in [0, 1]
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b))
            / 255.0
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center
    pub pos: DVec2,
    /// Displacement per tick
    pub vel: DVec2,
    radius: f64,
    mass: f64,
    color: Color,
}

impl Ball {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            mass: radius,
            color,
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Advance one tick: `pos += vel`
    #[inline]
    pub fn integrate(&mut self) {
        self.pos = vector::add(self.pos, self.vel);
    }

    /// Hit test (boundary inclusive)
    pub fn contains_point(&self, point: DVec2) -> bool {
        vector::distance(point, self.pos) <= self.radius
    }

    /// True if the two discs intersect (touching does not count)
    pub fn overlaps(&self, other: &Ball) -> bool {
        vector::distance(self.pos, other.pos) < self.radius + other.radius
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * vector::dot(self.vel, self.vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_equals_radius() {
        let ball = Ball::new(DVec2::ZERO, DVec2::ZERO, 12.5, Color::BLACK);
        assert_eq!(ball.mass(), 12.5);
        assert_eq!(ball.radius(), 12.5);
    }

    #[test]
    fn test_energy_uses_radius_as_mass() {
        let ball = Ball::new(DVec2::ZERO, DVec2::new(3.0, 0.0), 4.0, Color::BLACK);
        assert_eq!(ball.kinetic_energy(), 18.0);
        let copy = ball.clone();
        assert_eq!(copy.mass(), copy.radius());
    }

    #[test]
    fn test_integrate_unit_timestep() {
        let mut ball = Ball::new(DVec2::new(10.0, 20.0), DVec2::new(1.5, -2.0), 5.0, Color::BLACK);
        ball.integrate();
        assert_eq!(ball.pos, DVec2::new(11.5, 18.0));
        ball.integrate();
        assert_eq!(ball.pos, DVec2::new(13.0, 16.0));
    }

    #[test]
    fn test_contains_point_inclusive_edge() {
        let ball = Ball::new(DVec2::new(100.0, 100.0), DVec2::ZERO, 10.0, Color::BLACK);
        assert!(ball.contains_point(DVec2::new(100.0, 100.0)));
        assert!(ball.contains_point(DVec2::new(110.0, 100.0)));
        assert!(!ball.contains_point(DVec2::new(110.1, 100.0)));
        assert!(!ball.contains_point(DVec2::new(108.0, 108.0)));
    }

    #[test]
    fn test_overlaps() {
        let a = Ball::new(DVec2::new(0.0, 0.0), DVec2::ZERO, 10.0, Color::BLACK);
        let touching = Ball::new(DVec2::new(20.0, 0.0), DVec2::ZERO, 10.0, Color::BLACK);
        let inside = Ball::new(DVec2::new(19.0, 0.0), DVec2::ZERO, 10.0, Color::BLACK);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_color_css() {
        assert_eq!(Color::new(255, 0, 12).to_css(), "rgb(255, 0, 12)");
        assert_eq!(Color::BLACK.luminance(), 0.0);
        assert!((Color::new(255, 255, 255).luminance() - 1.0).abs() < 1e-9);
    }
}
