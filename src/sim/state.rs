//! Arena state
//!
//! Owns the ordered ball collection. Order matters: it decides which pairs are
//! resolved first within a tick.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::particle::Ball;
use super::placement::spawn_balls;
use super::vector;
use crate::error::Result;
use crate::settings::Settings;

/// The rectangular arena and everything in it
///
/// Dimensions are fixed for the session. Balls leave only through
/// [`Arena::remove_at`].
#[derive(Debug, Clone)]
pub struct Arena {
    pub(crate) width: f64,
    pub(crate) height: f64,
    /// Balls in resolution order
    pub(crate) balls: Vec<Ball>,
    /// Seed the layout was generated from
    pub(crate) seed: u64,
    rng: Pcg32,
}

impl Arena {
    /// Empty arena (no validation, no balls)
    pub fn empty(width: f64, height: f64, seed: u64) -> Self {
        Self {
            width,
            height,
            balls: Vec::new(),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Validate settings and spawn the initial non-overlapping layout
    pub fn new(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        let mut arena = Self::empty(settings.width, settings.height, seed);
        arena.balls = spawn_balls(&mut arena.rng, settings)?;
        log::info!(
            "Arena {}x{} spawned {} balls (seed {})",
            arena.width,
            arena.height,
            arena.balls.len(),
            seed
        );
        Ok(arena)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Balls in resolution order
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Remove every ball containing `point`; returns how many were removed
    ///
    /// Hits are marked during a full scan and compacted afterwards, so no ball
    /// is skipped and survivors keep their relative order.
    pub fn remove_at(&mut self, point: DVec2) -> usize {
        let hits: Vec<bool> = self.balls.iter().map(|b| b.contains_point(point)).collect();
        let removed = hits.iter().filter(|&&h| h).count();
        if removed > 0 {
            let mut flags = hits.into_iter();
            self.balls.retain(|_| !flags.next().unwrap_or(false));
        }
        removed
    }

    /// Total kinetic energy (mass = radius)
    pub fn kinetic_energy(&self) -> f64 {
        self.balls.iter().map(Ball::kinetic_energy).sum()
    }

    /// Total linear momentum
    pub fn momentum(&self) -> DVec2 {
        self.balls
            .iter()
            .fold(DVec2::ZERO, |acc, b| vector::add(acc, vector::scale(b.vel, b.mass())))
    }
}
