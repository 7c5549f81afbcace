//! Fixed unit-timestep physics step
//!
//! One tick advances every ball by one unit of time. Balls are processed in
//! collection order and each is fully handled (move, walls, other balls)
//! before the next one moves, so later balls see earlier balls already
//! advanced. This is a sequential update, not a simultaneous one.

use super::collision::{collide_with_balls, collide_with_boundary};
use super::state::Arena;

/// Collision counts from a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Balls that touched at least one wall
    pub wall_hits: usize,
    /// Ball pairs whose velocities were exchanged
    pub ball_hits: usize,
}

/// Advance the arena by one tick
pub fn tick(arena: &mut Arena) -> TickStats {
    let mut stats = TickStats::default();
    let (width, height) = (arena.width, arena.height);

    for i in 0..arena.balls.len() {
        let ball = &mut arena.balls[i];
        ball.integrate();
        if collide_with_boundary(ball, width, height).any() {
            stats.wall_hits += 1;
        }
        stats.ball_hits += collide_with_balls(&mut arena.balls, i);
    }

    stats
}
