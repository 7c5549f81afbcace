//! Ball physics
//!
//! Pure and host-independent:
//! - Unit timestep only (one tick = one unit of time)
//! - Seeded RNG only, owned by the arena
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particle;
pub mod placement;
pub mod state;
pub mod tick;
pub mod vector;

pub use collision::{WallHits, approaching, collide_with_balls, collide_with_boundary, resolve};
pub use particle::{Ball, Color};
pub use placement::{random_direction, random_position, spawn_balls};
pub use state::Arena;
pub use tick::{TickStats, tick};
