//! Bouncing Balls - elastic ball collisions in a rectangular arena
//!
//! Core modules:
//! - `sim`: Physics (vector math, balls, placement, collisions, tick)
//! - `simulation`: Running/Stopped loop wiring the physics to its host
//! - `renderer`: Render target abstraction (clear + filled circles)
//! - `platform`: Scheduler and pointer input abstraction
//! - `settings`: Session configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod simulation;

pub use error::{Error, Result};
pub use settings::Settings;
pub use simulation::{RunState, Simulation, SimulationBuilder};

/// Session defaults and tuning constants
pub mod consts {
    /// Default number of balls
    pub const DEFAULT_BALL_COUNT: usize = 2;
    /// Ball count used by the demo binary when no config is given
    pub const DEMO_BALL_COUNT: usize = 50;

    /// Default arena dimensions
    pub const DEFAULT_WIDTH: f64 = 800.0;
    pub const DEFAULT_HEIGHT: f64 = 600.0;

    /// Default tick rate (ticks per second)
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;

    /// Ball radius range
    pub const MIN_BALL_SIZE: f64 = 5.0;
    pub const MAX_BALL_SIZE: f64 = 15.0;

    /// Initial ball speed range (units per tick)
    pub const MIN_BALL_SPEED: f64 = 1.0;
    pub const MAX_BALL_SPEED: f64 = 2.0;

    /// Position resamples allowed per ball before placement gives up
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 10_000;

    /// Maximum ticks run by a single `Simulation::pump` call
    pub const MAX_CATCH_UP_TICKS: u32 = 8;
}
