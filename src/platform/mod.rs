//! Platform abstraction layer
//!
//! Handles host differences for:
//! - Tick cadence (`Scheduler`)
//! - Pointer input (`PointerEvent`)

pub mod clock;
pub mod input;

pub use clock::{FixedStepClock, ManualScheduler};
pub use input::PointerEvent;

use std::time::Duration;

/// External periodic tick driver
///
/// The simulation asks the scheduler how many ticks have come due and runs
/// them itself; the scheduler never calls back into the simulation.
pub trait Scheduler {
    /// Begin producing ticks every `period`
    fn start(&mut self, period: Duration);

    /// Cancel all future ticks
    fn stop(&mut self);

    /// Ticks that came due since the previous call
    fn due_ticks(&mut self) -> u32;
}
