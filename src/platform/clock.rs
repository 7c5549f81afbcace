//! Scheduler implementations

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use super::Scheduler;

/// Longest frame gap fed into the accumulator
const MAX_FRAME_GAP: Duration = Duration::from_millis(100);

/// Wall-clock fixed-rate scheduler
///
/// Accumulates real elapsed time and reports whole periods as due ticks.
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    period: Option<Duration>,
    accumulator: Duration,
    last: Option<Instant>,
}

impl FixedStepClock {
    pub fn new() -> Self {
        Self {
            period: None,
            accumulator: Duration::ZERO,
            last: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.period.is_some()
    }

    /// Feed `elapsed` time and return how many periods completed
    ///
    /// Gaps over 100 ms are clamped so a stalled host does not trigger a burst.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let Some(period) = self.period else {
            return 0;
        };
        if period.is_zero() {
            return 0;
        }
        self.accumulator += elapsed.min(MAX_FRAME_GAP);

        let mut ticks = 0;
        while self.accumulator >= period {
            self.accumulator -= period;
            ticks += 1;
        }
        ticks
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        match self.period {
            Some(period) => period.saturating_sub(self.accumulator),
            None => Duration::ZERO,
        }
    }
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for FixedStepClock {
    fn start(&mut self, period: Duration) {
        self.period = Some(period);
        self.accumulator = Duration::ZERO;
        self.last = Some(Instant::now());
    }

    fn stop(&mut self) {
        self.period = None;
        self.last = None;
    }

    fn due_ticks(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = match self.last.replace(now) {
            Some(last) => now.duration_since(last),
            None => return 0,
        };
        self.advance(elapsed)
    }
}

#[derive(Debug, Default)]
struct ManualState {
    period: Option<Duration>,
    pending: u32,
}

/// Scheduler fired by hand
///
/// Clones share state: keep one handle, give the other to the simulation, and
/// call [`ManualScheduler::fire`] to make ticks due. Useful for tests and for
/// hosts with their own timer callbacks.
#[derive(Debug, Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `n` ticks due; ignored while stopped
    pub fn fire(&self, n: u32) {
        let mut state = self.state.borrow_mut();
        if state.period.is_some() {
            state.pending += n;
        }
    }

    /// Period requested by the last `start`, if running
    pub fn period(&self) -> Option<Duration> {
        self.state.borrow().period
    }

    pub fn is_running(&self) -> bool {
        self.period().is_some()
    }
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, period: Duration) {
        self.state.borrow_mut().period = Some(period);
    }

    fn stop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.period = None;
        state.pending = 0;
    }

    fn due_ticks(&mut self) -> u32 {
        std::mem::take(&mut self.state.borrow_mut().pending)
    }
}
