//! Simulation loop
//!
//! Wires the physics to its host: a render target that is cleared and redrawn
//! every tick, a scheduler that decides when ticks are due, and pointer clicks
//! that remove balls. Everything runs on the caller's thread; `&mut self`
//! guarantees a click can never interleave with a tick in progress. Hosts that
//! share a `Simulation` across threads must wrap it in a single lock.

use glam::DVec2;

use crate::consts::MAX_CATCH_UP_TICKS;
use crate::error::{Error, Result};
use crate::platform::{FixedStepClock, PointerEvent, Scheduler};
use crate::renderer::RenderTarget;
use crate::settings::Settings;
use crate::sim::{self, Arena, Ball, TickStats};

/// Whether the scheduler is driving ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Stopped,
    Running,
}

/// Collects host collaborators before any simulation state is created
#[derive(Default)]
pub struct SimulationBuilder {
    settings: Settings,
    target: Option<Box<dyn RenderTarget>>,
    scheduler: Option<Box<dyn Scheduler>>,
}

impl SimulationBuilder {
    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Surface to draw on (required)
    pub fn render_target(mut self, target: impl RenderTarget + 'static) -> Self {
        self.target = Some(Box::new(target));
        self
    }

    /// Tick driver (defaults to a wall-clock [`FixedStepClock`])
    pub fn scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Some(Box::new(scheduler));
        self
    }

    /// Validate, then spawn the initial layout
    pub fn build(self) -> Result<Simulation> {
        let target = self
            .target
            .ok_or_else(|| Error::Configuration("a render target is required".into()))?;
        let arena = Arena::new(&self.settings)?;
        let scheduler = self
            .scheduler
            .unwrap_or_else(|| Box::new(FixedStepClock::new()));

        Ok(Simulation {
            settings: self.settings,
            arena,
            target,
            scheduler,
            state: RunState::Stopped,
            ticks: 0,
        })
    }
}

/// A running ball simulation and its host collaborators
pub struct Simulation {
    settings: Settings,
    arena: Arena,
    target: Box<dyn RenderTarget>,
    scheduler: Box<dyn Scheduler>,
    state: RunState,
    ticks: u64,
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::default()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn balls(&self) -> &[Ball] {
        self.arena.balls()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Completed ticks since construction
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Stopped → Running: ask the scheduler for ticks at the configured rate
    pub fn start(&mut self) {
        if self.is_running() {
            log::warn!("start() ignored: already running");
            return;
        }
        let period = self.settings.tick_period();
        self.scheduler.start(period);
        self.state = RunState::Running;
        log::info!(
            "Simulation started at {} ticks/s with {} balls",
            self.settings.ticks_per_second,
            self.arena.len()
        );
    }

    /// Running → Stopped: cancel future ticks
    pub fn stop(&mut self) {
        if !self.is_running() {
            log::warn!("stop() ignored: not running");
            return;
        }
        self.scheduler.stop();
        self.state = RunState::Stopped;
        log::info!("Simulation stopped after {} ticks", self.ticks);
    }

    /// Run whatever ticks the scheduler reports as due
    ///
    /// Does nothing while stopped. At most `MAX_CATCH_UP_TICKS` run per call;
    /// the rest are dropped.
    pub fn pump(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }
        let due = self.scheduler.due_ticks();
        let run = due.min(MAX_CATCH_UP_TICKS);
        if due > run {
            log::debug!("Dropping {} overdue ticks", due - run);
        }
        for _ in 0..run {
            self.tick();
        }
        run
    }

    /// One full tick: clear, step physics, draw every ball
    pub fn tick(&mut self) -> TickStats {
        self.target.clear(self.arena.width(), self.arena.height());
        let stats = sim::tick(&mut self.arena);
        for ball in self.arena.balls() {
            self.target.fill_circle(ball.pos, ball.radius(), ball.color());
        }
        self.ticks += 1;
        log::trace!(
            "tick {}: {} wall hits, {} ball hits",
            self.ticks,
            stats.wall_hits,
            stats.ball_hits
        );
        stats
    }

    /// Remove every ball under an arena-space point
    pub fn click(&mut self, point: DVec2) -> usize {
        let removed = self.arena.remove_at(point);
        if removed > 0 {
            log::debug!(
                "Click at ({:.1}, {:.1}) removed {} ball(s), {} left",
                point.x,
                point.y,
                removed,
                self.arena.len()
            );
        }
        removed
    }

    /// Remove every ball under a window-space pointer event
    pub fn pointer(&mut self, event: PointerEvent, surface_origin: DVec2) -> usize {
        self.click(event.to_arena(surface_origin))
    }
}
