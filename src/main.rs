//! Bouncing Balls entry point
//!
//! Native terminal host: loads settings, drives the loop from the wall clock
//! and draws to a character grid.
//!
//! Usage: `bouncing-balls [settings.json] [seconds]`

use std::time::{Duration, Instant};

use bouncing_balls::consts::DEMO_BALL_COUNT;
use bouncing_balls::platform::FixedStepClock;
use bouncing_balls::renderer::AsciiTarget;
use bouncing_balls::{Error, Settings, Simulation};

/// Terminal grid size
const SCREEN_COLS: usize = 100;
const SCREEN_ROWS: usize = 37;

/// Screen refreshes per second
const FRAMES_PER_SECOND: u64 = 15;

/// Run length when no duration is given
const DEFAULT_RUN_SECS: u64 = 10;

fn main() {
    env_logger::init();
    log::info!("Bouncing Balls starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Run length from the optional `[seconds]` argument
fn parse_run_secs(arg: Option<String>) -> bouncing_balls::Result<u64> {
    match arg {
        None => Ok(DEFAULT_RUN_SECS),
        Some(s) => s.trim().parse().map_err(|e| {
            Error::Configuration(format!("invalid run length {s:?}: {e}"))
        }),
    }
}

fn run() -> bouncing_balls::Result<()> {
    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path)?,
        None => Settings {
            particle_count: DEMO_BALL_COUNT,
            ..Default::default()
        },
    };
    let run_secs = parse_run_secs(args.next())?;

    let screen = AsciiTarget::new(SCREEN_COLS, SCREEN_ROWS);
    let mut sim = Simulation::builder()
        .settings(settings)
        .render_target(screen.clone())
        .scheduler(FixedStepClock::new())
        .build()?;

    let energy_start = sim.arena().kinetic_energy();
    let frame_ticks = (u64::from(sim.settings().ticks_per_second) / FRAMES_PER_SECOND).max(1);
    let mut next_frame = 0;

    sim.start();
    let deadline = Instant::now() + Duration::from_secs(run_secs);
    while Instant::now() < deadline {
        if sim.pump() > 0 && sim.tick_count() >= next_frame {
            // Clear screen, cursor home
            print!("\x1b[2J\x1b[H{}", screen.frame());
            println!("balls: {}  ticks: {}", sim.balls().len(), sim.tick_count());
            next_frame = sim.tick_count() + frame_ticks;
        }
        std::thread::sleep(Duration::from_millis(1));
    }
    sim.stop();

    log::info!(
        "Kinetic energy {:.6} -> {:.6} over {} ticks",
        energy_start,
        sim.arena().kinetic_energy(),
        sim.tick_count()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_secs_defaults_when_absent() {
        assert_eq!(parse_run_secs(None).unwrap(), DEFAULT_RUN_SECS);
        assert_eq!(parse_run_secs(Some("5".into())).unwrap(), 5);
    }

    #[test]
    fn test_run_secs_rejects_garbage() {
        for bad in ["abc", "-3", "1.5", ""] {
            let err = parse_run_secs(Some(bad.into())).unwrap_err();
            assert!(matches!(err, Error::Configuration(_)), "{bad}: {err:?}");
        }
    }
}
