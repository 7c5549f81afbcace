//! Initial ball layout
//!
//! Each ball gets a random radius, speed and direction, then its position is
//! rejection-sampled until it clears every ball already placed.

use glam::DVec2;
use rand::Rng;

use super::particle::{Ball, Color};
use super::vector;
use crate::consts::MAX_PLACEMENT_ATTEMPTS;
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Uniform point in `[lo.x, hi.x] × [lo.y, hi.y]`
fn random_point<R: Rng + ?Sized>(rng: &mut R, lo: DVec2, hi: DVec2) -> DVec2 {
    DVec2::new(rng.random_range(lo.x..=hi.x), rng.random_range(lo.y..=hi.y))
}

/// Random spawn position, inset from every wall by the largest possible radius
///
/// The inset ignores the ball's actual radius, so small balls never spawn as
/// close to a wall as they could.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, settings: &Settings) -> DVec2 {
    let inset = settings.max_size;
    random_point(
        rng,
        DVec2::new(inset, inset),
        DVec2::new(settings.width - inset, settings.height - inset),
    )
}

/// Random unit direction
///
/// Sampled from the `[-1, 1]²` square then normalized, so diagonals are
/// slightly favored over a uniform angle. A zero sample is drawn again.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> DVec2 {
    loop {
        let sample = random_point(rng, DVec2::splat(-1.0), DVec2::splat(1.0));
        if let Ok(dir) = vector::normalize(sample) {
            return dir;
        }
    }
}

/// Generate `settings.particle_count` non-overlapping balls
pub fn spawn_balls<R: Rng + ?Sized>(rng: &mut R, settings: &Settings) -> Result<Vec<Ball>> {
    let requested = settings.particle_count;
    // Grows as balls land; the request may be far larger than the arena holds
    let mut balls: Vec<Ball> = Vec::new();

    for _ in 0..requested {
        let radius = rng.random_range(settings.min_size..=settings.max_size);
        let speed = rng.random_range(settings.min_speed..=settings.max_speed);
        let vel = vector::scale(random_direction(rng), speed);
        let mut ball = Ball::new(DVec2::ZERO, vel, radius, Color::random(rng));

        let mut attempts = 0u32;
        loop {
            if attempts >= MAX_PLACEMENT_ATTEMPTS {
                log::warn!(
                    "Placement gave up at ball {} of {} (radius {:.2})",
                    balls.len() + 1,
                    requested,
                    radius
                );
                return Err(Error::SpawnDensity {
                    placed: balls.len(),
                    requested,
                    attempts,
                });
            }
            attempts += 1;
            ball.pos = random_position(rng, settings);
            if !balls.iter().any(|other| ball.overlaps(other)) {
                break;
            }
        }

        if attempts > MAX_PLACEMENT_ATTEMPTS / 10 {
            log::warn!("Ball {} needed {} placement attempts", balls.len(), attempts);
        } else {
            log::debug!("Ball {} placed after {} attempts", balls.len(), attempts);
        }
        balls.push(ball);
    }

    Ok(balls)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_respects_ranges_and_inset() {
        let settings = Settings {
            particle_count: 40,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(42);
        let balls = spawn_balls(&mut rng, &settings).unwrap();
        assert_eq!(balls.len(), 40);

        for ball in &balls {
            assert!(ball.radius() >= settings.min_size && ball.radius() <= settings.max_size);
            assert_eq!(ball.mass(), ball.radius());

            let speed = vector::length(ball.vel);
            assert!(speed >= settings.min_speed - 1e-9 && speed <= settings.max_speed + 1e-9);

            assert!(ball.pos.x >= settings.max_size && ball.pos.x <= settings.width - settings.max_size);
            assert!(ball.pos.y >= settings.max_size && ball.pos.y <= settings.height - settings.max_size);
        }
    }

    #[test]
    fn test_spawn_no_overlap() {
        let settings = Settings {
            particle_count: 120,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(7);
        let balls = spawn_balls(&mut rng, &settings).unwrap();

        for (i, a) in balls.iter().enumerate() {
            for b in &balls[i + 1..] {
                let d = vector::distance(a.pos, b.pos);
                assert!(d >= a.radius() + b.radius(), "overlap: {d}");
            }
        }
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let settings = Settings {
            particle_count: 10,
            ..Default::default()
        };
        let a = spawn_balls(&mut Pcg32::seed_from_u64(99), &settings).unwrap();
        let b = spawn_balls(&mut Pcg32::seed_from_u64(99), &settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_overcrowded_arena_reports_density_error() {
        // Free area 40x40 fits only a handful of radius-15 balls
        let settings = Settings {
            particle_count: 50,
            width: 70.0,
            height: 70.0,
            min_size: 15.0,
            max_size: 15.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(1);
        match spawn_balls(&mut rng, &settings) {
            Err(Error::SpawnDensity {
                placed,
                requested,
                attempts,
            }) => {
                assert!(placed < requested);
                assert_eq!(requested, 50);
                assert_eq!(attempts, MAX_PLACEMENT_ATTEMPTS);
            }
            other => panic!("expected SpawnDensity, got {other:?}"),
        }
    }

    #[test]
    fn test_huge_request_reports_density_error() {
        let settings = Settings {
            particle_count: usize::MAX / 2,
            width: 70.0,
            height: 70.0,
            min_size: 15.0,
            max_size: 15.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());

        let mut rng = Pcg32::seed_from_u64(1);
        match spawn_balls(&mut rng, &settings) {
            Err(Error::SpawnDensity { placed, requested, .. }) => {
                assert!(placed > 0 && placed < 10);
                assert_eq!(requested, usize::MAX / 2);
            }
            other => panic!("expected SpawnDensity, got {other:?}"),
        }
    }

    #[test]
    fn test_random_direction_is_unit() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let d = random_direction(&mut rng);
            assert!((vector::length(d) - 1.0).abs() < 1e-12);
        }
    }
}
