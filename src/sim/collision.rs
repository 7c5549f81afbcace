//! Collision detection and response
//!
//! Wall hits flip one velocity component and snap the ball tangent to the wall.
//! Ball-ball hits are resolved as 1D elastic collisions along the line of
//! centers. Overlapping balls are never pushed apart; only velocities change.

use glam::DVec2;

use super::particle::Ball;
use super::vector;

/// Which walls a ball touched this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub x: bool,
    pub y: bool,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Reflect one axis against the `[0, bound]` walls
///
/// The `ceil` gives a one-unit band before the low wall reflects.
#[inline]
fn reflect_axis(pos: &mut f64, vel: &mut f64, radius: f64, bound: f64) -> bool {
    if (*pos - radius).ceil() < 0.0 {
        *vel = -*vel;
        *pos = radius;
        true
    } else if (*pos + radius).ceil() > bound {
        *vel = -*vel;
        *pos = bound - radius;
        true
    } else {
        false
    }
}

/// Bounce a ball off the arena walls (x axis first, then y)
pub fn collide_with_boundary(ball: &mut Ball, width: f64, height: f64) -> WallHits {
    let radius = ball.radius();
    let x = reflect_axis(&mut ball.pos.x, &mut ball.vel.x, radius, width);
    let y = reflect_axis(&mut ball.pos.y, &mut ball.vel.y, radius, height);
    WallHits { x, y }
}

/// Whether two balls are moving toward (or along) each other
///
/// Positive or zero component of relative velocity along the line from `a` to `b`.
#[inline]
pub fn approaching(a: &Ball, b: &Ball) -> bool {
    let vel_diff = vector::sub(a.vel, b.vel);
    let pos_diff = vector::sub(b.pos, a.pos);
    vector::dot(vel_diff, pos_diff) >= 0.0
}

/// Elastic velocity exchange between two balls
///
/// Returns `false` and leaves both balls untouched when they are separating.
pub fn resolve(a: &mut Ball, b: &mut Ball) -> bool {
    if !approaching(a, b) {
        return false;
    }

    // Rotate so the line of centers lies on +x
    let angle = -(b.pos.y - a.pos.y).atan2(b.pos.x - a.pos.x);

    let ma = a.mass();
    let mb = b.mass();
    let total = ma + mb;

    let u1 = vector::rotate(a.vel, angle);
    let u2 = vector::rotate(b.vel, angle);

    let v1 = DVec2::new(u1.x * (ma - mb) / total + u2.x * 2.0 * mb / total, u1.y);
    let v2 = DVec2::new(u2.x * (mb - ma) / total + u1.x * 2.0 * ma / total, u2.y);

    a.vel = vector::rotate(v1, -angle);
    b.vel = vector::rotate(v2, -angle);
    true
}

/// Mutable references to two distinct elements of a slice
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    debug_assert!(i != j);
    if i < j {
        let (head, tail) = balls.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = balls.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Resolve every overlap between ball `i` and the rest of the collection
///
/// Others are scanned in collection order, whether or not they have moved this
/// tick. Returns the number of pairs whose velocities changed.
pub fn collide_with_balls(balls: &mut [Ball], i: usize) -> usize {
    let mut resolved = 0;
    for j in 0..balls.len() {
        if j == i {
            continue;
        }
        let (a, b) = pair_mut(balls, i, j);
        if vector::distance(a.pos, b.pos) - (a.radius() + b.radius()) < 0.0 && resolve(a, b) {
            resolved += 1;
        }
    }
    resolved
}
