//! Steering policies
//!
//! One operation - compute the desired unit heading for this tick - with two
//! implementations selected by the snake's `Steering` variant: cursor
//! following for the player, orb seeking with a random-walk fallback for
//! bots.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::settings::Settings;

use super::state::{Orb, Snake, Steering};

/// Update `snake.heading` for this tick. No-op for dead snakes.
pub fn steer(snake: &mut Snake, orbs: &[Orb], settings: &Settings, rng: &mut Pcg32) {
    if !snake.is_alive() {
        return;
    }

    let head = snake.head();
    let eat_radius = snake.radius(settings) + settings.orb_radius;

    match &mut snake.steering {
        Steering::Player { cursor } => {
            let delta = *cursor - head;
            let dist = delta.length();
            // Below the dead-zone the heading holds still, which also keeps
            // the division well away from zero
            if dist > settings.cursor_deadzone {
                snake.heading = delta / dist;
            }
        }
        Steering::Seeker { target_orb } => {
            // Re-resolve the pursued orb every tick: it may have been eaten
            // by anyone and respawned elsewhere under a new id
            let pursued = target_orb.and_then(|id| orbs.iter().find(|o| o.id == id));
            let stale = match pursued {
                None => true,
                // Within eating range: consider it gone and pick the next one
                Some(orb) => head.distance(orb.pos) < eat_radius,
            };
            if stale {
                *target_orb = closest_orb(head, orbs);
            }

            let chased = target_orb.and_then(|id| orbs.iter().find(|o| o.id == id));
            match chased {
                Some(orb) => {
                    let delta = orb.pos - head;
                    let dist = delta.length();
                    if dist > 0.0 {
                        snake.heading = delta / dist;
                    }
                }
                None => {
                    // Empty registry: continuous random walk, not a jump
                    snake.heading += Vec2::new(
                        (rng.random::<f32>() - 0.5) * settings.drift_jitter,
                        (rng.random::<f32>() - 0.5) * settings.drift_jitter,
                    );
                    let mag = snake.heading.length();
                    if mag > f32::EPSILON {
                        snake.heading /= mag;
                    }
                }
            }
        }
    }
}

/// Closest live orb by straight-line distance. Linear scan; the first orb
/// wins ties, a later orb must be strictly closer to replace it.
pub fn closest_orb(head: Vec2, orbs: &[Orb]) -> Option<u32> {
    let mut best: Option<(u32, f32)> = None;
    for orb in orbs {
        let dist = head.distance(orb.pos);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((orb.id, dist)),
        }
    }
    best.map(|(id, _)| id)
}
