//! Collision detection and scoring
//!
//! The tricky part of the arena: head-vs-segment hit tests against a radius
//! that tapers from head to tail, plus the orb pickup pass that keeps the
//! registry count invariant.

use rand_pcg::Pcg32;

use crate::settings::Settings;

use super::state::{Orb, Snake, alloc_id};

/// Hit radius of segment `index` within a chain of `segment_count`: the full
/// radius at the head, shrinking linearly to `1 - taper` of it at the tail
#[inline]
pub fn tapered_radius(full_radius: f32, index: usize, segment_count: usize, taper: f32) -> f32 {
    full_radius * (1.0 - (index as f32 / segment_count as f32) * taper)
}

/// Remove the orb at `index` and insert a freshly placed replacement in the
/// same operation, so the registry count never changes
fn consume_and_replace(
    orbs: &mut Vec<Orb>,
    index: usize,
    next_id: &mut u32,
    rng: &mut Pcg32,
    settings: &Settings,
) {
    orbs.remove(index);
    let id = alloc_id(next_id);
    orbs.push(Orb::spawn(id, rng, settings));
}

/// Orb pickup pass: every live snake eats every orb within reach of its
/// head, growing once per orb. Eaten orbs are replaced immediately.
pub fn orb_pickup_pass(
    snakes: &mut [Snake],
    orbs: &mut Vec<Orb>,
    next_id: &mut u32,
    rng: &mut Pcg32,
    settings: &Settings,
) {
    for snake in snakes.iter_mut() {
        if !snake.is_alive() {
            continue;
        }
        let head = snake.head();

        // Back-to-front so replacements pushed at the end are not re-checked
        // within this snake's scan
        let mut i = orbs.len();
        while i > 0 {
            i -= 1;
            // The list can shrink mid-pass; re-validate before touching it
            if i >= orbs.len() {
                continue;
            }
            let reach = snake.radius(settings) + orbs[i].radius;
            if head.distance(orbs[i].pos) < reach {
                consume_and_replace(orbs, i, next_id, rng, settings);
                snake.grow(settings.growth_per_orb);
            }
        }
    }
}

/// True if snake `a`'s head overlaps any live snake's tapered segments.
/// Against itself the first `neck_exempt_segments` indices are skipped so
/// ordinary turning cannot kill; every other segment of every live snake is
/// a hazard. Head-only: bodies never initiate collisions.
pub fn head_collides(snakes: &[Snake], a: usize, settings: &Settings) -> bool {
    let head = snakes[a].head();

    for (b, other) in snakes.iter().enumerate() {
        if !other.is_alive() {
            continue;
        }
        let skip = if b == a {
            settings.neck_exempt_segments
        } else {
            0
        };
        let full_radius = other.radius(settings);
        let count = other.segments.len();

        for (i, seg) in other.segments.iter().enumerate().skip(skip) {
            if head.distance(*seg) < tapered_radius(full_radius, i, count, settings.tail_taper) {
                return true;
            }
        }
    }
    false
}

/// Snake collision pass: each live snake's head is tested in list order and
/// the snake dies the moment a hit is found, so an early victim's body stops
/// being a hazard for snakes checked later in the same tick. Only the
/// striking snake dies; the struck body is untouched.
pub fn snake_collision_pass(snakes: &mut [Snake], now: f32, rng: &mut Pcg32, settings: &Settings) {
    for a in 0..snakes.len() {
        if !snakes[a].is_alive() {
            continue;
        }
        if head_collides(snakes, a, settings) {
            snakes[a].kill(now, rng, settings);
        }
    }
}
