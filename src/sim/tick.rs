//! Fixed timestep simulation tick
//!
//! One tick runs to completion before the next is scheduled: cursor input,
//! steering and movement, the two collision passes, then the respawn sweep.

use glam::Vec2;

use super::collision::{orb_pickup_pass, snake_collision_pass};
use super::state::{ArenaState, LifeState, Steering};
use super::steering::steer;

/// Input sampled for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player target point (pointer position), clamped to bounds by the
    /// caller. `None` leaves the previous target in place.
    pub cursor: Option<Vec2>,
}

/// Advance the arena by one tick
pub fn tick(state: &mut ArenaState, input: &TickInput) {
    state.tick_count += 1;
    state.time += state.settings.tick_dt;
    let now = state.time;

    let ArenaState {
        settings,
        snakes,
        orbs,
        rng,
        next_id,
        ..
    } = state;
    let bounds = settings.bounds();

    // Pointer input lands between ticks; a tick only reads it
    if let Some(cursor_pos) = input.cursor {
        for snake in snakes.iter_mut() {
            if let Steering::Player { cursor } = &mut snake.steering {
                *cursor = cursor_pos;
            }
        }
    }

    // Steering and movement
    for snake in snakes.iter_mut() {
        steer(snake, orbs, settings, rng);
        snake.advance(bounds);
    }

    // Collisions and scoring
    orb_pickup_pass(snakes, orbs, next_id, rng, settings);
    snake_collision_pass(snakes, now, rng, settings);

    // Respawn sweep: flip every elapsed deadline, touching nothing else
    // (the reset happened at the moment of death)
    for snake in snakes.iter_mut() {
        if let LifeState::Dead { respawn_at } = snake.life {
            if now >= respawn_at {
                snake.life = LifeState::Alive;
                log::debug!("{} respawned at t={now:.1}s", snake.name);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::state::Snake;
    use proptest::prelude::*;

    /// Small arena for fast scenario tests
    fn small_settings() -> Settings {
        Settings {
            orb_count: 8,
            bot_count: 3,
            ..Settings::default()
        }
    }

    #[test]
    fn test_orb_count_invariant_over_many_ticks() {
        let mut state = ArenaState::new(777, small_settings());
        let input = TickInput::default();

        for _ in 0..600 {
            tick(&mut state, &input);
            assert_eq!(state.orbs.len(), state.settings.orb_count);
        }
    }

    #[test]
    fn test_segments_never_exceed_target_length() {
        let mut state = ArenaState::new(777, small_settings());
        let input = TickInput::default();

        for _ in 0..600 {
            tick(&mut state, &input);
            for snake in &state.snakes {
                assert!(snake.segments.len() <= snake.target_len);
                assert!(!snake.segments.is_empty());
            }
        }
    }

    #[test]
    fn test_positions_stay_on_plane() {
        let mut state = ArenaState::new(31, small_settings());
        let input = TickInput::default();
        let bounds = state.settings.bounds();

        for _ in 0..600 {
            tick(&mut state, &input);
            for snake in &state.snakes {
                for seg in &snake.segments {
                    assert!(seg.x >= 0.0 && seg.x < bounds.x);
                    assert!(seg.y >= 0.0 && seg.y < bounds.y);
                }
            }
        }
    }

    #[test]
    fn test_cursor_input_reaches_player() {
        let mut state = ArenaState::new(5, small_settings());
        let target = Vec2::new(37.0, 41.0);

        tick(&mut state, &TickInput { cursor: Some(target) });

        let player = state.snakes.iter().find(|s| s.is_player()).unwrap();
        assert_eq!(player.steering, Steering::Player { cursor: target });

        // None keeps the previous target
        tick(&mut state, &TickInput::default());
        let player = state.snakes.iter().find(|s| s.is_player()).unwrap();
        assert_eq!(player.steering, Steering::Player { cursor: target });
    }

    /// Park two snakes on the same point so their first advance leaves each
    /// head on the other's trailing segment. Snake 0 is checked first in
    /// the collision pass, dies there, and its reset body then stops being
    /// a hazard to snake 1.
    fn force_collision(state: &mut ArenaState, input: &TickInput) {
        let spot = state.snakes[0].head();
        state.snakes[1].segments = vec![spot];
        tick(state, input);
        assert!(!state.snakes[0].is_alive());
        assert!(state.snakes[1].is_alive());
    }

    #[test]
    fn test_death_then_timed_respawn() {
        let mut state = ArenaState::new(123, small_settings());
        let input = TickInput::default();
        force_collision(&mut state, &input);

        let snake = &state.snakes[0];
        assert_eq!(snake.score, 0);
        assert_eq!(snake.segments.len(), 1);
        let deadline = match snake.life {
            LifeState::Dead { respawn_at } => respawn_at,
            LifeState::Alive => unreachable!(),
        };
        assert!(deadline >= state.time + state.settings.respawn_delay_min - 0.001);
        assert!(deadline < state.time + state.settings.respawn_delay_max);

        // Just short of the deadline nothing flips
        state.time = deadline - 1.0;
        tick(&mut state, &input);
        assert!(!state.snakes[0].is_alive());

        // The tick that crosses it flips liveness and nothing else; the
        // reset already happened at the moment of death
        state.time = deadline;
        tick(&mut state, &input);

        let snake = &state.snakes[0];
        assert!(snake.is_alive());
        assert_eq!(snake.score, 0);
        assert_eq!(snake.segments.len(), 1);
        assert_eq!(snake.target_len, state.settings.start_length);
    }

    #[test]
    fn test_dead_snake_holds_still_until_deadline() {
        let mut state = ArenaState::new(123, small_settings());
        let input = TickInput::default();
        force_collision(&mut state, &input);

        let parked = state.snakes[0].segments.clone();
        for _ in 0..60 {
            tick(&mut state, &input);
        }
        // Still within the 20s-minimum delay: dead, unmoved, score frozen
        assert!(!state.snakes[0].is_alive());
        assert_eq!(state.snakes[0].segments, parked);
        assert_eq!(state.snakes[0].score, 0);
    }

    #[test]
    fn test_determinism() {
        let settings = small_settings();
        let mut state1 = ArenaState::new(99999, settings.clone());
        let mut state2 = ArenaState::new(99999, settings);

        let inputs = [
            TickInput { cursor: Some(Vec2::new(10.0, 20.0)) },
            TickInput::default(),
            TickInput { cursor: Some(Vec2::new(600.0, 350.0)) },
            TickInput::default(),
        ];
        for _ in 0..50 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.tick_count, state2.tick_count);
        for (a, b) in state1.snakes.iter().zip(&state2.snakes) {
            assert_eq!(a.segments, b.segments);
            assert_eq!(a.score, b.score);
            assert_eq!(a.life, b.life);
        }
        for (a, b) in state1.orbs.iter().zip(&state2.orbs) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.pos, b.pos);
        }
    }

    proptest! {
        /// One advance from any in-bounds position with any heading lands
        /// back in [0, W) x [0, H)
        #[test]
        fn prop_advance_stays_in_bounds(
            x in 0.0f32..1280.0,
            y in 0.0f32..720.0,
            hx in -1.0f32..1.0,
            hy in -1.0f32..1.0,
        ) {
            let settings = Settings::default();
            let mut snake = Snake::new(
                1,
                "P".to_string(),
                Steering::Seeker { target_orb: None },
                Vec2::new(x, y),
                &settings,
            );
            snake.heading = Vec2::new(hx, hy).normalize_or_zero();

            snake.advance(settings.bounds());

            let head = snake.head();
            prop_assert!(head.x >= 0.0 && head.x < settings.plane_width);
            prop_assert!(head.y >= 0.0 && head.y < settings.plane_height);
        }

        /// Tapered radii are monotonically non-increasing from head to tail
        /// and bounded by (1 - taper) * full .. full
        #[test]
        fn prop_taper_monotone_and_bounded(
            full in 1.0f32..50.0,
            count in 1usize..200,
            taper in 0.0f32..1.0,
        ) {
            let mut last = f32::MAX;
            for i in 0..count {
                let r = crate::sim::collision::tapered_radius(full, i, count, taper);
                prop_assert!(r <= last);
                prop_assert!(r <= full);
                prop_assert!(r > full * (1.0 - taper) - 1e-4);
                last = r;
            }
        }
    }
}
