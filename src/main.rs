//! Slither Arena entry point
//!
//! Headless driver: runs the simulation clock at the fixed tick rate
//! indefinitely and logs the leaderboard. Interactive hosts embed the
//! library instead and feed `TickInput` from their pointer source.

use std::path::Path;
use std::time::{Duration, Instant, UNIX_EPOCH};

use slither_arena::sim::{ArenaState, TickInput, tick};
use slither_arena::{Leaderboard, Settings};

/// Log the standings once per this many seconds of sim time
const STANDINGS_PERIOD: f32 = 5.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            UNIX_EPOCH
                .elapsed()
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or(0)
        });
    let settings = match args.next() {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::default(),
    };

    log::info!("Slither Arena starting (seed {seed})");
    let mut state = ArenaState::new(seed, settings);
    // No pointer in headless mode: the player holds its heading
    let input = TickInput::default();

    let tick_period = Duration::from_secs_f32(state.settings.tick_dt);
    let mut next_tick = Instant::now();
    let mut next_standings = 0.0;

    loop {
        tick(&mut state, &input);

        if state.time >= next_standings {
            next_standings = state.time + STANDINGS_PERIOD;
            let board = Leaderboard::from_arena(&state);
            for entry in &board.entries {
                log::info!("#{} {} ({})", entry.rank, entry.name, entry.score);
            }
        }

        // Hold the tick cadence without ever blocking inside a tick
        next_tick += tick_period;
        let now = Instant::now();
        if next_tick > now {
            std::thread::sleep(next_tick - now);
        } else {
            // Fell behind; resynchronize rather than bursting to catch up
            next_tick = now;
        }
    }
}
