//! Slither Arena - a toroidal-plane snake arena simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, steering, collisions, respawns)
//! - `settings`: Data-driven tuning values
//! - `snapshot`: Read-only frame views for rendering collaborators
//! - `leaderboard`: Live score ranking

pub mod leaderboard;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use leaderboard::Leaderboard;
pub use settings::Settings;

use glam::Vec2;

/// Simulation tuning defaults
pub mod consts {
    /// Fixed simulation timestep (60 Hz, interactive tick rate)
    pub const TICK_DT: f32 = 1.0 / 60.0;

    /// Plane dimensions (toroidal: both axes wrap)
    pub const PLANE_WIDTH: f32 = 1280.0;
    pub const PLANE_HEIGHT: f32 = 720.0;

    /// Orb registry
    pub const ORB_COUNT: usize = 100;
    pub const ORB_RADIUS: f32 = 5.0;
    /// Visual tag passed through to renderers, never interpreted here
    pub const ORB_TINT: &str = "#b388ff";

    /// Snake defaults
    pub const BOT_COUNT: usize = 16;
    pub const SNAKE_SPEED: f32 = 2.5;
    pub const SNAKE_BASE_RADIUS: f32 = 10.0;
    pub const START_LENGTH: usize = 20;

    /// Growth per orb eaten (applied to both score and target length)
    pub const GROWTH_PER_ORB: u32 = 3;
    /// Radius grows by score / divisor, capped at the bonus below
    pub const RADIUS_GROWTH_DIVISOR: f32 = 5.0;
    pub const RADIUS_BONUS_CAP: f32 = 15.0;

    /// Fraction of the full radius shed linearly from head to tail
    pub const TAIL_TAPER: f32 = 0.7;
    /// A snake's own leading segments can never trigger self-collision
    pub const NECK_EXEMPT_SEGMENTS: usize = 5;

    /// Respawn delay bounds, in simulation seconds
    pub const RESPAWN_DELAY_MIN: f32 = 20.0;
    pub const RESPAWN_DELAY_MAX: f32 = 30.0;

    /// Cursor distances below this leave the player heading unchanged
    pub const CURSOR_DEADZONE: f32 = 1.0;
    /// Per-axis jitter applied when a seeker has no orb to chase
    pub const DRIFT_JITTER: f32 = 0.2;
}

/// Wrap a point onto the toroidal plane `[0, w) x [0, h)`
#[inline]
pub fn wrap_point(p: Vec2, bounds: Vec2) -> Vec2 {
    // rem_euclid of a tiny negative can round up to the bound itself; fold
    // that edge back so coordinates stay strictly below it
    let x = p.x.rem_euclid(bounds.x);
    let y = p.y.rem_euclid(bounds.y);
    Vec2::new(
        if x >= bounds.x { 0.0 } else { x },
        if y >= bounds.y { 0.0 } else { y },
    )
}
