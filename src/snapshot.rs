//! Read-only frame snapshots
//!
//! Rendering and leaderboard collaborators consume the arena per frame
//! without touching simulation state. Segment radii are computed here from
//! the same formula the collision engine uses, so what is drawn is exactly
//! what kills.

use glam::Vec2;
use serde::Serialize;

use crate::sim::ArenaState;

/// One orb, as a renderer sees it
#[derive(Debug, Clone, Serialize)]
pub struct OrbView {
    pub pos: Vec2,
    pub radius: f32,
    pub tint: &'static str,
}

/// One snake, as a renderer sees it. Dead snakes are included (identity and
/// score survive death) and flagged; renderers skip them.
#[derive(Debug, Clone, Serialize)]
pub struct SnakeView {
    pub name: String,
    pub is_player: bool,
    pub score: u32,
    pub alive: bool,
    /// Segment positions, head first
    pub segments: Vec<Vec2>,
    /// Hit/render radius per segment, tapering toward the tail
    pub radii: Vec<f32>,
}

/// Immutable view of a whole frame
#[derive(Debug, Clone, Serialize)]
pub struct ArenaSnapshot {
    pub time: f32,
    pub tick_count: u64,
    pub orbs: Vec<OrbView>,
    pub snakes: Vec<SnakeView>,
}

/// Capture the current frame
pub fn capture(state: &ArenaState) -> ArenaSnapshot {
    let orbs = state
        .orbs
        .iter()
        .map(|orb| OrbView {
            pos: orb.pos,
            radius: orb.radius,
            tint: orb.tint,
        })
        .collect();

    let snakes = state
        .snakes
        .iter()
        .map(|snake| SnakeView {
            name: snake.name.clone(),
            is_player: snake.is_player(),
            score: snake.score,
            alive: snake.is_alive(),
            segments: snake.segments.clone(),
            radii: (0..snake.segments.len())
                .map(|i| snake.segment_radius(i, &state.settings))
                .collect(),
        })
        .collect();

    ArenaSnapshot {
        time: state.time,
        tick_count: state.tick_count,
        orbs,
        snakes,
    }
}
