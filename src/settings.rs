//! Arena settings and tuning values
//!
//! Every empirically chosen constant lives here so hosts can override it;
//! defaults come from `consts` and match the original arcade feel.

use std::fs;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation tuning, injected into the arena at construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Plane ===
    /// Plane width (x wraps modulo this)
    pub plane_width: f32,
    /// Plane height (y wraps modulo this)
    pub plane_height: f32,
    /// Simulation seconds advanced per tick
    pub tick_dt: f32,

    // === Orbs ===
    /// Live orbs held by the registry at all times
    pub orb_count: usize,
    pub orb_radius: f32,

    // === Snakes ===
    /// Autonomous snakes spawned at startup
    pub bot_count: usize,
    /// Display name for the player snake
    pub player_name: String,
    /// Head displacement per tick
    pub speed: f32,
    /// Collision/render radius at score 0
    pub base_radius: f32,
    /// Target segment count at (re)spawn
    pub start_length: usize,

    // === Growth ===
    /// Score and target-length increment per orb
    pub growth_per_orb: u32,
    /// Radius bonus is score / divisor ...
    pub radius_growth_divisor: f32,
    /// ... capped here
    pub radius_bonus_cap: f32,

    // === Collision ===
    /// Fraction of the full radius lost linearly by the tail segment
    pub tail_taper: f32,
    /// Leading own-segments exempt from self-collision
    pub neck_exempt_segments: usize,

    // === Lifecycle ===
    /// Respawn delay drawn uniformly from this range, in sim seconds
    pub respawn_delay_min: f32,
    pub respawn_delay_max: f32,

    // === Steering ===
    /// Player heading holds still below this cursor distance
    pub cursor_deadzone: f32,
    /// Per-axis random-walk jitter when no orb exists
    pub drift_jitter: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            plane_width: PLANE_WIDTH,
            plane_height: PLANE_HEIGHT,
            tick_dt: TICK_DT,

            orb_count: ORB_COUNT,
            orb_radius: ORB_RADIUS,

            bot_count: BOT_COUNT,
            player_name: "Player".to_string(),
            speed: SNAKE_SPEED,
            base_radius: SNAKE_BASE_RADIUS,
            start_length: START_LENGTH,

            growth_per_orb: GROWTH_PER_ORB,
            radius_growth_divisor: RADIUS_GROWTH_DIVISOR,
            radius_bonus_cap: RADIUS_BONUS_CAP,

            tail_taper: TAIL_TAPER,
            neck_exempt_segments: NECK_EXEMPT_SEGMENTS,

            respawn_delay_min: RESPAWN_DELAY_MIN,
            respawn_delay_max: RESPAWN_DELAY_MAX,

            cursor_deadzone: CURSOR_DEADZONE,
            drift_jitter: DRIFT_JITTER,
        }
    }
}

impl Settings {
    /// Plane bounds as a vector
    pub fn bounds(&self) -> Vec2 {
        Vec2::new(self.plane_width, self.plane_height)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_consts() {
        let settings = Settings::default();
        assert_eq!(settings.orb_count, ORB_COUNT);
        assert_eq!(settings.neck_exempt_segments, NECK_EXEMPT_SEGMENTS);
        assert_eq!(settings.bounds(), Vec2::new(PLANE_WIDTH, PLANE_HEIGHT));
        assert!(settings.respawn_delay_min < settings.respawn_delay_max);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.bot_count = 3;
        settings.player_name = "Ada".to_string();

        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.bot_count, 3);
        assert_eq!(back.player_name, "Ada");
        assert_eq!(back.speed, settings.speed);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let back: Settings = serde_json::from_str(r#"{"bot_count": 2}"#).unwrap();
        assert_eq!(back.bot_count, 2);
        assert_eq!(back.orb_count, ORB_COUNT);
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/arena.json"));
        assert_eq!(settings.orb_count, ORB_COUNT);
    }
}
