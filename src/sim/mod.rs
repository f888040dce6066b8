//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, owned by the arena state
//! - Stable iteration order (list order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::{head_collides, orb_pickup_pass, snake_collision_pass, tapered_radius};
pub use state::{ArenaState, LifeState, Orb, Snake, Steering};
pub use steering::{closest_orb, steer};
pub use tick::{TickInput, tick};
