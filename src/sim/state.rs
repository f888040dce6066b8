//! Arena state and core simulation types
//!
//! All mutable simulation state is owned by [`ArenaState`]; phase functions
//! borrow it, nothing lives in module-level globals.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::ORB_TINT;
use crate::settings::Settings;
use crate::wrap_point;

use super::collision::tapered_radius;

/// A collectible point, replaced elsewhere the moment it is consumed
#[derive(Debug, Clone)]
pub struct Orb {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Fixed visual tag, passed through to renderers untouched
    pub tint: &'static str,
}

impl Orb {
    /// Spawn an orb at a uniformly random position within bounds
    pub fn spawn(id: u32, rng: &mut Pcg32, settings: &Settings) -> Self {
        Self {
            id,
            pos: random_point(rng, settings.bounds()),
            radius: settings.orb_radius,
            tint: ORB_TINT,
        }
    }
}

/// Steering policy, chosen at construction and fixed for the snake's lifetime
#[derive(Debug, Clone, PartialEq)]
pub enum Steering {
    /// Heads toward an externally supplied cursor point
    Player { cursor: Vec2 },
    /// Chases the nearest live orb, drifting randomly when none exist.
    /// The pursued orb is held by id, never by reference: anyone may consume
    /// it between ticks, so it is re-resolved every tick.
    Seeker { target_orb: Option<u32> },
}

/// Life state machine: alive, or dead with a pending respawn deadline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LifeState {
    Alive,
    Dead { respawn_at: f32 },
}

/// A player- or policy-steered snake
#[derive(Debug, Clone)]
pub struct Snake {
    pub id: u32,
    pub name: String,
    pub steering: Steering,
    /// Unit heading; renormalized by the steering pass
    pub heading: Vec2,
    /// Head displacement per tick
    pub speed: f32,
    /// Segment chain, head first; never empty
    pub segments: Vec<Vec2>,
    /// Segment count the chain is trimmed to after each advance
    pub target_len: usize,
    pub score: u32,
    pub life: LifeState,
}

impl Snake {
    pub fn new(id: u32, name: String, steering: Steering, pos: Vec2, settings: &Settings) -> Self {
        Self {
            id,
            name,
            steering,
            heading: Vec2::X,
            speed: settings.speed,
            segments: vec![pos],
            target_len: settings.start_length,
            score: 0,
            life: LifeState::Alive,
        }
    }

    pub fn is_alive(&self) -> bool {
        matches!(self.life, LifeState::Alive)
    }

    pub fn is_player(&self) -> bool {
        matches!(self.steering, Steering::Player { .. })
    }

    pub fn head(&self) -> Vec2 {
        self.segments[0]
    }

    /// Effective radius: grows with score, capped. Feeds both collision
    /// tests and snapshot radii so the two can never diverge.
    pub fn radius(&self, settings: &Settings) -> f32 {
        let bonus = (self.score as f32 / settings.radius_growth_divisor)
            .min(settings.radius_bonus_cap);
        settings.base_radius + bonus
    }

    /// Hit radius of segment `index`, tapering toward the tail
    pub fn segment_radius(&self, index: usize, settings: &Settings) -> f32 {
        tapered_radius(
            self.radius(settings),
            index,
            self.segments.len(),
            settings.tail_taper,
        )
    }

    /// Move the head one step along the current heading and trim the tail.
    /// The only mutator of position state.
    pub fn advance(&mut self, bounds: Vec2) {
        if !self.is_alive() {
            return;
        }
        let new_head = wrap_point(self.head() + self.heading * self.speed, bounds);
        self.segments.insert(0, new_head);
        self.segments.truncate(self.target_len);
    }

    /// Grow score and target length by the same increment
    pub fn grow(&mut self, amount: u32) {
        self.target_len += amount as usize;
        self.score += amount;
    }

    /// Alive -> Dead transition: reset the chain to a single random segment,
    /// reset growth, drop any pursuit, and schedule the respawn deadline
    /// (replacing a pending one).
    pub fn kill(&mut self, now: f32, rng: &mut Pcg32, settings: &Settings) {
        let delay = rng.random_range(settings.respawn_delay_min..settings.respawn_delay_max);
        self.life = LifeState::Dead {
            respawn_at: now + delay,
        };
        self.segments.clear();
        self.segments.push(random_point(rng, settings.bounds()));
        self.target_len = settings.start_length;
        self.score = 0;
        if let Steering::Seeker { target_orb } = &mut self.steering {
            *target_orb = None;
        }
        log::debug!("{} died, respawn at t={:.1}s", self.name, now + delay);
    }
}

/// Complete simulation state: snakes, orbs, RNG, and the clock
#[derive(Debug, Clone)]
pub struct ArenaState {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation time in seconds
    pub time: f32,
    pub tick_count: u64,
    pub orbs: Vec<Orb>,
    pub snakes: Vec<Snake>,
    pub(crate) rng: Pcg32,
    pub(crate) next_id: u32,
}

impl ArenaState {
    /// Create an arena with a full orb registry, `bot_count` seekers, and
    /// one player snake
    pub fn new(seed: u64, settings: Settings) -> Self {
        let mut state = Self {
            seed,
            time: 0.0,
            tick_count: 0,
            orbs: Vec::with_capacity(settings.orb_count),
            snakes: Vec::with_capacity(settings.bot_count + 1),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            settings,
        };

        state.spawn_orbs(state.settings.orb_count);

        for i in 0..state.settings.bot_count {
            let id = alloc_id(&mut state.next_id);
            let pos = random_point(&mut state.rng, state.settings.bounds());
            state.snakes.push(Snake::new(
                id,
                format!("Bot{}", i + 1),
                Steering::Seeker { target_orb: None },
                pos,
                &state.settings,
            ));
        }

        let id = alloc_id(&mut state.next_id);
        let pos = random_point(&mut state.rng, state.settings.bounds());
        let cursor = state.settings.bounds() * 0.5;
        let name = state.settings.player_name.clone();
        state
            .snakes
            .push(Snake::new(id, name, Steering::Player { cursor }, pos, &state.settings));

        log::info!(
            "arena seeded ({seed}): {} bots + player, {} orbs",
            state.settings.bot_count,
            state.orbs.len()
        );
        state
    }

    /// Clear and refill the orb registry with `count` randomly placed orbs
    pub fn spawn_orbs(&mut self, count: usize) {
        self.orbs.clear();
        for _ in 0..count {
            let id = alloc_id(&mut self.next_id);
            self.orbs.push(Orb::spawn(id, &mut self.rng, &self.settings));
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        alloc_id(&mut self.next_id)
    }
}

/// Uniformly random point within the plane
pub(crate) fn random_point(rng: &mut Pcg32, bounds: Vec2) -> Vec2 {
    Vec2::new(
        rng.random_range(0.0..bounds.x),
        rng.random_range(0.0..bounds.y),
    )
}

/// Allocate from a shared id counter
pub(crate) fn alloc_id(next_id: &mut u32) -> u32 {
    let id = *next_id;
    *next_id += 1;
    id
}
