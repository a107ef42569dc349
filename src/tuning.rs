//! Data-driven game balance
//!
//! Defaults come from [`crate::consts`]. A JSON override may be stored under
//! [`Tuning::STORAGE_KEY`]; any field left out keeps its default.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::{KeyValueStore, load_json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub world_width: f32,
    pub world_height: f32,

    pub actor_width: f32,
    pub actor_height: f32,
    pub actor_run_speed: f32,
    pub actor_jump_impulse: f32,
    pub gravity: f32,

    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub obstacle_speed: f32,

    pub spawn_interval_ms: f64,
    pub spawn_jitter_min_ms: f64,
    pub spawn_jitter_max_ms: f64,

    pub backdrop_width: f32,
    pub backdrop_speed: f32,

    /// Points per millisecond
    pub score_rate: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            actor_run_speed: ACTOR_RUN_SPEED,
            actor_jump_impulse: ACTOR_JUMP_IMPULSE,
            gravity: GRAVITY,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_jitter_min_ms: SPAWN_JITTER_MIN_MS,
            spawn_jitter_max_ms: SPAWN_JITTER_MAX_MS,
            backdrop_width: BACKDROP_WIDTH,
            backdrop_speed: BACKDROP_SPEED,
            score_rate: SCORE_RATE,
        }
    }
}

impl Tuning {
    /// Storage key for balance overrides
    pub const STORAGE_KEY: &'static str = "endless_runner_tuning";

    /// Whether this tuning describes a playable world
    ///
    /// Entities must fit inside the world, otherwise the position clamps have
    /// no valid range. Obstacles must move left or they are never retired.
    pub fn is_valid(&self) -> bool {
        let positive = [
            self.world_width,
            self.world_height,
            self.actor_width,
            self.actor_height,
            self.obstacle_width,
            self.obstacle_height,
            self.backdrop_width,
        ]
        .iter()
        .all(|v| v.is_finite() && *v > 0.0);

        positive
            && self.actor_width <= self.world_width
            && self.actor_height <= self.world_height
            && self.obstacle_width <= self.world_width
            && self.obstacle_height <= self.world_height
            && self.obstacle_speed.is_finite()
            && self.obstacle_speed > 0.0
            && self.backdrop_speed.is_finite()
            && self.backdrop_speed >= 0.0
            && self.gravity >= 0.0
            && self.score_rate >= 0.0
            && self.spawn_jitter_min_ms >= 0.0
            && self.spawn_jitter_min_ms < self.spawn_jitter_max_ms
    }

    /// Load overrides from storage, falling back to defaults
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match load_json::<Tuning>(store, Self::STORAGE_KEY) {
            Some(tuning) if tuning.is_valid() => {
                log::info!("Loaded tuning overrides");
                tuning
            }
            Some(_) => {
                log::warn!("Stored tuning is not playable, using defaults");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_default_is_valid() {
        assert!(Tuning::default().is_valid());
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let mut store = MemoryStore::new();
        store.set(Tuning::STORAGE_KEY, r#"{"gravity": 2.0, "obstacle_speed": 9.0}"#);

        let tuning = Tuning::load(&store);
        assert_eq!(tuning.gravity, 2.0);
        assert_eq!(tuning.obstacle_speed, 9.0);
        assert_eq!(tuning.world_width, WORLD_WIDTH);
    }

    #[test]
    fn test_actor_wider_than_world_rejected() {
        let mut store = MemoryStore::new();
        store.set(Tuning::STORAGE_KEY, r#"{"world_width": 50.0}"#);
        assert_eq!(Tuning::load(&store), Tuning::default());
    }

    #[test]
    fn test_stalled_obstacles_rejected() {
        for speed in [0.0, -6.0, f32::NAN] {
            let tuning = Tuning {
                obstacle_speed: speed,
                ..Default::default()
            };
            assert!(!tuning.is_valid(), "obstacle_speed {}", speed);
        }

        let mut store = MemoryStore::new();
        store.set(Tuning::STORAGE_KEY, r#"{"obstacle_speed": 0.0}"#);
        assert_eq!(Tuning::load(&store).obstacle_speed, OBSTACLE_SPEED);
    }

    #[test]
    fn test_backdrop_speed_bounds() {
        let still = Tuning {
            backdrop_speed: 0.0,
            ..Default::default()
        };
        assert!(still.is_valid());

        let backwards = Tuning {
            backdrop_speed: -1.0,
            ..Default::default()
        };
        assert!(!backwards.is_valid());
    }

    #[test]
    fn test_empty_jitter_range_rejected() {
        let tuning = Tuning {
            spawn_jitter_min_ms: 500.0,
            spawn_jitter_max_ms: 500.0,
            ..Default::default()
        };
        assert!(!tuning.is_valid());
    }
}
