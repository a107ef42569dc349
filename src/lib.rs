//! Endless Runner - dodge the oncoming obstacles for as long as you can
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (actor physics, obstacles, collisions, session state)
//! - `game`: Per-frame loop orchestration, leaderboard entry, restart
//! - `renderer`: Drawing surface abstraction and scene drawing
//! - `platform`: Browser glue (canvas, LocalStorage, prompt)
//! - `persistence`: Key-value storage abstraction
//! - `tuning`: Data-driven game balance

pub mod game;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::{Game, LoopControl};
pub use highscores::Leaderboard;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// World dimensions (canvas pixels)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 720.0;

    /// Actor defaults
    pub const ACTOR_WIDTH: f32 = 60.0;
    pub const ACTOR_HEIGHT: f32 = 100.0;
    /// Horizontal run speed (pixels per frame)
    pub const ACTOR_RUN_SPEED: f32 = 5.0;
    /// Upward velocity applied on jump (pixels per frame)
    pub const ACTOR_JUMP_IMPULSE: f32 = 20.0;
    /// Downward acceleration while airborne (pixels per frame²)
    pub const GRAVITY: f32 = 1.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 100.0;
    pub const OBSTACLE_HEIGHT: f32 = 120.0;
    pub const OBSTACLE_SPEED: f32 = 6.0;

    /// Base delay between spawns (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 1000.0;
    /// Extra random delay, drawn uniformly per spawn cycle (ms)
    pub const SPAWN_JITTER_MIN_MS: f64 = 1000.0;
    pub const SPAWN_JITTER_MAX_MS: f64 = 6000.0;

    /// Backdrop image strip
    pub const BACKDROP_WIDTH: f32 = 9000.0;
    pub const BACKDROP_SPEED: f32 = 5.0;

    /// Points per millisecond survived
    pub const SCORE_RATE: f64 = 0.001;
}
