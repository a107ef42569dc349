//! Frame-driven simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - Motion is integrated once per frame
//! - Spawn timing and score use elapsed milliseconds
//! - Spawn jitter comes from a seeded RNG, so a seed replays a run

pub mod actor;
pub mod backdrop;
pub mod collision;
pub mod input;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use actor::{Actor, Collision};
pub use backdrop::Backdrop;
pub use collision::{Circle, actor_obstacle_collision, first_collision};
pub use input::{Direction, InputState};
pub use obstacle::{Obstacle, ObstacleSpawner, SpawnReport};
pub use state::{GameEvent, SessionPhase, SessionState, World};
pub use tick::tick;
