//! Session state and the per-session world
//!
//! A `World` holds every entity of one run. Restarting builds a new one; no
//! state carries over.

use super::actor::Actor;
use super::backdrop::Backdrop;
use super::obstacle::{Obstacle, ObstacleSpawner};
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    /// Run ended; only a restart leaves this phase
    Ended,
}

/// Score and phase of one run
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Continuous score accumulator
    score: f64,
    phase: SessionPhase,
    /// Points per millisecond
    score_rate: f64,
}

impl SessionState {
    pub fn new(score_rate: f64) -> Self {
        Self {
            score: 0.0,
            phase: SessionPhase::Running,
            score_rate,
        }
    }

    #[inline]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Raw accumulated score
    #[inline]
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Score rounded for display and the leaderboard
    pub fn display_score(&self) -> u64 {
        self.score.round() as u64
    }

    /// Accrue score for `dt_ms` of play; no-op once ended
    pub fn accrue(&mut self, dt_ms: f64) {
        if self.is_running() && dt_ms > 0.0 {
            self.score += dt_ms * self.score_rate;
        }
    }

    /// End the session. Returns true only for the call that made the transition.
    pub fn end(&mut self) -> bool {
        match self.phase {
            SessionPhase::Running => {
                self.phase = SessionPhase::Ended;
                true
            }
            SessionPhase::Ended => false,
        }
    }
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ObstacleSpawned { id: u32 },
    ObstacleCleared { id: u32 },
    /// The actor touched an obstacle and the session ended
    GameOver { obstacle_id: u32, score: u64 },
}

/// All entities of a single run
#[derive(Debug, Clone)]
pub struct World {
    pub seed: u64,
    pub tuning: Tuning,
    pub session: SessionState,
    pub actor: Actor,
    pub backdrop: Backdrop,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: ObstacleSpawner,
    /// Frames simulated so far
    pub frame: u64,
}

impl World {
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            session: SessionState::new(tuning.score_rate),
            actor: Actor::new(&tuning),
            backdrop: Backdrop::new(&tuning),
            obstacles: Vec::new(),
            spawner: ObstacleSpawner::new(&tuning, seed),
            frame: 0,
            tuning,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.tuning.world_width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.tuning.world_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_accrues_while_running() {
        let mut session = SessionState::new(0.001);
        session.accrue(1500.0);
        assert!((session.score() - 1.5).abs() < 1e-9);
        assert_eq!(session.display_score(), 2);

        session.accrue(-500.0);
        assert!((session.score() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_end_fires_once() {
        let mut session = SessionState::new(0.001);
        assert!(session.end());
        assert!(!session.end());
        assert_eq!(session.phase(), SessionPhase::Ended);

        session.accrue(10_000.0);
        assert_eq!(session.score(), 0.0);
    }

    #[test]
    fn test_new_world_layout() {
        let world = World::new(Tuning::default(), 3);
        assert!(world.session.is_running());
        assert!(world.obstacles.is_empty());
        assert_eq!(world.actor.pos.x, 0.0);
        assert!(world.actor.is_grounded());
        assert_eq!(world.width(), 800.0);
        assert_eq!(world.height(), 720.0);
    }
}
