//! Per-frame simulation step
//!
//! Entity motion is per frame; score and spawn timing use elapsed
//! milliseconds. Order within a frame is fixed: score, backdrop, actor
//! (with its collision check), then obstacles.

use super::input::InputState;
use super::state::{GameEvent, World};

/// Advance the world by one frame that took `dt_ms` milliseconds
///
/// Does nothing once the session has ended, so a stray extra tick cannot
/// produce a second game over.
pub fn tick(world: &mut World, input: &InputState, dt_ms: f64) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !world.session.is_running() {
        return events;
    }

    // Clock skew must never lower the score
    let dt_ms = dt_ms.max(0.0);
    world.frame += 1;

    world.session.accrue(dt_ms);
    world.backdrop.update();

    if let Some(collision) = world.actor.update(input, &world.obstacles) {
        if world.session.end() {
            let score = world.session.display_score();
            log::debug!(
                "Hit obstacle {} on frame {}, final score {}",
                collision.obstacle_id,
                world.frame,
                score
            );
            events.push(GameEvent::GameOver {
                obstacle_id: collision.obstacle_id,
                score,
            });
        }
    }

    // Obstacles still move on the frame the run ends
    let report = world.spawner.advance(dt_ms, &mut world.obstacles);
    if let Some(id) = report.spawned {
        events.push(GameEvent::ObstacleSpawned { id });
    }
    events.extend(
        report
            .removed
            .into_iter()
            .map(|id| GameEvent::ObstacleCleared { id }),
    );

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::Direction;
    use crate::sim::obstacle::Obstacle;
    use crate::sim::state::SessionPhase;
    use crate::tuning::Tuning;

    const FRAME_MS: f64 = 1000.0 / 60.0;

    fn world_with_obstacle_at(x: f32) -> World {
        let mut world = World::new(Tuning::default(), 12345);
        let mut obstacle = Obstacle::new(99, &world.tuning);
        obstacle.pos.x = x;
        world.obstacles.push(obstacle);
        world
    }

    #[test]
    fn test_tick_accrues_score() {
        let mut world = World::new(Tuning::default(), 1);
        let input = InputState::new();
        for _ in 0..60 {
            tick(&mut world, &input, FRAME_MS);
        }
        assert!((world.session.score() - 1.0).abs() < 1e-9);
        assert_eq!(world.session.display_score(), 1);
        assert_eq!(world.frame, 60);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut world = World::new(Tuning::default(), 1);
        tick(&mut world, &InputState::new(), 2000.0);
        let before = world.session.score();
        tick(&mut world, &InputState::new(), -1000.0);
        assert_eq!(world.session.score(), before);
    }

    #[test]
    fn test_collision_ends_session_once() {
        let mut world = world_with_obstacle_at(20.0);
        let input = InputState::new();

        let events = tick(&mut world, &input, FRAME_MS);
        assert!(events.contains(&GameEvent::GameOver {
            obstacle_id: 99,
            score: 0
        }));
        assert_eq!(world.session.phase(), SessionPhase::Ended);

        // Further ticks are inert
        let frame = world.frame;
        let x = world.obstacles[0].pos.x;
        for _ in 0..10 {
            assert!(tick(&mut world, &input, FRAME_MS).is_empty());
        }
        assert_eq!(world.frame, frame);
        assert_eq!(world.obstacles[0].pos.x, x);
        assert_eq!(world.session.phase(), SessionPhase::Ended);
    }

    #[test]
    fn test_jump_clears_obstacle() {
        let mut world = World::new(Tuning::default(), 5);
        let mut input = InputState::new();

        // Survive an obstacle sliding past by jumping at the right moment
        let mut obstacle = Obstacle::new(1, &world.tuning);
        obstacle.pos.x = 250.0;
        world.obstacles.push(obstacle);
        world.spawner.interval = f64::INFINITY;

        let mut cleared = false;
        for _ in 0..200 {
            let near = world
                .obstacles
                .first()
                .is_some_and(|o| o.pos.x < 110.0 && o.pos.x > 0.0);
            if near {
                input.press(Direction::Up);
            } else {
                input.release(Direction::Up);
            }
            let events = tick(&mut world, &input, FRAME_MS);
            if events.contains(&GameEvent::ObstacleCleared { id: 1 }) {
                cleared = true;
            }
            if !world.session.is_running() {
                break;
            }
        }
        assert!(world.session.is_running(), "actor should have jumped clear");
        assert!(cleared);
    }

    #[test]
    fn test_determinism() {
        let mut w1 = World::new(Tuning::default(), 99999);
        let mut w2 = World::new(Tuning::default(), 99999);
        let input = InputState::new();

        for _ in 0..1000 {
            let e1 = tick(&mut w1, &input, FRAME_MS);
            let e2 = tick(&mut w2, &input, FRAME_MS);
            assert_eq!(e1, e2);
        }
        assert_eq!(w1.frame, w2.frame);
        assert_eq!(w1.obstacles.len(), w2.obstacles.len());
        assert_eq!(w1.session.phase(), w2.session.phase());
    }
}
