//! Obstacles and their spawner

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Circle;
use crate::tuning::Tuning;

/// An obstacle sliding in from the right edge
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Leftward speed (pixels per frame)
    pub speed: f32,
    pub marked_for_removal: bool,
}

impl Obstacle {
    /// New obstacle resting on the ground, flush with the right edge
    pub fn new(id: u32, tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.obstacle_width, tuning.obstacle_height);
        Self {
            id,
            pos: Vec2::new(tuning.world_width - size.x, tuning.world_height - size.y),
            size,
            speed: tuning.obstacle_speed,
            marked_for_removal: false,
        }
    }

    pub fn hitbox(&self) -> Circle {
        Circle::from_box(self.pos, self.size)
    }

    /// Move one frame; flag for removal once fully past the left edge
    pub fn update(&mut self) {
        self.pos.x -= self.speed;
        if self.pos.x < -self.size.x {
            self.marked_for_removal = true;
        }
    }
}

/// What happened during one spawner step
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub spawned: Option<u32>,
    pub removed: Vec<u32>,
}

/// Produces obstacles at randomized intervals and retires off-screen ones
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    /// Time since the last spawn (ms)
    pub timer: f64,
    /// Fixed part of the spawn delay (ms)
    pub interval: f64,
    /// Random part of the current spawn delay (ms)
    pub jitter: f64,
    jitter_range: (f64, f64),
    rng: Pcg32,
    next_id: u32,
    tuning: Tuning,
}

impl ObstacleSpawner {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        let mut spawner = Self {
            timer: 0.0,
            interval: tuning.spawn_interval_ms,
            jitter: 0.0,
            jitter_range: (tuning.spawn_jitter_min_ms, tuning.spawn_jitter_max_ms),
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tuning: tuning.clone(),
        };
        spawner.jitter = spawner.draw_jitter();
        spawner
    }

    fn draw_jitter(&mut self) -> f64 {
        let (min, max) = self.jitter_range;
        if min < max {
            self.rng.random_range(min..max)
        } else {
            min
        }
    }

    /// Total delay before the next spawn (ms)
    #[inline]
    pub fn threshold(&self) -> f64 {
        self.interval + self.jitter
    }

    /// Advance by `dt_ms`, spawning into and pruning `obstacles`
    ///
    /// At most one obstacle spawns per call regardless of `dt_ms`: the timer is
    /// zeroed on spawn, not decremented. Survivors keep their spawn order.
    pub fn advance(&mut self, dt_ms: f64, obstacles: &mut Vec<Obstacle>) -> SpawnReport {
        let mut report = SpawnReport::default();

        self.timer += dt_ms;
        if self.timer > self.threshold() {
            let id = self.next_id;
            self.next_id += 1;
            obstacles.push(Obstacle::new(id, &self.tuning));
            self.timer = 0.0;
            self.jitter = self.draw_jitter();
            log::debug!("Spawned obstacle {} (next in {:.0} ms)", id, self.threshold());
            report.spawned = Some(id);
        }

        for obstacle in obstacles.iter_mut() {
            obstacle.update();
        }

        obstacles.retain(|obstacle| {
            if obstacle.marked_for_removal {
                report.removed.push(obstacle.id);
            }
            !obstacle.marked_for_removal
        });

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_marked_only_past_left_edge() {
        let tuning = Tuning::default();
        let mut obstacle = Obstacle::new(1, &tuning);
        assert_eq!(obstacle.pos.x, 700.0);

        // 700 - 6 * 133 = -98: still partially visible
        for _ in 0..133 {
            obstacle.update();
        }
        assert_eq!(obstacle.pos.x, -98.0);
        assert!(!obstacle.marked_for_removal);

        obstacle.update();
        assert_eq!(obstacle.pos.x, -104.0);
        assert!(obstacle.marked_for_removal);
    }

    #[test]
    fn test_exactly_at_trailing_edge_not_removed() {
        let tuning = Tuning::default();
        let mut obstacle = Obstacle::new(1, &tuning);
        obstacle.pos.x = -94.0;
        obstacle.update();
        assert_eq!(obstacle.pos.x, -100.0);
        assert!(!obstacle.marked_for_removal);
    }

    #[test]
    fn test_jitter_within_range() {
        let tuning = Tuning::default();
        for seed in 0..50 {
            let spawner = ObstacleSpawner::new(&tuning, seed);
            assert!(spawner.jitter >= 1000.0 && spawner.jitter < 6000.0);
        }
    }

    #[test]
    fn test_spawn_after_threshold() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::new(&tuning, 42);
        let mut obstacles = Vec::new();

        let report = spawner.advance(spawner.threshold(), &mut obstacles);
        assert_eq!(report.spawned, None, "threshold must be exceeded, not met");

        let report = spawner.advance(1.0, &mut obstacles);
        assert_eq!(report.spawned, Some(1));
        assert_eq!(obstacles.len(), 1);
        assert_eq!(spawner.timer, 0.0);
        // Moved once on the frame it spawned
        assert_eq!(obstacles[0].pos.x, 694.0);
    }

    #[test]
    fn test_at_most_one_spawn_per_advance() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::new(&tuning, 7);
        let mut obstacles = Vec::new();

        let report = spawner.advance(1.0e9, &mut obstacles);
        assert!(report.spawned.is_some());
        assert_eq!(obstacles.len(), 1);
        assert_eq!(spawner.timer, 0.0);
    }

    #[test]
    fn test_prune_preserves_order() {
        let tuning = Tuning::default();
        let mut spawner = ObstacleSpawner::new(&tuning, 1);
        let mut obstacles: Vec<Obstacle> = (1..=3).map(|id| Obstacle::new(id, &tuning)).collect();
        obstacles[1].pos.x = -100.0;

        let report = spawner.advance(0.0, &mut obstacles);
        assert_eq!(report.removed, vec![2]);
        assert_eq!(obstacles.iter().map(|o| o.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_same_seed_same_schedule() {
        let tuning = Tuning::default();
        let mut a = ObstacleSpawner::new(&tuning, 99);
        let mut b = ObstacleSpawner::new(&tuning, 99);
        let (mut oa, mut ob) = (Vec::new(), Vec::new());

        for _ in 0..2000 {
            let ra = a.advance(16.0, &mut oa);
            let rb = b.advance(16.0, &mut ob);
            assert_eq!(ra, rb);
        }
        assert_eq!(a.jitter, b.jitter);
    }
}
