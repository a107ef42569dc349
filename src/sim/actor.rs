//! The player-controlled runner

use glam::Vec2;

use super::collision::{Circle, first_collision};
use super::input::{Direction, InputState};
use super::obstacle::Obstacle;
use crate::tuning::Tuning;

/// Emitted when the actor overlaps an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Collision {
    pub obstacle_id: u32,
}

/// The runner
///
/// Motion is integrated per frame, not per millisecond: velocities are in
/// pixels/frame and gravity in pixels/frame².
#[derive(Debug, Clone)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// x = horizontal run speed, y = vertical speed (positive is down)
    pub vel: Vec2,
    pub gravity: f32,
    pub run_speed: f32,
    pub jump_impulse: f32,
    /// World extent the actor is kept inside
    pub world: Vec2,
}

impl Actor {
    /// New actor standing on the ground at the left edge
    pub fn new(tuning: &Tuning) -> Self {
        let size = Vec2::new(tuning.actor_width, tuning.actor_height);
        let world = Vec2::new(tuning.world_width, tuning.world_height);
        Self {
            pos: Vec2::new(0.0, world.y - size.y),
            size,
            vel: Vec2::ZERO,
            gravity: tuning.gravity,
            run_speed: tuning.actor_run_speed,
            jump_impulse: tuning.actor_jump_impulse,
            world,
        }
    }

    /// Largest allowed y (feet on the floor)
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.world.y - self.size.y
    }

    /// Largest allowed x (right edge on the world edge)
    #[inline]
    pub fn max_x(&self) -> f32 {
        self.world.x - self.size.x
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.pos.y >= self.ground_y()
    }

    pub fn hitbox(&self) -> Circle {
        Circle::from_box(self.pos, self.size)
    }

    /// Advance one frame
    ///
    /// Collision is tested against the positions at the start of the frame,
    /// before the actor moves; a hit shows up one frame late at worst.
    pub fn update(&mut self, input: &InputState, obstacles: &[Obstacle]) -> Option<Collision> {
        let collision = first_collision(self, obstacles).map(|o| Collision { obstacle_id: o.id });

        // One control wins per frame: Right > Left > Up (grounded only) > idle.
        // A jump leaves the horizontal speed from the previous frame untouched.
        if input.is_active(Direction::Right) {
            self.vel.x = self.run_speed;
        } else if input.is_active(Direction::Left) {
            self.vel.x = -self.run_speed;
        } else if input.is_active(Direction::Up) && self.is_grounded() {
            self.vel.y = -self.jump_impulse;
        } else {
            self.vel.x = 0.0;
        }

        self.pos.x = (self.pos.x + self.vel.x).max(0.0).min(self.max_x());

        self.pos.y += self.vel.y;
        if self.is_grounded() {
            self.vel.y = 0.0;
        } else {
            self.vel.y += self.gravity;
        }
        self.pos.y = self.pos.y.min(self.ground_y());

        collision
    }
}
