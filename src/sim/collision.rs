//! Collision detection between the actor and obstacles
//!
//! Both entities are approximated by circles centered on their bounding boxes
//! with radius = half the box width. Height does not enter the test, so a tall
//! narrow sprite gets a hitbox smaller than its image.

use glam::Vec2;

use super::actor::Actor;
use super::obstacle::Obstacle;

/// A collision circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Width-derived bounding circle of an axis-aligned box
    pub fn from_box(pos: Vec2, size: Vec2) -> Self {
        Self {
            center: pos + size / 2.0,
            radius: size.x / 2.0,
        }
    }

    /// Strict overlap: touching circles do not collide
    #[inline]
    pub fn overlaps(&self, other: &Circle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }
}

/// Whether the actor overlaps a single obstacle
pub fn actor_obstacle_collision(actor: &Actor, obstacle: &Obstacle) -> bool {
    actor.hitbox().overlaps(&obstacle.hitbox())
}

/// First obstacle (in spawn order) the actor overlaps, if any
pub fn first_collision<'a>(actor: &Actor, obstacles: &'a [Obstacle]) -> Option<&'a Obstacle> {
    obstacles
        .iter()
        .find(|obstacle| actor_obstacle_collision(actor, obstacle))
}
