//! Scrolling background strip
//!
//! Purely cosmetic. The strip is drawn twice, at `x` and `x + width`, so
//! wrapping the offset back to zero is seamless.

use crate::tuning::Tuning;

#[derive(Debug, Clone)]
pub struct Backdrop {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Backdrop {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: 0.0,
            width: tuning.backdrop_width,
            height: tuning.world_height,
            speed: tuning.backdrop_speed,
        }
    }

    pub fn update(&mut self) {
        self.x -= self.speed;
        if self.x < -self.width {
            self.x = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_wraps() {
        let mut backdrop = Backdrop {
            x: 0.0,
            width: 20.0,
            height: 10.0,
            speed: 5.0,
        };
        for _ in 0..4 {
            backdrop.update();
        }
        assert_eq!(backdrop.x, -20.0);

        backdrop.update();
        assert_eq!(backdrop.x, 0.0);
    }
}
