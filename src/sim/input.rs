//! Held directional keys

/// A logical movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Decode a DOM `KeyboardEvent.key` value
    ///
    /// Keys other than the four arrows are not game input.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(Direction::Up),
            "ArrowDown" => Some(Direction::Down),
            "ArrowLeft" => Some(Direction::Left),
            "ArrowRight" => Some(Direction::Right),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Set of currently held directions
///
/// Each direction is either held or not; repeated presses (key auto-repeat)
/// and releases are idempotent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, direction: Direction) {
        self.held[direction.index()] = true;
    }

    pub fn release(&mut self, direction: Direction) {
        self.held[direction.index()] = false;
    }

    pub fn is_active(&self, direction: Direction) -> bool {
        self.held[direction.index()]
    }

    /// Press by key name; unrecognized keys are ignored
    pub fn press_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.press(direction);
                true
            }
            None => false,
        }
    }

    /// Release by key name; unrecognized keys are ignored
    pub fn release_key(&mut self, key: &str) -> bool {
        match Direction::from_key(key) {
            Some(direction) => {
                self.release(direction);
                true
            }
            None => false,
        }
    }

    /// Directions currently held, in `Direction::ALL` order
    pub fn active(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|d| self.is_active(*d))
    }
}
