use tetra::input::Key;
use crate::components::Direction;

/// Keyboard input as the game sees it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Input {
    Steer(Direction),
    Confirm,
    Other,
}

impl Input {
    pub fn from_tetra_key(key: Key) -> Self {
        match key {
            Key::Up => Input::Steer(Direction::Up),
            Key::Down => Input::Steer(Direction::Down),
            Key::Left => Input::Steer(Direction::Left),
            Key::Right => Input::Steer(Direction::Right),
            Key::Enter => Input::Confirm,
            _ => Input::Other,
        }
    }
}
