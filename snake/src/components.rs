use std::ops::Add;

//
// Position

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// True while the position lies inside `[0, width) x [0, height)`
    pub fn is_within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y)
    }
}

//
// Direction

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit vector for this direction scaled by `cell_size`
    pub fn offset(self, cell_size: i32) -> Position {
        match self {
            Direction::Up => Position::new(0, -cell_size),
            Direction::Down => Position::new(0, cell_size),
            Direction::Left => Position::new(-cell_size, 0),
            Direction::Right => Position::new(cell_size, 0),
        }
    }
}
