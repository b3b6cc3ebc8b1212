use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opponent(&self) -> Symbol {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::X => write!(f, "x"),
            Symbol::O => write!(f, "o"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
    NorthWest,
    SouthEast,
    SouthWest,
    NorthEast,
}

impl Direction {
    /// (row delta, column delta); north is towards row 0.
    pub fn delta(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthEast => (-1, 1),
        }
    }

    /// Neighbour of `position` in this direction, or `None` when it leaves the board.
    pub fn step(&self, position: Position, board_size: usize) -> Option<Position> {
        let (d_row, d_column) = self.delta();
        let row = position.row.checked_add_signed(d_row)?;
        let column = position.column.checked_add_signed(d_column)?;
        if row >= board_size || column >= board_size {
            return None;
        }
        Some(Position::new(row, column))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
    Diagonal,
    AntiDiagonal,
}

impl Axis {
    /// Order in which axes are evaluated after every placement.
    pub const ALL: [Axis; 4] = [
        Axis::Vertical,
        Axis::Horizontal,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    pub fn directions(&self) -> (Direction, Direction) {
        match self {
            Axis::Vertical => (Direction::North, Direction::South),
            Axis::Horizontal => (Direction::West, Direction::East),
            Axis::Diagonal => (Direction::NorthWest, Direction::SouthEast),
            Axis::AntiDiagonal => (Direction::SouthWest, Direction::NorthEast),
        }
    }
}
