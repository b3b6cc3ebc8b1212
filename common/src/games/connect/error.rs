#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidSize { size: usize },
    InvalidCoordinate { row: i64, column: i64 },
    InvalidWinLength { win_length: usize, board_size: usize },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidSize { size } => {
                write!(f, "Board size must be at least 3, got {}", size)
            }
            EngineError::InvalidCoordinate { row, column } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, column)
            }
            EngineError::InvalidWinLength { win_length, board_size } => write!(
                f,
                "Win length {} must be between 2 and the board size {}",
                win_length, board_size
            ),
        }
    }
}

impl std::error::Error for EngineError {}
