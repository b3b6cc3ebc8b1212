use super::board::SparseBoard;
use super::error::EngineError;
use super::types::{Position, Symbol};
use super::win_detector::{WinCondition, detect_win_conditions};

pub const MIN_BOARD_SIZE: usize = 3;
pub const DEFAULT_WIN_LENGTH: usize = 3;
pub const MIN_WIN_LENGTH: usize = 2;

/// Rules engine for one game of connect-K on a square board.
///
/// Placement cost depends only on the length of the runs through the placed
/// cell, never on the board area. Once any line has been completed the board
/// is frozen and every further placement is rejected.
#[derive(Debug)]
pub struct ConnectEngine {
    board: SparseBoard,
    win_length: usize,
    win_conditions: Vec<WinCondition>,
}

impl ConnectEngine {
    pub fn new(board_size: usize) -> Result<Self, EngineError> {
        Self::with_win_length(board_size, DEFAULT_WIN_LENGTH)
    }

    pub fn with_win_length(board_size: usize, win_length: usize) -> Result<Self, EngineError> {
        if board_size < MIN_BOARD_SIZE {
            return Err(EngineError::InvalidSize { size: board_size });
        }
        if win_length < MIN_WIN_LENGTH || win_length > board_size {
            return Err(EngineError::InvalidWinLength {
                win_length,
                board_size,
            });
        }

        Ok(Self {
            board: SparseBoard::new(board_size),
            win_length,
            win_conditions: Vec::new(),
        })
    }

    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }

    pub fn occupied_count(&self) -> usize {
        self.board.occupied_count()
    }

    pub fn is_won(&self) -> bool {
        !self.win_conditions.is_empty()
    }

    pub fn validate_position(&self, row: i64, column: i64) -> Result<Position, EngineError> {
        let invalid = EngineError::InvalidCoordinate { row, column };
        let row = usize::try_from(row).map_err(|_| invalid.clone())?;
        let column = usize::try_from(column).map_err(|_| invalid.clone())?;
        let position = Position::new(row, column);
        if !self.board.in_bounds(position) {
            return Err(invalid);
        }
        Ok(position)
    }

    /// Places `symbol` at (`row`, `column`).
    ///
    /// Returns `Ok(false)` for rule rejections (occupied cell, game already
    /// won) and an error only for coordinates outside the board.
    pub fn place_marker(
        &mut self,
        symbol: Symbol,
        row: i64,
        column: i64,
    ) -> Result<bool, EngineError> {
        let position = self.validate_position(row, column)?;

        if self.board.contains(position) {
            return Ok(false);
        }

        if self.is_won() {
            return Ok(false);
        }

        self.board.insert(position, symbol);
        let found = detect_win_conditions(&self.board, position, self.win_length);
        self.win_conditions.extend(found);

        Ok(true)
    }

    pub fn is_board_filled(&self) -> bool {
        self.board.is_filled()
    }

    pub fn get_symbol(&self, position: Position) -> Option<Symbol> {
        self.board.get(position)
    }

    /// Oldest first.
    pub fn get_win_conditions(&self) -> &[WinCondition] {
        &self.win_conditions
    }
}
