mod board;
mod engine;
mod error;
mod highlight;
mod session;
mod types;
mod win_detector;

pub use board::SparseBoard;
pub use engine::{ConnectEngine, DEFAULT_WIN_LENGTH, MIN_BOARD_SIZE, MIN_WIN_LENGTH};
pub use error::EngineError;
pub use highlight::{CellHighlight, highlight_for};
pub use session::{FirstPlayer, GameSession, GameStatus, MoveOutcome};
pub use types::{Axis, Direction, Position, Symbol};
pub use win_detector::{WinCondition, collect_run, detect_win_conditions};
