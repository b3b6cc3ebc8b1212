use common::config::Validate;
use common::games::connect::{DEFAULT_WIN_LENGTH, FirstPlayer, MIN_BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// Largest board the terminal renderer draws legibly.
pub const MAX_CONSOLE_BOARD_SIZE: usize = 20;
pub const MIN_CONSOLE_WIN_LENGTH: usize = 3;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConsoleConfig {
    pub board_size: usize,
    pub win_length: usize,
    pub first_player: FirstPlayer,
}

impl Validate for ConsoleConfig {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_CONSOLE_BOARD_SIZE {
            return Err(format!(
                "board_size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_CONSOLE_BOARD_SIZE
            ));
        }
        if self.win_length < MIN_CONSOLE_WIN_LENGTH || self.win_length > self.board_size {
            return Err(format!(
                "win_length must be between {} and {} (board size)",
                MIN_CONSOLE_WIN_LENGTH, self.board_size
            ));
        }
        Ok(())
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
            win_length: DEFAULT_WIN_LENGTH,
            first_player: FirstPlayer::X,
        }
    }
}
