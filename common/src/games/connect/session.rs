use rand::Rng;
use serde::{Deserialize, Serialize};
use super::engine::ConnectEngine;
use super::error::EngineError;
use super::types::Symbol;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayer {
    X,
    O,
    Random,
}

impl FirstPlayer {
    pub fn resolve(&self) -> Symbol {
        match self {
            FirstPlayer::X => Symbol::X,
            FirstPlayer::O => Symbol::O,
            FirstPlayer::Random => {
                if rand::rng().random() {
                    Symbol::X
                } else {
                    Symbol::O
                }
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Symbol),
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Rejected,
    Placed { symbol: Symbol, status: GameStatus },
}

/// Drives one engine for two alternating players. Restarting swaps in a
/// fresh engine with the same dimensions.
#[derive(Debug)]
pub struct GameSession {
    engine: ConnectEngine,
    first_player: FirstPlayer,
    current_symbol: Symbol,
}

impl GameSession {
    pub fn new(
        board_size: usize,
        win_length: usize,
        first_player: FirstPlayer,
    ) -> Result<Self, EngineError> {
        let engine = ConnectEngine::with_win_length(board_size, win_length)?;
        Ok(Self {
            engine,
            first_player,
            current_symbol: first_player.resolve(),
        })
    }

    pub fn engine(&self) -> &ConnectEngine {
        &self.engine
    }

    pub fn current_symbol(&self) -> Symbol {
        self.current_symbol
    }

    pub fn status(&self) -> GameStatus {
        if let Some(condition) = self.engine.get_win_conditions().first() {
            return GameStatus::Won(condition.symbol());
        }
        if self.engine.is_board_filled() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    pub fn play(&mut self, row: i64, column: i64) -> Result<MoveOutcome, EngineError> {
        let symbol = self.current_symbol;
        if !self.engine.place_marker(symbol, row, column)? {
            return Ok(MoveOutcome::Rejected);
        }

        self.current_symbol = symbol.opponent();
        Ok(MoveOutcome::Placed {
            symbol,
            status: self.status(),
        })
    }

    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.engine =
            ConnectEngine::with_win_length(self.engine.board_size(), self.engine.win_length())?;
        self.current_symbol = self.first_player.resolve();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect::types::Position;

    #[test]
    fn test_turns_alternate_on_success_only() {
        let mut session = GameSession::new(3, 3, FirstPlayer::X).unwrap();
        assert_eq!(session.current_symbol(), Symbol::X);

        let outcome = session.play(0, 0).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                symbol: Symbol::X,
                status: GameStatus::InProgress
            }
        );
        assert_eq!(session.current_symbol(), Symbol::O);

        assert_eq!(session.play(0, 0).unwrap(), MoveOutcome::Rejected);
        assert_eq!(session.current_symbol(), Symbol::O);
    }

    #[test]
    fn test_invalid_coordinate_keeps_turn() {
        let mut session = GameSession::new(3, 3, FirstPlayer::O).unwrap();
        assert!(session.play(3, 0).is_err());
        assert_eq!(session.current_symbol(), Symbol::O);
    }

    #[test]
    fn test_win_ends_game() {
        let mut session = GameSession::new(3, 3, FirstPlayer::X).unwrap();
        for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            session.play(row, column).unwrap();
        }
        let outcome = session.play(0, 2).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Placed {
                symbol: Symbol::X,
                status: GameStatus::Won(Symbol::X)
            }
        );
        assert!(session.status().is_over());
        assert_eq!(session.play(2, 2).unwrap(), MoveOutcome::Rejected);
    }

    #[test]
    fn test_filled_board_is_draw() {
        let mut session = GameSession::new(3, 3, FirstPlayer::X).unwrap();
        let moves = [
            (0, 0),
            (2, 2),
            (1, 1),
            (2, 0),
            (2, 1),
            (0, 1),
            (1, 0),
            (1, 2),
            (0, 2),
        ];
        for (row, column) in moves {
            session.play(row, column).unwrap();
        }
        assert_eq!(session.status(), GameStatus::Draw);
    }

    #[test]
    fn test_restart_replaces_engine() {
        let mut session = GameSession::new(4, 3, FirstPlayer::O).unwrap();
        session.play(1, 1).unwrap();
        session.restart().unwrap();

        assert_eq!(session.engine().occupied_count(), 0);
        assert_eq!(session.engine().get_symbol(Position::new(1, 1)), None);
        assert_eq!(session.engine().board_size(), 4);
        assert_eq!(session.current_symbol(), Symbol::O);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_random_first_player_is_a_symbol() {
        let session = GameSession::new(3, 3, FirstPlayer::Random).unwrap();
        assert!(matches!(session.current_symbol(), Symbol::X | Symbol::O));
    }
}
