use super::types::Position;
use super::win_detector::WinCondition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellHighlight {
    /// The cell whose placement completed the line.
    LastConnecting,
    MatchedLine,
}

pub fn highlight_for(
    position: Position,
    win_condition: Option<&WinCondition>,
) -> Option<CellHighlight> {
    let win_condition = win_condition?;

    if win_condition.segment_contains(position) {
        return Some(CellHighlight::MatchedLine);
    }
    if win_condition.initiating_point() == position {
        return Some(CellHighlight::LastConnecting);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::connect::types::{Axis, Symbol};

    fn sample_condition() -> WinCondition {
        WinCondition::new(
            Symbol::O,
            Axis::Horizontal,
            Position::new(1, 2),
            vec![Position::new(1, 1), Position::new(1, 0)],
            vec![],
        )
    }

    #[test]
    fn test_no_condition_no_highlight() {
        assert_eq!(highlight_for(Position::new(1, 1), None), None);
    }

    #[test]
    fn test_initiating_point_highlight() {
        let condition = sample_condition();
        assert_eq!(
            highlight_for(Position::new(1, 2), Some(&condition)),
            Some(CellHighlight::LastConnecting)
        );
    }

    #[test]
    fn test_segment_cells_highlight() {
        let condition = sample_condition();
        for column in 0..2 {
            assert_eq!(
                highlight_for(Position::new(1, column), Some(&condition)),
                Some(CellHighlight::MatchedLine)
            );
        }
        assert_eq!(highlight_for(Position::new(0, 0), Some(&condition)), None);
        assert_eq!(highlight_for(Position::new(2, 2), Some(&condition)), None);
    }
}
