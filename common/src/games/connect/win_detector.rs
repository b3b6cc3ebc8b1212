use super::board::SparseBoard;
use super::types::{Axis, Direction, Position, Symbol};

/// One completed line, produced by the placement at `initiating_point`.
/// Segments exclude the initiating point and are ordered nearest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinCondition {
    symbol: Symbol,
    axis: Axis,
    initiating_point: Position,
    first_segment: Vec<Position>,
    second_segment: Vec<Position>,
}

impl WinCondition {
    pub fn new(
        symbol: Symbol,
        axis: Axis,
        initiating_point: Position,
        first_segment: Vec<Position>,
        second_segment: Vec<Position>,
    ) -> Self {
        Self {
            symbol,
            axis,
            initiating_point,
            first_segment,
            second_segment,
        }
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn initiating_point(&self) -> Position {
        self.initiating_point
    }

    pub fn first_segment(&self) -> &[Position] {
        &self.first_segment
    }

    pub fn second_segment(&self) -> &[Position] {
        &self.second_segment
    }

    pub fn line_length(&self) -> usize {
        self.first_segment.len() + self.second_segment.len() + 1
    }

    /// Every cell of the line: initiating point first, then both segments.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.initiating_point)
            .chain(self.first_segment.iter().copied())
            .chain(self.second_segment.iter().copied())
    }

    pub fn segment_contains(&self, position: Position) -> bool {
        self.first_segment.contains(&position) || self.second_segment.contains(&position)
    }
}

/// Walks from `from` (exclusive) along `direction` while cells hold `symbol`.
pub fn collect_run(
    board: &SparseBoard,
    from: Position,
    direction: Direction,
    symbol: Symbol,
) -> Vec<Position> {
    let mut run = Vec::new();
    let mut current = from;
    while let Some(next) = direction.step(current, board.size()) {
        if board.get(next) != Some(symbol) {
            break;
        }
        run.push(next);
        current = next;
    }
    run
}

/// Checks all four axes through `position`; a single move may complete several lines.
pub fn detect_win_conditions(
    board: &SparseBoard,
    position: Position,
    win_length: usize,
) -> Vec<WinCondition> {
    let Some(symbol) = board.get(position) else {
        return Vec::new();
    };

    let mut conditions = Vec::new();
    for axis in Axis::ALL {
        let (first_direction, second_direction) = axis.directions();
        let first_segment = collect_run(board, position, first_direction, symbol);
        let second_segment = collect_run(board, position, second_direction, symbol);

        if first_segment.len() + second_segment.len() + 1 >= win_length {
            conditions.push(WinCondition::new(
                symbol,
                axis,
                position,
                first_segment,
                second_segment,
            ));
        }
    }
    conditions
}
