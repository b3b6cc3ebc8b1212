use std::collections::HashMap;
use super::types::{Position, Symbol};

/// Occupied cells only; memory grows with markers placed, not with the board area.
#[derive(Debug, Clone)]
pub struct SparseBoard {
    size: usize,
    cells: HashMap<Position, Symbol>,
}

impl SparseBoard {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: HashMap::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, position: Position) -> bool {
        position.row < self.size && position.column < self.size
    }

    pub fn get(&self, position: Position) -> Option<Symbol> {
        self.cells.get(&position).copied()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.cells.contains_key(&position)
    }

    /// Returns `false` without touching the board if the cell is taken or out of range.
    pub fn insert(&mut self, position: Position, symbol: Symbol) -> bool {
        if !self.in_bounds(position) || self.contains(position) {
            return false;
        }
        self.cells.insert(position, symbol);
        true
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_filled(&self) -> bool {
        let area = (self.size as u128) * (self.size as u128);
        self.cells.len() as u128 == area
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, Symbol)> + '_ {
        self.cells.iter().map(|(&position, &symbol)| (position, symbol))
    }
}
