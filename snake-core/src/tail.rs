use alloc::vec::Vec;

use crate::constants::{TAIL_GROWTH, TAIL_SENTINEL};
use crate::error::CoreError;
use crate::geometry::Position;

/// Cells trailing the head, youngest first. Index 0 is the cell the head
/// left on the most recent step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tail {
    cells: Vec<Position>,
}

impl Tail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn first(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.cells
    }

    pub fn at(&self, index: usize) -> Result<Position, CoreError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(CoreError::TailIndexOutOfRange {
                index,
                len: self.cells.len(),
            })
    }

    /// Appends one block of off-board cells; they join the body as the
    /// shift register walks over them.
    pub fn grow(&mut self) {
        self.cells
            .extend(core::iter::repeat(TAIL_SENTINEL).take(TAIL_GROWTH));
    }

    /// Shift-register step: cell 0 takes the vacated head cell, every other
    /// cell takes the previous value of the cell ahead of it.
    pub fn shift(&mut self, previous_head: Position) {
        if self.cells.is_empty() {
            return;
        }
        self.cells.rotate_right(1);
        self.cells[0] = previous_head;
    }

    /// Body hit test. Cell 0 is exempt: it holds the head's previous cell.
    pub fn hits_body(&self, position: Position) -> bool {
        self.cells.iter().skip(1).any(|cell| *cell == position)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: Vec<Position>) -> Self {
        Self { cells }
    }
}
