//! The [`Cell`] type: one grid position with its terrain and search state.

use std::cmp::Ordering;

use crate::geom::Position;
use crate::heap::{HeapItem, NOT_IN_HEAP};
use crate::terrain::TerrainType;

/// A grid cell.
///
/// Besides its terrain, a cell carries the state a search writes while it
/// runs: the accumulated cost from the start (`g`), the heuristic estimate
/// to the goal (`h`) and the position of its predecessor on the best known
/// route. The predecessor is stored by position, so it never keeps another
/// cell alive and stays meaningful in copied snapshots.
///
/// Cells are plain values; copying one captures its full state at that
/// moment.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Position,
    pub terrain: TerrainType,
    pub g: i32,
    pub h: i32,
    pub parent: Option<Position>,
    heap_index: usize,
}

impl Cell {
    /// Create a cell with cleared search state.
    #[inline]
    pub const fn new(pos: Position, terrain: TerrainType) -> Self {
        Self {
            pos,
            terrain,
            g: 0,
            h: 0,
            parent: None,
            heap_index: NOT_IN_HEAP,
        }
    }

    /// Total priority `g + h`; lower is better.
    #[inline]
    pub const fn f(&self) -> i32 {
        self.g + self.h
    }

    /// Clear `g`, `h`, the predecessor and the heap slot.
    #[inline]
    pub fn reset_search_state(&mut self) {
        *self = Self::new(self.pos, self.terrain);
    }
}

impl HeapItem for Cell {
    /// Slot this cell occupies. Only meaningful while the cell is a heap
    /// member.
    #[inline]
    fn heap_index(&self) -> usize {
        self.heap_index
    }

    #[inline]
    fn set_heap_index(&mut self, idx: usize) {
        self.heap_index = idx;
    }

    /// Lower `f` first; on equal `f`, lower `h` (closer to the goal) first.
    #[inline]
    fn cmp_priority(&self, other: &Self) -> Ordering {
        self.f().cmp(&other.f()).then(self.h.cmp(&other.h))
    }
}
