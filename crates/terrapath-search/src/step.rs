//! Per-expansion snapshots of a search.

use terrapath_core::{Cell, IndexedHeap, Position};

/// The state of a search right after one expansion.
///
/// Every cell is a value copy taken when the step was captured. Later
/// searches on the same grid cannot alter a step that was already handed
/// out.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStep {
    open_set: Vec<Cell>,
    visited: Vec<Cell>,
    path: Vec<Cell>,
}

impl SearchStep {
    /// Copy the open set (in heap slot order) and the visited cells (in
    /// expansion order) out of the live search state.
    pub fn capture(open: &IndexedHeap, cells: &[Cell], visited: &[usize]) -> Self {
        Self {
            open_set: open.keys().iter().map(|&k| cells[k]).collect(),
            visited: visited.iter().map(|&k| cells[k]).collect(),
            path: Vec::new(),
        }
    }

    /// Attach the start-to-goal path. Only the terminal step carries one.
    pub(crate) fn with_path(mut self, path: Vec<Cell>) -> Self {
        self.path = path;
        self
    }

    /// Open-set cells in heap slot order; the first is the next to expand.
    #[inline]
    pub fn open_set(&self) -> &[Cell] {
        &self.open_set
    }

    /// Expanded cells, oldest first.
    #[inline]
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    /// Start-to-goal path; empty on every step but the last.
    #[inline]
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Whether this step ends a successful search.
    #[inline]
    pub fn is_final(&self) -> bool {
        !self.path.is_empty()
    }

    /// The cell expanded to produce this step.
    #[inline]
    pub fn latest(&self) -> Option<&Cell> {
        self.visited.last()
    }

    pub fn open_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.open_set.iter().map(|c| c.pos)
    }

    pub fn visited_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.visited.iter().map(|c| c.pos)
    }

    pub fn path_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.path.iter().map(|c| c.pos)
    }

    /// Accumulated cost of the path, if this is the terminal step.
    #[inline]
    pub fn path_cost(&self) -> Option<i32> {
        self.path.last().map(|c| c.g)
    }
}
