//! Playback of a finished search, one step at a time.
//!
//! [`StepReplay`] owns the steps returned by
//! [`Pathfinder::find_path`](crate::Pathfinder::find_path) and keeps a
//! cursor into them. It never looks at the live grid, so a replay stays
//! valid while the grid is edited or searched again.

use terrapath_core::Cell;

use crate::step::SearchStep;

/// Cursor over a recorded step sequence.
#[derive(Debug, Clone, Default)]
pub struct StepReplay {
    steps: Vec<SearchStep>,
    idx: usize,
}

impl StepReplay {
    /// Start a replay at the first step.
    pub fn new(steps: Vec<SearchStep>) -> Self {
        Self { steps, idx: 0 }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// An empty replay comes from a search that found no path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The current step index.
    #[inline]
    pub fn index(&self) -> usize {
        self.idx
    }

    /// The step under the cursor, if any.
    #[inline]
    pub fn current(&self) -> Option<&SearchStep> {
        self.steps.get(self.idx)
    }

    /// Move one step forward. Returns false at the last step.
    pub fn step_forward(&mut self) -> bool {
        if self.idx + 1 >= self.steps.len() {
            return false;
        }
        self.idx += 1;
        true
    }

    /// Move one step back. Returns false at the first step.
    pub fn step_back(&mut self) -> bool {
        if self.idx == 0 {
            return false;
        }
        self.idx -= 1;
        true
    }

    /// Jump to step `n`, clamped to the last step.
    pub fn seek(&mut self, n: usize) {
        self.idx = n.min(self.steps.len().saturating_sub(1));
    }

    pub fn rewind(&mut self) {
        self.idx = 0;
    }

    /// Whether the cursor sits on the last step (or there are none).
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.idx + 1 >= self.steps.len()
    }

    /// The start-to-goal path carried by the terminal step.
    pub fn final_path(&self) -> &[Cell] {
        self.steps.last().map_or(&[], SearchStep::path)
    }

    #[inline]
    pub fn steps(&self) -> &[SearchStep] {
        &self.steps
    }
}
