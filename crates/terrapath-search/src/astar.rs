use std::time::Instant;

use terrapath_core::{Cell, Error, Grid, IndexedHeap, PositionKind};

use crate::config::SearchConfig;
use crate::distance::{manhattan, step_cost};
use crate::step::SearchStep;

/// Weighted A* over a [`Grid`], recording a [`SearchStep`] per expansion.
///
/// The search borrows the grid mutably for its whole run and writes `g`,
/// `h` and predecessors into the cells. Moving out of a cell costs
/// `manhattan(cell, neighbour) * (1 + modifier)` of the cell's terrain; the
/// heuristic is the Manhattan distance to the goal. With diagonal moves
/// enabled the same Manhattan measure is kept for both, so a diagonal step
/// costs as much as the two orthogonal steps it replaces.
pub struct AStarSearch<'a> {
    grid: &'a mut Grid,
    config: &'a SearchConfig,
}

impl<'a> AStarSearch<'a> {
    pub fn new(grid: &'a mut Grid, config: &'a SearchConfig) -> Self {
        Self { grid, config }
    }

    /// Run the search to completion.
    ///
    /// Returns one step per non-goal expansion followed by a terminal step
    /// holding the start-to-goal path. If the goal cannot be reached the
    /// result is empty. A heap error means the open set was corrupted and
    /// aborts the search.
    pub fn run(self) -> Result<Vec<SearchStep>, Error> {
        let started = Instant::now();
        let grid = self.grid;
        let modifiers = &self.config.modifiers;
        let diagonal = self.config.diagonal;

        let goal = grid.goal();
        let start_idx = grid.checked_index(grid.start(), PositionKind::Start)?;
        let goal_idx = grid.checked_index(goal, PositionKind::Goal)?;
        log::debug!(
            "astar: {}x{} grid, {} -> {}, diagonal = {diagonal}",
            grid.width(),
            grid.height(),
            grid.start(),
            goal
        );

        grid.reset_search_state();
        let mut open = IndexedHeap::with_capacity(grid.len())?;
        open.push(grid.cells_mut(), start_idx)?;

        let mut steps = Vec::new();
        let mut visited: Vec<usize> = Vec::new();
        let mut closed = vec![false; grid.len()];
        let mut nbuf = Vec::with_capacity(8);

        let found = 'search: loop {
            if open.is_empty() {
                break 'search false;
            }
            let ci = open.pop_best(grid.cells_mut())?;
            visited.push(ci);
            closed[ci] = true;

            if ci == goal_idx {
                break 'search true;
            }

            let current = grid.cells()[ci];
            log::trace!(
                "astar: expand {} g = {} h = {}, {} open",
                current.pos,
                current.g,
                current.h,
                open.len()
            );
            let move_modifier = modifiers.get(current.terrain);

            nbuf.clear();
            grid.neighbors(current.pos, diagonal, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index(np) else {
                    continue;
                };
                let cells = grid.cells_mut();
                if closed[ni] || modifiers.is_impassable(cells[ni].terrain) {
                    continue;
                }

                let tentative_g = current.g + step_cost(current.pos, np, move_modifier);
                let in_open = open.contains(cells, ni);
                if in_open && tentative_g >= cells[ni].g {
                    continue;
                }

                let n = &mut cells[ni];
                n.g = tentative_g;
                n.h = manhattan(np, goal);
                n.parent = Some(current.pos);

                if in_open {
                    open.improve(cells, ni)?;
                } else {
                    open.push(cells, ni)?;
                }
            }

            steps.push(SearchStep::capture(&open, grid.cells(), &visited));
        };

        if !found {
            log::debug!(
                "astar: goal unreachable after {} expansions ({:?})",
                visited.len(),
                started.elapsed()
            );
            return Ok(Vec::new());
        }

        let path = trace_path(grid, start_idx, goal_idx);
        log::debug!(
            "astar: path of {} cells, cost {}, {} steps ({:?})",
            path.len(),
            grid.cells()[goal_idx].g,
            steps.len() + 1,
            started.elapsed()
        );
        steps.push(SearchStep::capture(&open, grid.cells(), &visited).with_path(path));
        Ok(steps)
    }
}

/// Walk predecessors back from the goal and return the cells start first.
fn trace_path(grid: &Grid, start_idx: usize, goal_idx: usize) -> Vec<Cell> {
    let cells = grid.cells();
    let mut path = Vec::new();
    let mut ci = goal_idx;
    loop {
        path.push(cells[ci]);
        if ci == start_idx {
            break;
        }
        match cells[ci].parent.and_then(|p| grid.index(p)) {
            Some(pi) => ci = pi,
            None => break,
        }
    }
    path.reverse();
    path
}
