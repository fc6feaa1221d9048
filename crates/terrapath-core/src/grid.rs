//! The [`Grid`] type: a rectangular map of terrain [`Cell`]s with a start
//! and a goal.
//!
//! Cells are stored row-major in a single buffer. The grid is the owner of
//! all search state: a search borrows it mutably for its whole run and
//! writes `g`, `h` and predecessors straight into the cells.

use crate::cell::Cell;
use crate::config::GridLimits;
use crate::error::{Error, PositionKind};
use crate::geom::{Position, Range};
use crate::terrain::TerrainType;

/// A 2D grid of terrain cells.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "GridData")
)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
    start: Position,
    goal: Position,
    limits: GridLimits,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create a grid of the default size under the default limits.
    pub fn new() -> Self {
        let limits = GridLimits::default();
        Self::build(limits, limits.default_width, limits.default_height)
    }

    /// Create a grid of `limits`' default size.
    ///
    /// Fails with [`Error::InvalidLimits`] unless `limits` pass
    /// [`GridLimits::validate`], so every later [`resize`](Self::resize)
    /// stays at 2×2 or larger.
    pub fn with_limits(limits: GridLimits) -> Result<Self, Error> {
        limits.validate()?;
        Ok(Self::build(
            limits,
            limits.default_width,
            limits.default_height,
        ))
    }

    fn build(limits: GridLimits, width: i32, height: i32) -> Self {
        let bounds = Range::with_size(width, height);
        let cells = bounds
            .iter()
            .map(|p| Cell::new(p, TerrainType::default()))
            .collect();
        let (start, goal) = Self::default_endpoints(width, height);
        Self {
            cells,
            bounds,
            start,
            goal,
            limits,
        }
    }

    /// Start and goal of a fresh `width`×`height` grid: the vertically
    /// centred cells of the first and last column (upper middle row for
    /// even heights).
    pub fn default_endpoints(width: i32, height: i32) -> (Position, Position) {
        let row = (height + 1) / 2 - 1;
        (Position::new(row, 0), Position::new(row, width - 1))
    }

    // -----------------------------------------------------------------------
    // Authoring
    // -----------------------------------------------------------------------

    /// Replace the grid with a fresh `width`×`height` one.
    ///
    /// All cells revert to the default terrain and start/goal move to their
    /// default positions. On error the grid is left untouched.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), Error> {
        if !self.limits.accepts(width, height) {
            return Err(Error::SizeOutOfBounds {
                width,
                height,
                limits: self.limits,
            });
        }
        *self = Self::build(self.limits, width, height);
        log::debug!("grid resized to {width}x{height}");
        Ok(())
    }

    /// Clear every cell to the default terrain and restore the default
    /// start and goal. The size is kept.
    pub fn reset(&mut self) {
        *self = Self::build(self.limits, self.width(), self.height());
        log::debug!("grid reset to {}x{}", self.width(), self.height());
    }

    /// Put `terrain` at `pos`, replacing the cell and its search state.
    pub fn place_terrain(&mut self, terrain: TerrainType, pos: Position) -> Result<(), Error> {
        let i = self.checked_index(pos, PositionKind::Terrain)?;
        self.cells[i] = Cell::new(pos, terrain);
        Ok(())
    }

    /// Move the start to `pos`. It may not land on the goal.
    pub fn set_start(&mut self, pos: Position) -> Result<(), Error> {
        self.checked_index(pos, PositionKind::Start)?;
        if pos == self.goal {
            return Err(Error::Occupied {
                pos,
                kind: PositionKind::Start,
            });
        }
        self.start = pos;
        Ok(())
    }

    /// Move the goal to `pos`. It may not land on the start.
    pub fn set_goal(&mut self, pos: Position) -> Result<(), Error> {
        self.checked_index(pos, PositionKind::Goal)?;
        if pos == self.start {
            return Err(Error::Occupied {
                pos,
                kind: PositionKind::Goal,
            });
        }
        self.goal = pos;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The range of valid positions.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    #[inline]
    pub fn limits(&self) -> GridLimits {
        self.limits
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `pos`.
    pub fn cell(&self, pos: Position) -> Result<&Cell, Error> {
        let i = self.checked_index(pos, PositionKind::Terrain)?;
        Ok(&self.cells[i])
    }

    /// The terrain at `pos`.
    pub fn terrain_at(&self, pos: Position) -> Result<TerrainType, Error> {
        self.cell(pos).map(|c| c.terrain)
    }

    /// Flat row-major index of `p`, or `None` if it is off the grid.
    #[inline]
    pub fn index(&self, p: Position) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Position of flat index `idx`.
    #[inline]
    pub fn position(&self, idx: usize) -> Option<Position> {
        self.bounds.position(idx)
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// All cells, row-major, for a search to write its state into.
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Clear the search state of every cell, keeping terrain.
    pub fn reset_search_state(&mut self) {
        for c in &mut self.cells {
            c.reset_search_state();
        }
    }

    /// Append the on-grid neighbours of `p` to `buf`: left, right, up, down,
    /// then (if `diagonal`) up-left, up-right, down-left, down-right.
    pub fn neighbors(&self, p: Position, diagonal: bool, buf: &mut Vec<Position>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.contains(n)));
        if diagonal {
            buf.extend(p.diagonals().into_iter().filter(|&n| self.contains(n)));
        }
    }

    /// Flat index of `pos`, or the bounds error a `kind` placement there
    /// would raise.
    pub fn checked_index(&self, pos: Position, kind: PositionKind) -> Result<usize, Error> {
        self.index(pos).ok_or_else(|| Error::PositionOutOfBounds {
            pos,
            kind,
            width: self.width(),
            height: self.height(),
        })
    }
}

/// Field image of a [`Grid`] as stored, checked before it becomes one.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridData {
    cells: Vec<Cell>,
    bounds: Range,
    start: Position,
    goal: Position,
    limits: GridLimits,
}

#[cfg(feature = "serde")]
impl TryFrom<GridData> for Grid {
    type Error = Error;

    fn try_from(data: GridData) -> Result<Self, Error> {
        let GridData {
            cells,
            bounds,
            start,
            goal,
            limits,
        } = data;
        limits.validate()?;
        let (width, height) = (bounds.width(), bounds.height());
        if !limits.accepts(width, height) {
            return Err(Error::SizeOutOfBounds {
                width,
                height,
                limits,
            });
        }
        if cells.len() != bounds.len() {
            return Err(Error::InvalidGrid {
                reason: "cell count does not match bounds",
            });
        }
        if cells.iter().zip(bounds).any(|(c, p)| c.pos != p) {
            return Err(Error::InvalidGrid {
                reason: "cells are not stored row-major",
            });
        }
        let grid = Self {
            cells,
            bounds,
            start,
            goal,
            limits,
        };
        grid.checked_index(start, PositionKind::Start)?;
        grid.checked_index(goal, PositionKind::Goal)?;
        if start == goal {
            return Err(Error::Occupied {
                pos: goal,
                kind: PositionKind::Goal,
            });
        }
        Ok(grid)
    }
}
