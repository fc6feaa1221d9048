//! The [`Pathfinder`] service: one grid, one search configuration, and the
//! operations an editor or visualiser drives them with.

use terrapath_core::{Error, Grid, GridLimits, Position, TerrainType};

use crate::astar::AStarSearch;
use crate::config::SearchConfig;
use crate::step::SearchStep;

/// Owns a [`Grid`] and a [`SearchConfig`] and runs searches over them.
///
/// Authoring errors leave the service unchanged. Searches run to completion
/// inside [`find_path`](Self::find_path); stepping through a search is done
/// afterwards by replaying the returned steps.
#[derive(Debug, Clone, Default)]
pub struct Pathfinder {
    grid: Grid,
    config: SearchConfig,
}

impl Pathfinder {
    /// A service over a default grid with default modifiers, 4-connected.
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose grid obeys `limits`.
    pub fn with_limits(limits: GridLimits) -> Result<Self, Error> {
        Ok(Self {
            grid: Grid::with_limits(limits)?,
            config: SearchConfig::default(),
        })
    }

    /// Replace the grid with a fresh `width`×`height` one.
    pub fn create_grid(&mut self, width: i32, height: i32) -> Result<(), Error> {
        log::info!("create_grid: width = {width}, height = {height}");
        self.grid.resize(width, height)
    }

    pub fn place_terrain(&mut self, terrain: TerrainType, pos: Position) -> Result<(), Error> {
        log::info!("place_terrain: terrain = {terrain}, pos = {pos}");
        self.grid.place_terrain(terrain, pos)
    }

    pub fn set_start(&mut self, pos: Position) -> Result<(), Error> {
        log::info!("set_start: pos = {pos}");
        self.grid.set_start(pos)
    }

    pub fn set_goal(&mut self, pos: Position) -> Result<(), Error> {
        log::info!("set_goal: pos = {pos}");
        self.grid.set_goal(pos)
    }

    /// Change the cost modifier of every cell of `terrain`.
    pub fn set_terrain_modifier(&mut self, terrain: TerrainType, value: f64) -> Result<(), Error> {
        log::info!("set_terrain_modifier: terrain = {terrain}, value = {value}");
        self.config.modifiers.set(terrain, value)
    }

    #[inline]
    pub fn terrain_modifier(&self, terrain: TerrainType) -> f64 {
        self.config.modifier(terrain)
    }

    pub fn set_diagonal_mode(&mut self, enabled: bool) {
        log::info!("set_diagonal_mode: enabled = {enabled}");
        self.config.diagonal = enabled;
    }

    #[inline]
    pub fn diagonal_mode(&self) -> bool {
        self.config.diagonal
    }

    /// Search from start to goal, returning every recorded step.
    ///
    /// The result is empty if the goal is unreachable.
    pub fn find_path(&mut self) -> Result<Vec<SearchStep>, Error> {
        log::info!("find_path: {} -> {}", self.grid.start(), self.grid.goal());
        AStarSearch::new(&mut self.grid, &self.config).run()
    }

    /// Clear the grid to defaults and restore default terrain modifiers.
    /// The grid size and the diagonal setting are kept.
    pub fn reset(&mut self) {
        log::info!("reset");
        self.config.modifiers.reset();
        self.grid.reset();
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
