//! Step-recorded A* search over a [`terrapath_core::Grid`].
//!
//! Every expansion of the search is captured as a [`SearchStep`], a value
//! copy of the open set and the visited cells, so a caller can animate the
//! search after it has finished:
//!
//! - [`AStarSearch`] runs one search to completion and returns the steps
//! - [`Pathfinder`] owns a grid plus a [`SearchConfig`] and exposes the
//!   authoring operations around it
//! - [`StepReplay`] walks a recorded step sequence back and forth
//!
//! Searches are deterministic. Neighbours are tried left, right, up, down,
//! then (in diagonal mode) up-left, up-right, down-left, down-right, and
//! equal-priority cells are ordered by their heuristic.

mod astar;
mod config;
mod distance;
mod pathfinder;
mod replay;
mod step;

pub use astar::AStarSearch;
pub use config::SearchConfig;
pub use distance::{manhattan, step_cost};
pub use pathfinder::Pathfinder;
pub use replay::StepReplay;
pub use step::SearchStep;
