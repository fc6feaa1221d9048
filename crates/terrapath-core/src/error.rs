//! Error types returned by the grid authoring surface.

use std::fmt;

use crate::config::GridLimits;
use crate::geom::Position;
use crate::heap::HeapError;
use crate::terrain::{MODIFIER_MAX, MODIFIER_MIN, TerrainType};

/// Which kind of position an operation was placing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionKind {
    Start,
    Goal,
    Terrain,
}

impl fmt::Display for PositionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::Goal => f.write_str("goal"),
            Self::Terrain => f.write_str("terrain"),
        }
    }
}

/// Errors reported by grid authoring and search operations.
///
/// Everything except [`Error::Heap`] is recoverable: the grid is left
/// unchanged and the caller may retry with corrected input. `Heap` signals a
/// broken internal invariant and aborts the search that raised it.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Requested grid dimensions fall outside the configured limits.
    SizeOutOfBounds {
        width: i32,
        height: i32,
        limits: GridLimits,
    },
    /// Limits that would admit a grid smaller than 2×2, or that reject their
    /// own default size.
    InvalidLimits { limits: GridLimits },
    /// Stored grid data whose cells disagree with its bounds.
    InvalidGrid { reason: &'static str },
    /// A position lies outside the grid.
    PositionOutOfBounds {
        pos: Position,
        kind: PositionKind,
        width: i32,
        height: i32,
    },
    /// Start and goal would share a position.
    Occupied { pos: Position, kind: PositionKind },
    /// A terrain modifier outside `[MODIFIER_MIN, MODIFIER_MAX]`.
    ModifierOutOfRange { terrain: TerrainType, value: f64 },
    /// The open set was driven into an invalid state.
    Heap(HeapError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeOutOfBounds {
                width,
                height,
                limits,
            } => write!(
                f,
                "grid size {width}x{height} out of bounds: width must be in {}..={}, height in {}..={}",
                limits.min_width, limits.max_width, limits.min_height, limits.max_height
            ),
            Self::InvalidLimits { limits } => write!(
                f,
                "invalid grid limits: width {}..={} (default {}), height {}..={} (default {})",
                limits.min_width,
                limits.max_width,
                limits.default_width,
                limits.min_height,
                limits.max_height,
                limits.default_height
            ),
            Self::InvalidGrid { reason } => write!(f, "invalid grid data: {reason}"),
            Self::PositionOutOfBounds {
                pos,
                kind,
                width,
                height,
            } => write!(
                f,
                "{kind} position {pos} is outside the {width}x{height} grid"
            ),
            Self::Occupied { pos, kind } => {
                let other = match kind {
                    PositionKind::Start => "goal",
                    _ => "start",
                };
                write!(f, "cannot place {kind} at {pos}: occupied by the {other}")
            }
            Self::ModifierOutOfRange { terrain, value } => write!(
                f,
                "modifier {value} for {terrain} must be within {MODIFIER_MIN}..={MODIFIER_MAX}"
            ),
            Self::Heap(e) => write!(f, "open set invariant violated: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Heap(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HeapError> for Error {
    fn from(e: HeapError) -> Self {
        Self::Heap(e)
    }
}
