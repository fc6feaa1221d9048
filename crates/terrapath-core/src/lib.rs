//! **terrapath-core**: data model for step-recorded terrain pathfinding.
//!
//! This crate provides the types a search runs on: `(row, col)` geometry,
//! terrain classes with an owned cost-modifier table, grid cells carrying
//! per-search state, the [`Grid`] authoring surface, and [`IndexedHeap`], a
//! fixed-capacity binary heap whose members know their own slot so their
//! priority can be improved in place.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;
pub mod heap;
pub mod terrain;

pub use cell::Cell;
pub use config::{GridLimits, MIN_SIDE};
pub use error::{Error, PositionKind};
pub use geom::{Position, Range};
pub use grid::Grid;
pub use heap::{HeapError, HeapItem, IndexedHeap, NOT_IN_HEAP};
pub use terrain::{MODIFIER_MAX, MODIFIER_MIN, TerrainModifiers, TerrainType};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = Grid::new();
        g.place_terrain(TerrainType::Swamp, Position::new(2, 2)).unwrap();
        g.set_goal(Position::new(0, 9)).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn grid_with_missing_cells_is_rejected() {
        let mut value = serde_json::to_value(Grid::new()).unwrap();
        value["cells"].as_array_mut().unwrap().pop();
        let err = serde_json::from_value::<Grid>(value).unwrap_err();
        assert!(err.to_string().contains("cell count does not match bounds"));
    }

    #[test]
    fn grid_with_shuffled_cells_is_rejected() {
        let mut value = serde_json::to_value(Grid::new()).unwrap();
        value["cells"].as_array_mut().unwrap().swap(0, 1);
        assert!(serde_json::from_value::<Grid>(value).is_err());
    }

    #[test]
    fn zero_cell_grid_is_rejected() {
        let mut value = serde_json::to_value(Grid::new()).unwrap();
        value["bounds"] = serde_json::json!({ "width": 0, "height": 0 });
        value["cells"] = serde_json::json!([]);
        assert!(serde_json::from_value::<Grid>(value.clone()).is_err());

        value["limits"]["min_width"] = serde_json::json!(0);
        value["limits"]["min_height"] = serde_json::json!(0);
        let err = serde_json::from_value::<Grid>(value).unwrap_err();
        assert!(err.to_string().contains("invalid grid limits"));
    }

    #[test]
    fn grid_with_shared_endpoints_is_rejected() {
        let mut value = serde_json::to_value(Grid::new()).unwrap();
        value["goal"] = value["start"].clone();
        assert!(serde_json::from_value::<Grid>(value).is_err());

        let mut value = serde_json::to_value(Grid::new()).unwrap();
        value["start"] = serde_json::json!({ "row": 10, "col": 0 });
        assert!(serde_json::from_value::<Grid>(value).is_err());
    }

    #[test]
    fn modifiers_round_trip() {
        let mut m = TerrainModifiers::default();
        m.set(TerrainType::Water, 12.5).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let back: TerrainModifiers = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
