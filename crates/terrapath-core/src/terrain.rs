//! Terrain classes and their traversal cost modifiers.
//!
//! Every [`TerrainType`] carries a cost modifier in
//! `[MODIFIER_MIN, MODIFIER_MAX]`. Moving out of a cell costs
//! `distance * (1 + modifier)`; a modifier at [`MODIFIER_MAX`] makes the
//! terrain impassable. Modifiers live in a [`TerrainModifiers`] table owned by
//! whoever configures a search, so two searches never share them.

use std::fmt;

use crate::error::Error;

/// Smallest accepted terrain modifier.
pub const MODIFIER_MIN: f64 = 0.0;
/// Largest accepted terrain modifier. Terrain at this value is impassable.
pub const MODIFIER_MAX: f64 = 100.0;

/// A terrain class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainType {
    #[default]
    Dirt,
    Grass,
    Swamp,
    Water,
    Lava,
}

impl TerrainType {
    /// All terrain classes, in catalogue order.
    pub const ALL: [TerrainType; 5] = [
        TerrainType::Dirt,
        TerrainType::Grass,
        TerrainType::Swamp,
        TerrainType::Water,
        TerrainType::Lava,
    ];

    /// Modifier this class starts with and returns to on reset.
    pub const fn default_modifier(self) -> f64 {
        match self {
            Self::Dirt => 10.0,
            Self::Grass => 20.0,
            Self::Swamp => 40.0,
            Self::Water => 50.0,
            Self::Lava => 100.0,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dirt => "dirt",
            Self::Grass => "grass",
            Self::Swamp => "swamp",
            Self::Water => "water",
            Self::Lava => "lava",
        };
        f.write_str(name)
    }
}

/// Per-class cost modifier table.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainModifiers {
    values: [f64; 5],
}

impl Default for TerrainModifiers {
    fn default() -> Self {
        Self {
            values: TerrainType::ALL.map(TerrainType::default_modifier),
        }
    }
}

impl TerrainModifiers {
    /// Current modifier of `terrain`.
    #[inline]
    pub fn get(&self, terrain: TerrainType) -> f64 {
        self.values[terrain.slot()]
    }

    /// Change the modifier of `terrain`.
    ///
    /// Values outside `[MODIFIER_MIN, MODIFIER_MAX]` (and NaN) are rejected
    /// and leave the table untouched.
    pub fn set(&mut self, terrain: TerrainType, value: f64) -> Result<(), Error> {
        if !(MODIFIER_MIN..=MODIFIER_MAX).contains(&value) {
            return Err(Error::ModifierOutOfRange { terrain, value });
        }
        self.values[terrain.slot()] = value;
        Ok(())
    }

    /// Restore every class to its default modifier.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether cells of `terrain` may never enter the open set.
    #[inline]
    pub fn is_impassable(&self, terrain: TerrainType) -> bool {
        self.get(terrain) >= MODIFIER_MAX
    }
}
