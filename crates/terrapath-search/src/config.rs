use terrapath_core::{TerrainModifiers, TerrainType};

/// Settings a search runs with.
///
/// The modifier table is owned here and handed to the search by reference,
/// so concurrent configurations never observe each other's changes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Also relax the four diagonal neighbours.
    pub diagonal: bool,
    pub modifiers: TerrainModifiers,
}

impl SearchConfig {
    /// Builder-style diagonal switch.
    #[inline]
    pub fn with_diagonal(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    /// Builder-style modifier table.
    #[inline]
    pub fn with_modifiers(mut self, modifiers: TerrainModifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Current modifier of `terrain`.
    #[inline]
    pub fn modifier(&self, terrain: TerrainType) -> f64 {
        self.modifiers.get(terrain)
    }
}
