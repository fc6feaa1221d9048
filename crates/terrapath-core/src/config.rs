//! Grid size configuration.

use crate::error::Error;

/// Smallest side length any grid may have.
pub const MIN_SIDE: i32 = 2;

/// Size limits and defaults applied when a [`Grid`](crate::Grid) is created
/// or resized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLimits {
    pub min_width: i32,
    pub min_height: i32,
    pub max_width: i32,
    pub max_height: i32,
    pub default_width: i32,
    pub default_height: i32,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            min_width: MIN_SIDE,
            min_height: MIN_SIDE,
            max_width: 29,
            max_height: 18,
            default_width: 10,
            default_height: 10,
        }
    }
}

impl GridLimits {
    /// Whether a `width`×`height` grid is allowed.
    #[inline]
    pub fn accepts(&self, width: i32, height: i32) -> bool {
        (self.min_width..=self.max_width).contains(&width)
            && (self.min_height..=self.max_height).contains(&height)
    }

    /// Check that every grid these limits accept is at least
    /// [`MIN_SIDE`]×[`MIN_SIDE`] and that the default size is accepted.
    pub fn validate(&self) -> Result<(), Error> {
        let ok = self.min_width >= MIN_SIDE
            && self.min_height >= MIN_SIDE
            && self.min_width <= self.max_width
            && self.min_height <= self.max_height
            && self.accepts(self.default_width, self.default_height);
        if !ok {
            return Err(Error::InvalidLimits { limits: *self });
        }
        Ok(())
    }
}
