//! Geometry primitives: [`Position`] and [`Range`].
//!
//! Positions are addressed as `(row, col)`: rows grow downwards, columns grow
//! to the right.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid position given as `(row, col)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four cardinal neighbours in relaxation order: left, right, up,
    /// down.
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        [
            self.shift(0, -1),
            self.shift(0, 1),
            self.shift(-1, 0),
            self.shift(1, 0),
        ]
    }

    /// The four diagonal neighbours: up-left, up-right, down-left,
    /// down-right.
    #[inline]
    pub fn diagonals(self) -> [Position; 4] {
        [
            self.shift(-1, -1),
            self.shift(-1, 1),
            self.shift(1, -1),
            self.shift(1, 1),
        ]
    }

    /// Whether `other` is one of the eight surrounding positions.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        let dr = (self.row - other.row).abs();
        let dc = (self.col - other.col).abs();
        self != other && dr <= 1 && dc <= 1
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// The positions `[0, height) × [0, width)` covered by a grid, numbered
/// row-major from zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    width: i32,
    height: i32,
}

impl Range {
    /// A `width` columns by `height` rows range. Negative sizes clamp to 0.
    #[inline]
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width: width.max(0),
            height: height.max(0),
        }
    }

    /// Number of columns.
    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[inline]
    pub fn contains(self, p: Position) -> bool {
        (0..self.height).contains(&p.row) && (0..self.width).contains(&p.col)
    }

    /// Row-major number of `p`, if it lies in the range.
    #[inline]
    pub fn index(self, p: Position) -> Option<usize> {
        self.contains(p)
            .then(|| p.row as usize * self.width as usize + p.col as usize)
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn position(self, idx: usize) -> Option<Position> {
        if idx >= self.len() {
            return None;
        }
        let w = self.width as usize;
        Some(Position::new((idx / w) as i32, (idx % w) as i32))
    }

    /// Every position, in index order.
    #[inline]
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            idx: 0,
        }
    }
}

impl IntoIterator for Range {
    type Item = Position;
    type IntoIter = RangeIter;
    #[inline]
    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Iterator over a [`Range`] in index order.
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    idx: usize,
}

impl Iterator for RangeIter {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Position> {
        let p = self.range.position(self.idx)?;
        self.idx += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.range.len().saturating_sub(self.idx);
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_and_display() {
        let a = Position::new(1, 2);
        assert_eq!(a.shift(-1, 1), Position::new(0, 3));
        assert_eq!(a.shift(2, -2).to_string(), "(3, 0)");
    }

    #[test]
    fn neighbor_order() {
        let p = Position::new(5, 5);
        assert_eq!(
            p.neighbors_4(),
            [
                Position::new(5, 4),
                Position::new(5, 6),
                Position::new(4, 5),
                Position::new(6, 5),
            ]
        );
        assert_eq!(
            p.diagonals(),
            [
                Position::new(4, 4),
                Position::new(4, 6),
                Position::new(6, 4),
                Position::new(6, 6),
            ]
        );
    }

    #[test]
    fn adjacency() {
        let p = Position::new(2, 2);
        assert!(p.is_adjacent(Position::new(1, 1)));
        assert!(p.is_adjacent(Position::new(2, 3)));
        assert!(!p.is_adjacent(p));
        assert!(!p.is_adjacent(Position::new(4, 2)));
    }

    #[test]
    fn position_ordering_is_row_major() {
        let mut v = vec![Position::new(1, 0), Position::new(0, 3), Position::new(0, 1)];
        v.sort();
        assert_eq!(
            v,
            vec![Position::new(0, 1), Position::new(0, 3), Position::new(1, 0)]
        );
    }

    #[test]
    fn range_basics() {
        let r = Range::with_size(3, 2);
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 2);
        assert_eq!(r.len(), 6);
        assert!(r.contains(Position::new(0, 0)));
        assert!(r.contains(Position::new(1, 2)));
        assert!(!r.contains(Position::new(2, 0)));
        assert!(!r.contains(Position::new(0, 3)));
        assert!(!r.contains(Position::new(-1, 0)));
    }

    #[test]
    fn index_and_position_agree() {
        let r = Range::with_size(4, 3);
        assert_eq!(r.index(Position::new(1, 2)), Some(6));
        assert_eq!(r.position(6), Some(Position::new(1, 2)));
        assert_eq!(r.index(Position::new(3, 0)), None);
        assert_eq!(r.position(12), None);
        for (i, p) in r.iter().enumerate() {
            assert_eq!(r.index(p), Some(i));
        }
    }

    #[test]
    fn range_iter_is_row_major() {
        let r = Range::with_size(3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Position::new(0, 0));
        assert_eq!(pts[2], Position::new(0, 2));
        assert_eq!(pts[3], Position::new(1, 0));
        assert_eq!(r.iter().size_hint(), (6, Some(6)));
    }

    #[test]
    fn empty_range() {
        let r = Range::with_size(0, 4);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.iter().count(), 0);
        assert_eq!(r.position(0), None);
        assert_eq!(Range::with_size(-3, 2), Range::with_size(0, 2));
    }
}
