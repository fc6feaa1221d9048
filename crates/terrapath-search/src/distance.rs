use terrapath_core::Position;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Cost of moving from `from` to `to` out of terrain with `modifier`.
///
/// Diagonal steps count as Manhattan distance 2. The product is truncated
/// towards zero.
#[inline]
pub fn step_cost(from: Position, to: Position, modifier: f64) -> i32 {
    (f64::from(manhattan(from, to)) * (1.0 + modifier)) as i32
}
