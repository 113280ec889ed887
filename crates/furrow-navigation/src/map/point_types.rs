//! Integer cell coordinates.

use std::fmt;

/// A cell address in grid coordinates.
///
/// `x` is the column index and `y` the row index, so a cell is looked up as
/// `grid[y][x]`. Coordinates are signed so that requests pointing off the
/// grid can be represented and rejected by a bounds check.
///
/// Ordering is lexicographic on `(x, y)`; the planners use it to break ties
/// deterministically.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    /// The x-coordinate (column index) in the grid.
    pub x: i32,
    /// The y-coordinate (row index) in the grid.
    pub y: i32,
}

impl Position {
    /// Creates a new `Position`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the position shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan (L1) distance to `other`.
    #[must_use]
    pub fn manhattan(self, other: Position) -> usize {
        self.x.abs_diff(other.x) as usize + self.y.abs_diff(other.y) as usize
    }

    /// True when `other` is exactly one cardinal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan() {
        let a = Position::new(0, 0);
        let b = Position::new(3, -4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);

        let min = Position::new(i32::MIN, i32::MIN);
        let max = Position::new(i32::MAX, i32::MAX);
        assert_eq!(min.manhattan(max), 2 * u32::MAX as usize);
        assert!(!min.is_adjacent(max));
    }

    #[test]
    fn test_ordering_is_x_then_y() {
        let mut points = vec![
            Position::new(2, 0),
            Position::new(0, 2),
            Position::new(0, 1),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![Position::new(0, 1), Position::new(0, 2), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_adjacency() {
        let p = Position::new(1, 1);
        assert!(p.is_adjacent(p.offset(0, 1)));
        assert!(p.is_adjacent(p.offset(-1, 0)));
        assert!(!p.is_adjacent(p.offset(1, 1)));
        assert!(!p.is_adjacent(p));
    }
}
