//! Boustrophedon coverage of a whole field.
//!
//! The sweep runs row 0 left to right, row 1 right to left and so on, so
//! consecutive rows join at a shared column. Blocked cells are swept like any
//! other: only the trip back to the start avoids them.

use tracing::{debug, warn};

use crate::astar::astar_search;
use crate::map::{FieldGrid, Position};

/// Serpentine visiting order of every cell in `grid`.
pub fn serpentine_order(grid: &FieldGrid) -> impl Iterator<Item = Position> + '_ {
    let width = grid.width() as i32;
    (0..grid.height() as i32).flat_map(move |y| {
        let xs: Box<dyn Iterator<Item = i32>> = if y % 2 == 0 {
            Box::new(0..width)
        } else {
            Box::new((0..width).rev())
        };
        xs.map(move |x| Position::new(x, y))
    })
}

/// Builds a path that starts at `start`, sweeps every cell once and returns to
/// `start` along a shortest path.
///
/// A swept cell is skipped only when it repeats the previous entry, which can
/// only happen when `start` is the first swept cell. When no way back exists
/// the sweep is returned without the return leg.
pub fn coverage_scan(grid: &FieldGrid, start: Position) -> Vec<Position> {
    let mut path = Vec::with_capacity(grid.total_cells() * 2 + 1);
    path.push(start);

    for cell in serpentine_order(grid) {
        if path.last() != Some(&cell) {
            path.push(cell);
        }
    }

    let sweep_end = path[path.len() - 1];
    match astar_search(grid, sweep_end, start) {
        Some(return_path) => path.extend_from_slice(&return_path[1..]),
        None => warn!(from = %sweep_end, to = %start, "No return path after coverage sweep"),
    }

    debug!(cells = grid.total_cells(), length = path.len(), "Coverage sweep built");
    path
}
