//! A* search between two cells of a field grid.

/*

A* = f(n) = g(n) + h(n)

Where:
    n = a cell of the field grid
    g(n) = number of steps from the start cell to n
    h(n) = Manhattan distance from n to the goal

Moves are the four cardinal steps and every passable cell costs 1 to enter,
so the Manhattan heuristic is admissible and consistent. A weighted cost
model would need the heuristic revalidated.

Neighbors are generated in the fixed order +y, -y, +x, -x. The frontier pops
the lowest f first; on equal f the lexicographically smaller position wins.

*/

use crate::map::{FieldGrid, IMPASSABLE, Position};

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cardinal steps in neighbor-generation order: +y, -y, +x, -x.
const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Represents the result of an A* pathfinding operation with metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathResult {
    /// The computed path, if one was found.
    pub path: Option<Vec<Position>>,
    /// The total cost of the path.
    pub total_cost: Option<usize>,
    /// The number of nodes popped from the frontier during the search.
    pub nodes_explored: usize,
    /// The length of the path (number of waypoints).
    pub path_length: usize,
}

impl PathResult {
    /// Creates a new PathResult for a successful path.
    pub fn success(path: Vec<Position>, total_cost: usize, nodes_explored: usize) -> Self {
        let path_length = path.len();
        Self {
            path: Some(path),
            total_cost: Some(total_cost),
            nodes_explored,
            path_length,
        }
    }

    /// Creates a new PathResult for a failed path search.
    pub fn failure(nodes_explored: usize) -> Self {
        Self {
            path: None,
            total_cost: None,
            nodes_explored,
            path_length: 0,
        }
    }

    /// Returns true if a path was found.
    pub fn is_success(&self) -> bool {
        self.path.is_some()
    }

    /// Returns the path if one was found.
    pub fn into_path(self) -> Option<Vec<Position>> {
        self.path
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(_) => write!(
                f,
                "PathResult {{ success: true, path_length: {}, total_cost: {}, nodes_explored: {} }}",
                self.path_length,
                self.total_cost.unwrap_or(0),
                self.nodes_explored
            ),
            None => write!(
                f,
                "PathResult {{ success: false, nodes_explored: {} }}",
                self.nodes_explored
            ),
        }
    }
}

/// Gets the enterable neighbors of `p` together with their entry cost.
fn neighbors(p: Position, grid: &FieldGrid) -> impl Iterator<Item = (Position, usize)> + '_ {
    DIRECTIONS.iter().filter_map(move |&(dx, dy)| {
        let next = p.offset(dx, dy);
        match grid.entry_cost(next) {
            IMPASSABLE => None,
            cost => Some((next, cost)),
        }
    })
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
struct State {
    f: usize,
    g: usize,
    position: Position,
}

// BinaryHeap is a max-heap: flip the comparisons so the lowest f, then the
// smallest position, comes out first.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.position.cmp(&self.position))
            .then_with(|| other.g.cmp(&self.g))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reconstructs the path from a map of `came_from` links.
fn reconstruct_path(came_from: &HashMap<Position, Position>, mut current: Position) -> Vec<Position> {
    let mut path = vec![current];
    while let Some(&previous) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}

/// Finds a shortest path from `start` to `goal` using the A* algorithm.
///
/// Returns `None` when either endpoint is off the grid or blocked, or when no
/// passable corridor connects them. `astar_search(g, a, a)` is `Some(vec![a])`
/// for any passable `a`.
pub fn astar_search(grid: &FieldGrid, start: Position, goal: Position) -> Option<Vec<Position>> {
    astar_search_detailed(grid, start, goal).into_path()
}

/// Finds a path from `start` to `goal` using A*, with search metadata.
///
/// # Arguments
/// * `grid` - The field to plan in.
/// * `start` - Starting cell.
/// * `goal` - Goal cell.
///
/// # Returns
/// * `PathResult` - The path (if any), its cost and the number of expanded nodes.
pub fn astar_search_detailed(grid: &FieldGrid, start: Position, goal: Position) -> PathResult {
    let mut nodes_explored = 0;

    if !grid.is_passable(start) || !grid.is_passable(goal) {
        debug!(%start, %goal, "A* endpoints off the grid or blocked");
        return PathResult::failure(nodes_explored);
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: HashMap<Position, Position> = HashMap::new();
    let mut g_score: HashMap<Position, usize> = HashMap::new();
    g_score.insert(start, 0);

    open_set.push(State {
        f: start.manhattan(goal),
        g: 0,
        position: start,
    });

    while let Some(State {
        g, position: current, ..
    }) = open_set.pop()
    {
        // A cheaper route to this cell was queued after this entry.
        if g_score.get(&current).is_some_and(|&best| g > best) {
            continue;
        }

        nodes_explored += 1;

        if current == goal {
            let path = reconstruct_path(&came_from, current);
            debug!(%start, %goal, steps = g, nodes_explored, "A* path found");
            return PathResult::success(path, g, nodes_explored);
        }

        for (neighbor, cost) in neighbors(current, grid) {
            let tentative_g_score = g + cost;

            if tentative_g_score < g_score.get(&neighbor).copied().unwrap_or(usize::MAX) {
                came_from.insert(neighbor, current);
                g_score.insert(neighbor, tentative_g_score);
                open_set.push(State {
                    f: tentative_g_score + neighbor.manhattan(goal),
                    g: tentative_g_score,
                    position: neighbor,
                });
            }
        }
    }

    debug!(%start, %goal, nodes_explored, "A* frontier exhausted");
    PathResult::failure(nodes_explored)
}

/// Returns `true` when every consecutive pair in `path` is one cardinal step apart.
pub fn is_contiguous(path: &[Position]) -> bool {
    path.windows(2).all(|pair| pair[0].is_adjacent(pair[1]))
}
