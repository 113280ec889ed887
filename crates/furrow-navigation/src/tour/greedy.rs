//! Nearest-goal routing that searches afresh at every step.

use tracing::{debug, warn};

use super::{TourPlanner, append_segment, distinct_goals};
use crate::astar::astar_search;
use crate::map::{FieldGrid, Position};

/// Nearest-goal routing without caching.
///
/// Every step runs one A* search per remaining goal, so a tour over `n` goals
/// costs `O(n^2)` searches spread across construction.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyRouter;

impl GreedyRouter {
    /// Shortest path from `from` to the nearest of `candidates`, with the
    /// chosen goal.
    fn nearest(
        grid: &FieldGrid,
        from: Position,
        candidates: &[Position],
    ) -> Option<(Position, Vec<Position>)> {
        candidates
            .iter()
            .filter_map(|&goal| astar_search(grid, from, goal).map(|path| (goal, path)))
            .min_by_key(|(goal, path)| (path.len(), *goal))
    }
}

impl TourPlanner for GreedyRouter {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn plan_tour(&self, grid: &FieldGrid, start: Position, goals: &[Position]) -> Option<Vec<Position>> {
        let mut unvisited = distinct_goals(goals);
        let mut path = vec![start];
        let mut current = start;

        while !unvisited.is_empty() {
            let Some((goal, segment)) = Self::nearest(grid, current, &unvisited) else {
                debug!(%current, remaining = unvisited.len(), "No remaining goal is reachable");
                return None;
            };

            debug!(from = %current, to = %goal, steps = segment.len() - 1, "Greedy leg");
            append_segment(&mut path, &segment);
            current = goal;
            unvisited.retain(|&g| g != goal);
        }

        match astar_search(grid, current, start) {
            Some(home) => append_segment(&mut path, &home),
            None => warn!(from = %current, to = %start, "No return path, tour ends at last goal"),
        }

        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::is_contiguous;
    use crate::astar::tests::open_field;
    use crate::map::CellKind;

    #[test]
    fn test_equal_distance_goals_prefer_smaller_position() {
        let grid = open_field(3, 3);
        let start = Position::new(0, 0);
        let goals = [Position::new(2, 0), Position::new(0, 2)];

        let path = GreedyRouter.plan_tour(&grid, start, &goals).unwrap();

        let first = path.iter().position(|p| goals.contains(p)).unwrap();
        assert_eq!(path[first], Position::new(0, 2), "(0,2) sorts before (2,0)");
        assert_eq!(path[0], start);
        assert_eq!(*path.last().unwrap(), start);
        assert!(is_contiguous(&path));
        // 2 steps out, 4 across, 2 home.
        assert_eq!(path.len(), 9);
    }

    #[test]
    fn test_nearest_goal_first() {
        let grid = open_field(5, 1);
        let start = Position::new(0, 0);
        let goals = [Position::new(4, 0), Position::new(1, 0)];

        let path = GreedyRouter.plan_tour(&grid, start, &goals).unwrap();
        assert_eq!(path[1], Position::new(1, 0));
        assert_eq!(path.len(), 9);
        assert_eq!(path.iter().filter(|&&p| p == start).count(), 2);
    }

    #[test]
    fn test_unreachable_goal_fails() {
        let grid = FieldGrid::from_rows(vec![vec!["grass", "grass", "stone", "grass"]]).unwrap();
        let goals = [Position::new(1, 0), Position::new(3, 0)];
        assert!(GreedyRouter.plan_tour(&grid, Position::new(0, 0), &goals).is_none());
    }

    #[test]
    fn test_blocked_goal_fails() {
        let mut grid = open_field(3, 3);
        grid.set_cell(Position::new(2, 2), CellKind::Stone).unwrap();
        let goals = [Position::new(2, 2)];
        assert!(GreedyRouter.plan_tour(&grid, Position::new(0, 0), &goals).is_none());
    }

    #[test]
    fn test_start_as_goal() {
        let grid = open_field(3, 3);
        let start = Position::new(1, 1);
        let path = GreedyRouter.plan_tour(&grid, start, &[start]).unwrap();
        assert_eq!(path, vec![start]);
    }
}
