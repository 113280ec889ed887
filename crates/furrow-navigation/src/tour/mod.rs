//! Multi-goal tour construction.
//!
//! Both planners build a nearest-neighbor tour: from the current cell, go to
//! the unvisited goal with the shortest path, repeat, then head back to the
//! start. [`GreedyRouter`] searches afresh at every step;
//! [`NearestNeighborTour`] pays for all pairwise searches up front and then
//! only reads from its [`DistanceCache`].
//!
//! Ties between equally distant goals go to the lexicographically smallest
//! position. If, at any step, no remaining goal can be reached the whole tour
//! fails.

pub mod greedy;
pub mod nearest_neighbor;

pub use greedy::GreedyRouter;
pub use nearest_neighbor::{DistanceCache, NearestNeighborTour};

use crate::map::{FieldGrid, Position};

/// A strategy that visits every goal and returns to the start.
pub trait TourPlanner {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Plans a tour over `goals` starting and, when possible, ending at `start`.
    ///
    /// Returns `None` when some goal cannot be reached. An unreachable way
    /// home is not a failure: the tour then ends at the last goal. An empty
    /// goal list yields `[start]`.
    fn plan_tour(&self, grid: &FieldGrid, start: Position, goals: &[Position]) -> Option<Vec<Position>>;
}

/// Goals with duplicates removed, first occurrence kept.
pub(crate) fn distinct_goals(goals: &[Position]) -> Vec<Position> {
    let mut seen = std::collections::HashSet::with_capacity(goals.len());
    goals.iter().copied().filter(|g| seen.insert(*g)).collect()
}

/// Appends `segment` to `path`, dropping the segment's first cell when it
/// repeats the end of `path`.
pub(crate) fn append_segment(path: &mut Vec<Position>, segment: &[Position]) {
    match (path.last(), segment.first()) {
        (Some(end), Some(first)) if end == first => path.extend_from_slice(&segment[1..]),
        _ => path.extend_from_slice(segment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::is_contiguous;
    use crate::astar::tests::{open_field, random_field};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn tour_steps(path: &[Position]) -> usize {
        path.len().saturating_sub(1)
    }

    #[test]
    fn test_distinct_goals_keeps_first() {
        let goals = [
            Position::new(2, 0),
            Position::new(0, 2),
            Position::new(2, 0),
        ];
        assert_eq!(
            distinct_goals(&goals),
            vec![Position::new(2, 0), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_append_segment() {
        let mut path = vec![Position::new(0, 0)];
        append_segment(&mut path, &[Position::new(0, 0), Position::new(1, 0)]);
        assert_eq!(path, vec![Position::new(0, 0), Position::new(1, 0)]);

        let mut empty = Vec::new();
        append_segment(&mut empty, &[Position::new(0, 0), Position::new(1, 0)]);
        assert_eq!(empty.len(), 2);
    }

    #[test]
    fn test_planners_agree_on_random_fields() {
        let mut rng = StdRng::seed_from_u64(42);
        let planners: [&dyn TourPlanner; 2] = [&GreedyRouter, &NearestNeighborTour];

        for _ in 0..100 {
            let width = rng.random_range(2..7);
            let height = rng.random_range(2..7);
            let grid = random_field(&mut rng, width, height);
            let start = Position::new(0, 0);
            let goal_count = rng.random_range(1..5);
            let goals: Vec<_> = (0..goal_count)
                .map(|_| {
                    Position::new(
                        rng.random_range(0..width as i32),
                        rng.random_range(0..height as i32),
                    )
                })
                .collect();

            let tours: Vec<_> = planners
                .iter()
                .map(|p| p.plan_tour(&grid, start, &goals))
                .collect();

            match (&tours[0], &tours[1]) {
                (Some(greedy), Some(cached)) => {
                    assert!(is_contiguous(greedy), "{}", grid);
                    assert!(is_contiguous(cached), "{}", grid);
                    assert_eq!(tour_steps(greedy), tour_steps(cached), "{}", grid);
                    for goal in &goals {
                        assert!(greedy.contains(goal));
                        assert!(cached.contains(goal));
                    }
                }
                (None, None) => {}
                (a, b) => panic!("planners disagree on feasibility: {:?} vs {:?}\n{}", a, b, grid),
            }
        }
    }

    #[test]
    fn test_planners_return_start_for_no_goals() {
        let grid = open_field(3, 3);
        let start = Position::new(1, 1);
        assert_eq!(GreedyRouter.plan_tour(&grid, start, &[]), Some(vec![start]));
        assert_eq!(NearestNeighborTour.plan_tour(&grid, start, &[]), Some(vec![start]));
    }
}
