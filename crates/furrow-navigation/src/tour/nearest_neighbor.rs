//! Nearest-neighbor tour over cached pairwise shortest paths.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::{TourPlanner, append_segment, distinct_goals};
use crate::astar::astar_search;
use crate::map::{FieldGrid, Position};

/// Shortest paths between every ordered pair of a set of points.
///
/// Both directions of a pair are searched separately, so the cache stays
/// correct for a cost model where `p -> q` and `q -> p` differ. A point's path
/// to itself is not searched: it is `[p]` when `p` is passable.
#[derive(Debug, Clone, Default)]
pub struct DistanceCache {
    paths: HashMap<(Position, Position), Option<Vec<Position>>>,
}

impl DistanceCache {
    /// Runs the pairwise searches over `points`.
    pub fn build(grid: &FieldGrid, points: &[Position]) -> Self {
        let mut paths = HashMap::with_capacity(points.len() * points.len());

        for (i, &p) in points.iter().enumerate() {
            paths.insert((p, p), grid.is_passable(p).then(|| vec![p]));
            for &q in &points[i + 1..] {
                if p == q {
                    continue;
                }
                paths.insert((p, q), astar_search(grid, p, q));
                paths.insert((q, p), astar_search(grid, q, p));
            }
        }

        debug!(points = points.len(), entries = paths.len(), "Distance cache built");
        Self { paths }
    }

    /// Cached path from `from` to `to`, `None` if unreachable or never cached.
    pub fn path(&self, from: Position, to: Position) -> Option<&[Position]> {
        self.paths.get(&(from, to))?.as_deref()
    }

    /// Number of steps from `from` to `to`.
    pub fn steps(&self, from: Position, to: Position) -> Option<usize> {
        self.path(from, to).map(|path| path.len() - 1)
    }

    /// Number of ordered pairs held, reachable or not.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// True when nothing has been cached.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Nearest-neighbor tour over a precomputed [`DistanceCache`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NearestNeighborTour;

impl NearestNeighborTour {
    /// Builds the tour from an existing cache over `{start} ∪ goals`.
    pub fn tour_with_cache(
        cache: &DistanceCache,
        start: Position,
        goals: &[Position],
    ) -> Option<Vec<Position>> {
        let mut unvisited = distinct_goals(goals);
        let mut tour: Vec<Position> = Vec::new();
        let mut current = start;

        while !unvisited.is_empty() {
            let Some((goal, segment)) = unvisited
                .iter()
                .filter_map(|&goal| cache.path(current, goal).map(|path| (goal, path)))
                .min_by_key(|(goal, path)| (path.len(), *goal))
            else {
                debug!(%current, remaining = unvisited.len(), "No remaining goal is reachable");
                return None;
            };

            debug!(from = %current, to = %goal, steps = segment.len() - 1, "Cached leg");
            append_segment(&mut tour, segment);
            current = goal;
            unvisited.retain(|&g| g != goal);
        }

        if tour.is_empty() {
            tour.push(start);
        }

        match cache.path(current, start) {
            Some(home) => append_segment(&mut tour, home),
            None => warn!(from = %current, to = %start, "No return path, tour ends at last goal"),
        }

        Some(tour)
    }
}

impl TourPlanner for NearestNeighborTour {
    fn name(&self) -> &'static str {
        "nearest_neighbor"
    }

    fn plan_tour(&self, grid: &FieldGrid, start: Position, goals: &[Position]) -> Option<Vec<Position>> {
        if goals.is_empty() {
            return Some(vec![start]);
        }

        let mut points = Vec::with_capacity(goals.len() + 1);
        points.push(start);
        points.extend(distinct_goals(goals).into_iter().filter(|&g| g != start));

        let cache = DistanceCache::build(grid, &points);
        Self::tour_with_cache(&cache, start, goals)
    }
}
