//! Named-algorithm planning requests.
//!
//! A [`PlanRequest`] bundles a field, a start cell, the targets and the name
//! of the algorithm to run. [`plan`] validates the request, runs the planner
//! and times it.

use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use tracing::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::astar::astar_search;
use crate::coverage::coverage_scan;
use crate::error::NavigationError;
use crate::map::{FieldGrid, Position};
use crate::tour::{GreedyRouter, NearestNeighborTour, TourPlanner, append_segment};

/// The planning algorithms a request can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Algorithm {
    /// Single goal, there and back.
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    /// Serpentine coverage of the whole field.
    Scan,
    /// Greedy multi-goal routing, searching at every step.
    AstarMulti,
    /// Nearest-neighbor tour over cached pairwise paths.
    TspNearestNeighbor,
}

impl Algorithm {
    /// Name used in requests.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::AStar => "astar",
            Algorithm::Scan => "scan",
            Algorithm::AstarMulti => "astar_multi",
            Algorithm::TspNearestNeighbor => "tsp_nearest_neighbor",
        }
    }
}

impl FromStr for Algorithm {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "astar" => Ok(Algorithm::AStar),
            "scan" => Ok(Algorithm::Scan),
            "astar_multi" => Ok(Algorithm::AstarMulti),
            "tsp_nearest_neighbor" => Ok(Algorithm::TspNearestNeighbor),
            other => Err(NavigationError::UnsupportedAlgorithm(other.to_owned())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single planning request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanRequest {
    /// The field to plan over.
    pub grid: FieldGrid,
    /// Where the drone starts.
    pub start: Position,
    /// Target for [`Algorithm::AStar`].
    #[cfg_attr(feature = "serde", serde(default))]
    pub goal: Option<Position>,
    /// Targets for the multi-goal algorithms.
    #[cfg_attr(feature = "serde", serde(default))]
    pub goals: Option<Vec<Position>>,
    /// Algorithm to run.
    pub algorithm: Algorithm,
}

/// A successful planning result.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanResponse {
    /// Always `"success"`.
    pub status: String,
    /// The planned path, starting at the request's start cell.
    pub path: Vec<Position>,
    /// Wall-clock time spent planning.
    pub calculation_time_ms: f64,
}

impl PlanResponse {
    fn success(path: Vec<Position>, calculation_time_ms: f64) -> Self {
        Self {
            status: "success".to_owned(),
            path,
            calculation_time_ms,
        }
    }
}

/// Path to `goal` and back to `start`; `None` unless both legs exist.
pub fn round_trip(grid: &FieldGrid, start: Position, goal: Position) -> Option<Vec<Position>> {
    let mut path = astar_search(grid, start, goal)?;
    let back = astar_search(grid, goal, start)?;
    append_segment(&mut path, &back);
    Some(path)
}

fn required_goals(request: &PlanRequest) -> Result<&[Position], NavigationError> {
    match request.goals.as_deref() {
        Some(goals) if !goals.is_empty() => Ok(goals),
        _ => Err(NavigationError::MissingGoals {
            algorithm: request.algorithm.to_string(),
        }),
    }
}

/// Runs the algorithm named by `request`.
///
/// Missing targets are reported before any search runs. A planner that finds
/// nothing yields [`NavigationError::NoPath`].
pub fn plan(request: &PlanRequest) -> Result<PlanResponse, NavigationError> {
    let grid = &request.grid;
    let start = request.start;

    let started = Instant::now();
    let path = match request.algorithm {
        Algorithm::AStar => {
            let goal = request.goal.ok_or_else(|| NavigationError::MissingGoal {
                algorithm: request.algorithm.to_string(),
            })?;
            round_trip(grid, start, goal)
        }
        Algorithm::Scan => Some(coverage_scan(grid, start)),
        Algorithm::AstarMulti => GreedyRouter.plan_tour(grid, start, required_goals(request)?),
        Algorithm::TspNearestNeighbor => {
            NearestNeighborTour.plan_tour(grid, start, required_goals(request)?)
        }
    };
    let calculation_time_ms = started.elapsed().as_secs_f64() * 1000.0;

    let path = path.filter(|p| !p.is_empty()).ok_or(NavigationError::NoPath)?;
    info!(
        algorithm = %request.algorithm,
        length = path.len(),
        calculation_time_ms,
        "Plan computed"
    );
    Ok(PlanResponse::success(path, calculation_time_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::astar::tests::open_field;
    use crate::map::CellKind;

    fn request(algorithm: Algorithm) -> PlanRequest {
        PlanRequest {
            grid: open_field(3, 3),
            start: Position::new(0, 0),
            goal: None,
            goals: None,
            algorithm,
        }
    }

    #[test]
    fn test_algorithm_names_round_trip() {
        for algorithm in [
            Algorithm::AStar,
            Algorithm::Scan,
            Algorithm::AstarMulti,
            Algorithm::TspNearestNeighbor,
        ] {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(
            "dijkstra".parse::<Algorithm>(),
            Err(NavigationError::UnsupportedAlgorithm("dijkstra".to_owned()))
        );
    }

    #[test]
    fn test_astar_is_a_round_trip() {
        let mut req = request(Algorithm::AStar);
        req.goal = Some(Position::new(2, 2));
        let response = plan(&req).unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.path.len(), 9);
        assert_eq!(response.path[4], Position::new(2, 2));
        assert_eq!(*response.path.last().unwrap(), Position::new(0, 0));
        assert!(response.calculation_time_ms >= 0.0);
    }

    #[test]
    fn test_astar_requires_goal() {
        assert_eq!(
            plan(&request(Algorithm::AStar)),
            Err(NavigationError::MissingGoal {
                algorithm: "astar".to_owned()
            })
        );
    }

    #[test]
    fn test_multi_goal_requires_goals() {
        let mut req = request(Algorithm::TspNearestNeighbor);
        req.goals = Some(Vec::new());
        assert_eq!(
            plan(&req),
            Err(NavigationError::MissingGoals {
                algorithm: "tsp_nearest_neighbor".to_owned()
            })
        );
        assert!(matches!(
            plan(&request(Algorithm::AstarMulti)),
            Err(NavigationError::MissingGoals { .. })
        ));
    }

    #[test]
    fn test_unreachable_goal_is_no_path() {
        let mut req = request(Algorithm::AStar);
        req.grid.set_cell(Position::new(2, 2), CellKind::Truck).unwrap();
        req.goal = Some(Position::new(2, 2));
        assert_eq!(plan(&req), Err(NavigationError::NoPath));

        req.algorithm = Algorithm::AstarMulti;
        req.goals = Some(vec![Position::new(1, 1), Position::new(2, 2)]);
        assert_eq!(plan(&req), Err(NavigationError::NoPath));
    }

    #[test]
    fn test_scan_and_tours() {
        let response = plan(&request(Algorithm::Scan)).unwrap();
        assert_eq!(response.path.len(), 13);

        let goals = vec![Position::new(2, 0), Position::new(0, 2)];
        let mut greedy = request(Algorithm::AstarMulti);
        greedy.goals = Some(goals.clone());
        let mut cached = request(Algorithm::TspNearestNeighbor);
        cached.goals = Some(goals);

        assert_eq!(plan(&greedy).unwrap().path, plan(&cached).unwrap().path);
    }
}
