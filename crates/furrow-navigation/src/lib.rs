#![warn(missing_docs)]
//! Path planning for a field drone on a 2D occupancy grid.
//!
//! The crate offers four planners over a [`FieldGrid`]:
//!
//! * [`astar::astar_search`]: shortest path between two cells.
//! * [`coverage::coverage_scan`]: serpentine sweep of every cell, then home.
//! * [`tour::GreedyRouter`]: nearest-goal routing, searching at every step.
//! * [`tour::NearestNeighborTour`]: nearest-goal routing over cached pairwise paths.
//!
//! All planners are pure functions of their inputs. They keep no state between
//! calls and only read the grid, so independent calls may run on separate
//! threads. None of them can be cancelled mid-search; callers wanting a
//! deadline wrap the call (see the `furrow` binary).

pub mod astar;
pub mod coverage;
pub mod error;
pub mod map;
pub mod mission;
pub mod task;
pub mod tour;

pub use error::NavigationError;
pub use map::{CellKind, FieldGrid, Position};
pub use mission::{Algorithm, PlanRequest, PlanResponse, plan};
pub use task::FieldTask;
pub use tour::TourPlanner;
