//! This module defines the error types used by the `furrow-navigation` crate.

#![warn(missing_docs)]

use thiserror::Error;

use crate::map::Position;

/// Error type for navigation operations.
///
/// The planners themselves report an unreachable target as `None`; these
/// variants cover malformed input and the mission layer that turns a missing
/// path into a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// A grid row does not have the same length as the first row.
    #[error("Malformed grid: row {row} has {found} cells, expected {expected}")]
    MalformedGrid {
        /// Index of the offending row.
        row: usize,
        /// Length of row 0.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A position lies outside the grid.
    #[error("Position {0} is outside the grid")]
    OutOfBounds(Position),
    /// A single-goal algorithm was requested without a goal.
    #[error("Algorithm '{algorithm}' requires a single goal")]
    MissingGoal {
        /// Name of the requested algorithm.
        algorithm: String,
    },
    /// A multi-goal algorithm was requested with no goals.
    #[error("Algorithm '{algorithm}' requires a list of goals")]
    MissingGoals {
        /// Name of the requested algorithm.
        algorithm: String,
    },
    /// The algorithm name is not known.
    #[error("Algorithm '{0}' not supported")]
    UnsupportedAlgorithm(String),
    /// The field task name is not known.
    #[error("Field task '{0}' not supported")]
    UnsupportedTask(String),
    /// No path could be found.
    #[error("No path could be found")]
    NoPath,
}
