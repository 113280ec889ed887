//! Map-related functionality for navigation.
//!
//! This module provides the field grid the planners search over and the
//! integer cell coordinates used throughout the crate.

pub mod field;
pub mod point_types;

pub use field::{CellKind, FieldGrid, IMPASSABLE, STEP_COST};
pub use point_types::Position;
