//! Field tasks and the cells they target.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::map::{CellKind, FieldGrid, Position};

/// Work the drone does on every cell of one kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum FieldTask {
    /// Seed every ploughed cell.
    PlantSeeds,
    /// Spray every young crop.
    PesticideControl,
    /// Collect every ripe crop.
    Harvest,
}

impl FieldTask {
    /// The cell kind this task works on.
    pub fn target(self) -> CellKind {
        match self {
            FieldTask::PlantSeeds => CellKind::PloughLand,
            FieldTask::PesticideControl => CellKind::Young,
            FieldTask::Harvest => CellKind::Final,
        }
    }

    /// Every cell of the target kind, in row-major order.
    pub fn goals(self, grid: &FieldGrid) -> Vec<Position> {
        grid.positions_of(&self.target())
    }

    /// Name used in configuration.
    pub fn name(self) -> &'static str {
        match self {
            FieldTask::PlantSeeds => "plant_seeds",
            FieldTask::PesticideControl => "pesticide_control",
            FieldTask::Harvest => "harvest",
        }
    }
}

impl FromStr for FieldTask {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plant_seeds" => Ok(FieldTask::PlantSeeds),
            "pesticide_control" => Ok(FieldTask::PesticideControl),
            "harvest" => Ok(FieldTask::Harvest),
            other => Err(NavigationError::UnsupportedTask(other.to_owned())),
        }
    }
}

impl fmt::Display for FieldTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
