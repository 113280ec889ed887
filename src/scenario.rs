use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

use furrow_navigation::{Algorithm, FieldGrid, FieldTask, PlanRequest, Position};

/// A planning scenario as written in a settings file.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioSettings {
    /// Algorithm name, e.g. `astar` or `tsp_nearest_neighbor`.
    pub algorithm: String,
    /// Cell labels, one inner list per row.
    pub rows: Vec<Vec<String>>,
    pub start: Position,
    #[serde(default)]
    pub goal: Option<Position>,
    #[serde(default)]
    pub goals: Vec<Position>,
    /// Field task used to pick goals when `goals` is empty.
    #[serde(default)]
    pub task: Option<String>,
}

impl ScenarioSettings {
    /// Validates the scenario and turns it into a [`PlanRequest`].
    ///
    /// `algorithm_override` replaces the algorithm named in the file.
    pub fn into_request(self, algorithm_override: Option<&str>) -> Result<PlanRequest> {
        let name = algorithm_override.unwrap_or(&self.algorithm);
        let algorithm: Algorithm = name.parse().context("Invalid scenario algorithm")?;

        let grid = FieldGrid::from_rows(self.rows).context("Invalid scenario grid")?;

        let mut goals = self.goals;
        if goals.is_empty() {
            if let Some(task) = &self.task {
                let task: FieldTask = task.parse().context("Invalid scenario task")?;
                goals = task.goals(&grid);
                info!(%task, targets = goals.len(), "Goals selected from field task");
            }
        }

        Ok(PlanRequest {
            grid,
            start: self.start,
            goal: self.goal,
            goals: (!goals.is_empty()).then_some(goals),
            algorithm,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(algorithm: &str) -> ScenarioSettings {
        ScenarioSettings {
            algorithm: algorithm.to_owned(),
            rows: vec![
                vec!["young".into(), "grass".into(), "stone".into()],
                vec!["grass".into(), "young".into(), "grass".into()],
            ],
            start: Position::new(0, 0),
            goal: None,
            goals: Vec::new(),
            task: None,
        }
    }

    #[test]
    fn test_into_request() {
        let mut settings = scenario("astar_multi");
        settings.goals = vec![Position::new(2, 1)];
        let request = settings.into_request(None).unwrap();

        assert_eq!(request.algorithm, Algorithm::AstarMulti);
        assert_eq!(request.grid.width(), 3);
        assert_eq!(request.grid.height(), 2);
        assert_eq!(request.goals, Some(vec![Position::new(2, 1)]));
    }

    #[test]
    fn test_task_selects_goals() {
        let mut settings = scenario("tsp_nearest_neighbor");
        settings.task = Some("pesticide_control".to_owned());
        let request = settings.into_request(None).unwrap();
        assert_eq!(
            request.goals,
            Some(vec![Position::new(0, 0), Position::new(1, 1)])
        );
    }

    #[test]
    fn test_algorithm_override() {
        let request = scenario("astar").into_request(Some("scan")).unwrap();
        assert_eq!(request.algorithm, Algorithm::Scan);
        assert_eq!(request.goals, None);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(scenario("teleport").into_request(None).is_err());

        let mut jagged = scenario("scan");
        jagged.rows.push(vec!["grass".into()]);
        assert!(jagged.into_request(None).is_err());

        let mut bad_task = scenario("astar_multi");
        bad_task.task = Some("weed".to_owned());
        assert!(bad_task.into_request(None).is_err());
    }
}
