use std::path::Path;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::Deserialize;

use crate::scenario::ScenarioSettings;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
const ENV_PREFIX: &str = "FURROW";

/// Top-level settings for the planner binary.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub planner: PlannerSettings,
    pub scenario: ScenarioSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive when `RUST_LOG` does not override it.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlannerSettings {
    /// Wall-clock budget for a single planning call.
    pub timeout_ms: u64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self { timeout_ms: 5_000 }
    }
}

/// Loads settings from `config/default.toml`, an optional user file and
/// `FURROW__*` environment variables, later sources winning.
///
/// The default file is only required when no user file is given.
pub fn load_settings(user_path: Option<&Path>) -> Result<Settings, ConfigError> {
    load_layered(user_path, environment())
}

fn load_layered(user_path: Option<&Path>, env: Environment) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(user_path.is_none()));

    if let Some(path) = user_path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }

    finish(builder, env)
}

fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

fn finish(builder: ConfigBuilder<DefaultState>, env: Environment) -> Result<Settings, ConfigError> {
    builder.add_source(env).build()?.try_deserialize()
}
