use std::fs;
use std::path::{Path, PathBuf};

use atn_core::errors::{AtnError, ErrorInfo};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Environment variable overriding [`CampaignConfig::data_home`].
pub const DATA_HOME_ENV: &str = "ATN_DATA_HOME";

/// Timestep ceiling for the initial and sustaining stages.
pub const MAX_TIMESTEPS: u64 = 100_000;

fn config_error(code: &str, err: impl ToString) -> AtnError {
    AtnError::Config(ErrorInfo::new(code, err.to_string()))
}

/// External simulation engine invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Program to execute once per batch.
    pub program: String,
    /// Arguments placed before the per-batch flags.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: "atn-engine".to_string(),
            args: Vec::new(),
        }
    }
}

/// Campaign-wide settings loaded from YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignConfig {
    /// Root of the artifact store.
    #[serde(default = "CampaignConfig::default_data_home")]
    pub data_home: PathBuf,
    /// Ceiling for stages that run until steady state.
    #[serde(default = "CampaignConfig::default_max_timesteps")]
    pub max_timesteps: u64,
    /// Timesteps recorded by the convergence stage.
    #[serde(default = "CampaignConfig::default_analysis_window")]
    pub analysis_window: u64,
    #[serde(default)]
    pub runner: RunnerConfig,
}

impl CampaignConfig {
    fn default_data_home() -> PathBuf {
        PathBuf::from("./atn-data")
    }

    const fn default_max_timesteps() -> u64 {
        MAX_TIMESTEPS
    }

    const fn default_analysis_window() -> u64 {
        1000
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, AtnError> {
        let config: Self =
            serde_yaml::from_str(contents).map_err(|err| config_error("config-yaml", err))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file and applies environment overrides.
    pub fn load(path: &Path) -> Result<Self, AtnError> {
        let contents = fs::read_to_string(path).map_err(|err| match AtnError::from_io("config-read", path, err) {
            AtnError::NotFound(info) => AtnError::Config(info.with_hint("pass an existing --config file")),
            other => other,
        })?;
        let config = Self::from_yaml_str(&contents).map_err(|err| match err {
            AtnError::Config(info) => AtnError::Config(info.with_context("path", path.display().to_string())),
            other => other,
        })?;
        Ok(config.with_env_overrides())
    }

    /// Replaces `data_home` with `ATN_DATA_HOME` when that is set.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(home) = std::env::var_os(DATA_HOME_ENV).filter(|home| !home.is_empty()) {
            self.data_home = PathBuf::from(home);
        }
        self
    }

    pub fn validate(&self) -> Result<(), AtnError> {
        if self.max_timesteps == 0 || self.analysis_window == 0 {
            return Err(AtnError::Config(
                ErrorInfo::new("config-timesteps", "timestep counts must be positive")
                    .with_context("max_timesteps", self.max_timesteps.to_string())
                    .with_context("analysis_window", self.analysis_window.to_string()),
            ));
        }
        if self.runner.program.trim().is_empty() {
            return Err(config_error("config-runner", "runner program must not be empty"));
        }
        Ok(())
    }
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            data_home: Self::default_data_home(),
            max_timesteps: Self::default_max_timesteps(),
            analysis_window: Self::default_analysis_window(),
            runner: RunnerConfig::default(),
        }
    }
}

/// Generator name plus arguments handed to the runner through a set
/// descriptor. Stored on disk as `{"generator": ..., "args": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorTemplate {
    pub generator: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

impl GeneratorTemplate {
    pub fn new(generator: impl Into<String>) -> Self {
        Self {
            generator: generator.into(),
            args: Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn load(path: &Path) -> Result<Self, AtnError> {
        let bytes = fs::read(path).map_err(|err| AtnError::from_io("template-read", path, err))?;
        serde_json::from_slice(&bytes).map_err(|err| {
            AtnError::Config(
                ErrorInfo::new("template-json", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let config = CampaignConfig::from_yaml_str("runner:\n  program: engine.sh\n").unwrap();
        assert_eq!(config.max_timesteps, 100_000);
        assert_eq!(config.analysis_window, 1000);
        assert_eq!(config.data_home, PathBuf::from("./atn-data"));
        assert_eq!(config.runner.program, "engine.sh");
        assert!(config.runner.args.is_empty());
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let err = CampaignConfig::from_yaml_str("analysis_window: 0\n").unwrap_err();
        assert_eq!(err.info().code, "config-timesteps");
        let err = CampaignConfig::from_yaml_str("max_timesteps: [1]\n").unwrap_err();
        assert!(matches!(err, AtnError::Config(_)));
    }
}
