use super::{evolution::EvolutionConfig, output::OutputConfig, traits::ConfigSection};
use crate::error::RevcalcError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variables starting with this prefix override file settings,
/// e.g. `REVCALC_EVOLUTION__POPULATION_SIZE=50`.
pub const DEFAULT_ENV_PREFIX: &str = "REVCALC";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), RevcalcError> {
        self.evolution.validate().map_err(section_error::<EvolutionConfig>)?;
        self.output.validate().map_err(section_error::<OutputConfig>)?;
        Ok(())
    }
}

fn section_error<S: ConfigSection>(error: RevcalcError) -> RevcalcError {
    match error {
        RevcalcError::Configuration(msg) => {
            RevcalcError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    }
}

/// Layers defaults, an optional config file and the environment
pub struct ConfigManager {
    file: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            file: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    /// Read a TOML or JSON file (format chosen by extension) on top of the
    /// defaults. The file must exist.
    pub fn with_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.file = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    pub fn load(&self) -> Result<AppConfig, RevcalcError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = &self.file {
            log::debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path.as_path()));
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(config: &AppConfig) -> Result<String, RevcalcError> {
        Ok(toml::to_string_pretty(config)?)
    }

    pub fn save_to_file<P: AsRef<Path>>(config: &AppConfig, path: P) -> Result<(), RevcalcError> {
        std::fs::write(path, Self::to_toml(config)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_names_the_section() {
        let mut config = AppConfig::default();
        config.evolution.population_size = 0;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("[evolution]"), "{}", err);
    }

    #[test]
    fn test_defaults_render_as_toml() {
        let text = ConfigManager::to_toml(&AppConfig::default()).unwrap();
        assert!(text.contains("[evolution]"));
        assert!(text.contains("chromosome_length = 100"));
        assert!(text.contains("usage_exit_code = 1337"));
    }
}
