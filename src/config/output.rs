use super::traits::ConfigSection;
use crate::error::RevcalcError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How search reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable block per target
    #[default]
    Text,
    /// One JSON object per target
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Exit status used when no targets are given. The OS may truncate it
    /// (1337 becomes 57 on Unix).
    pub usage_exit_code: i32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            usage_exit_code: 1337,
        }
    }
}

impl ConfigSection for OutputConfig {
    fn section_name() -> &'static str {
        "output"
    }

    fn validate(&self) -> Result<(), RevcalcError> {
        if self.usage_exit_code == 0 {
            return Err(RevcalcError::Configuration(
                "Usage exit code must be non-zero".to_string()
            ));
        }
        Ok(())
    }
}
