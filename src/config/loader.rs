//! Settings loading functionality.
//!
//! Loads [`EngineSettings`] from a YAML file and validates the values
//! before they reach the engine.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::settings::EngineSettings;

impl EngineSettings {
    /// Loads settings from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file (e.g., "./config/engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns the loaded settings on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML
    /// - Any value is outside its valid range
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timeclock_engine::config::EngineSettings;
    ///
    /// let settings = EngineSettings::load("./config/engine.yaml")?;
    /// # Ok::<(), timeclock_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_yaml_str(&contents).map_err(|err| match err {
            EngineError::ConfigParseError { message, .. } => EngineError::ConfigParseError {
                path: path.display().to_string(),
                message,
            },
            other => other,
        })
    }

    /// Parses settings from a YAML string and validates them.
    pub fn from_yaml_str(contents: &str) -> EngineResult<Self> {
        let settings: EngineSettings =
            serde_yaml::from_str(contents).map_err(|err| EngineError::ConfigParseError {
                path: "<inline>".to_string(),
                message: err.to_string(),
            })?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> EngineResult<()> {
        if self.overtime_threshold_minutes <= 0 {
            return Err(EngineError::InvalidSettings {
                field: "overtime_threshold_minutes".to_string(),
                message: "must be positive".to_string(),
            });
        }
        if self.pay_period.length_days <= 0 {
            return Err(EngineError::InvalidSettings {
                field: "pay_period.length_days".to_string(),
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
