//! Invoker configuration, loadable from and savable to JSON files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, UciError};
use crate::privilege::DEFAULT_HELPER_PATH;

/// Default engine binary, resolved through `PATH`.
pub const DEFAULT_ENGINE: &str = "uci";

/// Default elevation command prepended when the helper exists.
pub const DEFAULT_ELEVATION_COMMAND: &str = "sudo";

/// How the engine is invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UciConfig {
    /// Engine binary name or path
    pub engine: String,
    /// Command prepended when elevation is available
    pub elevation_command: String,
    /// Path whose existence signals that elevation is available
    pub elevation_helper: PathBuf,
    /// Log and report commands instead of running them
    pub dry_run: bool,
}

impl Default for UciConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            elevation_command: DEFAULT_ELEVATION_COMMAND.to_string(),
            elevation_helper: PathBuf::from(DEFAULT_HELPER_PATH),
            dry_run: false,
        }
    }
}

impl UciConfig {
    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        tracing::debug!("Saved configuration to {:?}", path.as_ref());
        Ok(())
    }

    /// Load configuration from a JSON file; missing fields take defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            UciError::config(format!(
                "Failed to read configuration from {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;

        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.engine.trim().is_empty() {
            return Err(UciError::config("Engine binary must be specified"));
        }
        if self.engine.chars().any(char::is_whitespace) {
            return Err(UciError::config(
                "Engine must be a single binary name or path, not a command line",
            ));
        }
        if self.elevation_command.trim().is_empty() {
            return Err(UciError::config("Elevation command must be specified"));
        }
        if self.elevation_command.chars().any(char::is_whitespace) {
            return Err(UciError::config(
                "Elevation command must be a single binary name or path, not a command line",
            ));
        }
        if self.elevation_helper.as_os_str().is_empty() {
            return Err(UciError::config("Elevation helper path must be specified"));
        }
        Ok(())
    }
}
