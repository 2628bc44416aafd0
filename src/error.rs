//! Error handling module for ucitool
//!
//! Provides the library error type using thiserror. Engine-side failures are
//! deliberately not mapped here by the facade; only local faults (spawning the
//! engine, reading config files) become errors.

use thiserror::Error;

/// Main error type for ucitool
#[derive(Error, Debug)]
pub enum UciError {
    /// The engine process could not be started (binary missing, permission denied)
    #[error("Failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// IO errors (pipes, config files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The engine exited unsuccessfully; only produced on explicit request
    #[error("uci {action} failed (exit code {code}): {stderr}")]
    EngineFailed {
        action: String,
        code: i32,
        stderr: String,
    },
}

/// Result type alias for ucitool operations
pub type Result<T> = std::result::Result<T, UciError>;

impl UciError {
    /// Create a spawn error for the given command line
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UciError::config("engine must not be empty");
        assert_eq!(
            err.to_string(),
            "Configuration error: engine must not be empty"
        );

        let err = UciError::EngineFailed {
            action: "commit".to_string(),
            code: 1,
            stderr: "uci: Entry not found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "uci commit failed (exit code 1): uci: Entry not found"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: UciError = io_err.into();
        assert!(matches!(err, UciError::Io(_)));
    }

    #[test]
    fn test_spawn_error_keeps_command() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file");
        let err = UciError::spawn("sudo uci get network.lan", io_err);
        assert!(err.to_string().contains("sudo uci get network.lan"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
