//! Privilege elevation detection
//!
//! Elevation is decided per call: if the helper binary exists on the host, the
//! elevation command is prepended to the engine invocation. The probe is a
//! trait so tests can pick either branch without touching the filesystem.

use std::path::{Path, PathBuf};

/// Default location probed for the elevation helper.
pub const DEFAULT_HELPER_PATH: &str = "/usr/bin/sudo";

/// Environment variable that forces the probe to report no elevation.
pub const NO_ELEVATION_ENV: &str = "UCITOOL_NO_ELEVATION";

/// Answers whether privilege elevation is available right now.
pub trait PrivilegeProbe {
    fn elevation_available(&self) -> bool;
}

/// Production probe: checks that the helper path exists, on every call.
#[derive(Debug, Clone)]
pub struct HelperPathProbe {
    helper: PathBuf,
}

impl HelperPathProbe {
    pub fn new(helper: impl Into<PathBuf>) -> Self {
        Self {
            helper: helper.into(),
        }
    }

    pub fn helper(&self) -> &Path {
        &self.helper
    }
}

impl Default for HelperPathProbe {
    fn default() -> Self {
        Self::new(DEFAULT_HELPER_PATH)
    }
}

impl PrivilegeProbe for HelperPathProbe {
    fn elevation_available(&self) -> bool {
        if elevation_disabled_by_env() {
            tracing::debug!("Elevation disabled via {}", NO_ELEVATION_ENV);
            return false;
        }
        let exists = self.helper.exists();
        tracing::debug!("Elevation helper {} exists: {}", self.helper.display(), exists);
        exists
    }
}

/// Fixed answer, for tests and for `--no-elevation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticProbe(pub bool);

impl PrivilegeProbe for StaticProbe {
    fn elevation_available(&self) -> bool {
        self.0
    }
}

/// Set `UCITOOL_NO_ELEVATION=1` (or `true`) to never prepend the helper
pub fn elevation_disabled_by_env() -> bool {
    std::env::var(NO_ELEVATION_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}
