//! Preflight checks for the host environment
//!
//! Reports whether the engine binary can be found, whether the elevation
//! helper exists (and so will be prepended), and whether we already run as
//! root. Nothing here changes how commands are built; the invoker probes the
//! helper again on every call.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::UciConfig;
use crate::privilege::{elevation_disabled_by_env, HelperPathProbe, PrivilegeProbe};

/// Result of environment verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanityCheckResult {
    pub engine: String,
    pub engine_found: bool,
    pub elevation_helper: String,
    pub elevation_available: bool,
    pub elevation_disabled: bool,
    pub is_root: bool,
}

impl SanityCheckResult {
    /// Only a missing engine is fatal; elevation is optional
    pub fn is_ok(&self) -> bool {
        self.engine_found
    }

    /// Human readable report, one check per line
    pub fn report(&self) -> String {
        let mark = |ok: bool| if ok { "ok" } else { "missing" };
        let mut lines = vec![
            format!("engine     {:<8} {}", mark(self.engine_found), self.engine),
            format!(
                "elevation  {:<8} {}",
                mark(self.elevation_available),
                self.elevation_helper
            ),
            format!("root       {}", if self.is_root { "yes" } else { "no" }),
        ];
        if self.elevation_disabled {
            lines.push("note       elevation disabled by UCITOOL_NO_ELEVATION".to_string());
        }
        if !self.is_root && !self.elevation_available {
            lines.push("note       write actions may be refused without root".to_string());
        }
        lines.join("\n")
    }
}

/// Check if a binary is available as a path or on PATH
fn binary_exists(name: &str) -> bool {
    if name.contains('/') {
        return Path::new(name).is_file();
    }
    Command::new("which")
        .arg(name)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Check if running as root (EUID 0)
fn is_running_as_root() -> bool {
    nix::unistd::geteuid().is_root()
}

/// Perform all checks for the given configuration
pub fn verify_environment(config: &UciConfig) -> SanityCheckResult {
    let probe = HelperPathProbe::new(config.elevation_helper.clone());
    let result = SanityCheckResult {
        engine: config.engine.clone(),
        engine_found: binary_exists(&config.engine),
        elevation_helper: config.elevation_helper.display().to_string(),
        elevation_available: probe.elevation_available(),
        elevation_disabled: elevation_disabled_by_env(),
        is_root: is_running_as_root(),
    };
    tracing::debug!("Preflight result: {:?}", result);
    result
}
