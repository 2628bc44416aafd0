//! Arguments for whole-config and staging-area actions.

use crate::key_path::KeyPath;
use crate::types::Action;
use crate::uci_args::UciArgs;

// ============================================================================
// Batch
// ============================================================================

/// `uci batch`: runs a multi-line script read from stdin.
#[derive(Debug, Clone, Default)]
pub struct BatchArgs {
    /// Script to pipe in. `None` lets the engine read the caller's stdin.
    pub script: Option<String>,
}

impl UciArgs for BatchArgs {
    fn action(&self) -> Action {
        Action::Batch
    }

    fn param(&self) -> Option<String> {
        None
    }

    fn stdin_text(&self) -> Option<&str> {
        self.script.as_deref()
    }
}

// ============================================================================
// Export / Import / Changes / Commit
// ============================================================================

/// `uci export [<config>]`: dump configuration in uci syntax.
#[derive(Debug, Clone, Default)]
pub struct ExportArgs {
    pub config: Option<String>,
}

impl UciArgs for ExportArgs {
    fn action(&self) -> Action {
        Action::Export
    }

    fn param(&self) -> Option<String> {
        self.config.clone()
    }
}

/// `uci import [<config>]`: load configuration in uci syntax from stdin.
#[derive(Debug, Clone, Default)]
pub struct ImportArgs {
    pub config: Option<String>,
    /// Data to pipe in. `None` lets the engine read the caller's stdin.
    pub data: Option<String>,
}

impl UciArgs for ImportArgs {
    fn action(&self) -> Action {
        Action::Import
    }

    fn param(&self) -> Option<String> {
        self.config.clone()
    }

    fn stdin_text(&self) -> Option<&str> {
        self.data.as_deref()
    }
}

/// `uci changes [<config>]`: list staged changes.
#[derive(Debug, Clone, Default)]
pub struct ChangesArgs {
    pub config: Option<String>,
}

impl UciArgs for ChangesArgs {
    fn action(&self) -> Action {
        Action::Changes
    }

    fn param(&self) -> Option<String> {
        self.config.clone()
    }
}

/// `uci commit [<config>]`: write staged changes to persistent storage.
#[derive(Debug, Clone, Default)]
pub struct CommitArgs {
    pub config: Option<String>,
}

impl UciArgs for CommitArgs {
    fn action(&self) -> Action {
        Action::Commit
    }

    fn param(&self) -> Option<String> {
        self.config.clone()
    }
}

// ============================================================================
// Revert
// ============================================================================

/// `uci revert <config>[.<section>[.<option>]]`: drop staged changes.
#[derive(Debug, Clone)]
pub struct RevertArgs {
    pub config: String,
    pub section: Option<String>,
    /// Only used when `section` is set.
    pub option: Option<String>,
}

impl UciArgs for RevertArgs {
    fn action(&self) -> Action {
        Action::Revert
    }

    fn param(&self) -> Option<String> {
        KeyPath::deepest(
            Some(self.config.as_str()),
            self.section.as_deref(),
            self.option.as_deref(),
        )
        .map(String::from)
    }
}
