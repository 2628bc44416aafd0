//! Engine action names
//!
//! Each variant maps to the exact verb the `uci` binary expects as its first
//! argument.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A `uci` action verb
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Batch,
    Export,
    Import,
    Changes,
    Commit,
    Add,
    AddList,
    DelList,
    Show,
    Get,
    Set,
    Delete,
    Rename,
    Revert,
    Reorder,
}

impl Action {
    /// Whether the facade hands the engine's response back to the caller.
    ///
    /// Write-style actions still run the engine and capture its output, the
    /// result is just not part of their return value.
    pub fn returns_output(self) -> bool {
        matches!(self, Self::Export | Self::Changes | Self::Show | Self::Get)
    }
}
