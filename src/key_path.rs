//! Dotted key paths addressing uci configuration trees.
//!
//! A key path has the shape `config[.section[.option]][=literal]`. Levels are
//! always filled in order: an option without a section cannot be expressed, so
//! a missing level truncates the path at that point instead of producing a
//! malformed string.
//!
//! Identifiers are not validated. A section name containing `.` yields a path
//! the engine will interpret differently; that is the engine's call to reject.

use std::fmt;

/// Maximum number of dotted segments (config, section, option).
pub const MAX_DEPTH: usize = 3;

/// A `config[.section[.option]][=literal]` path, built fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPath {
    segments: Vec<String>,
    literal: Option<String>,
}

impl KeyPath {
    /// Start a path at the config level.
    pub fn config(config: impl Into<String>) -> Self {
        Self {
            segments: vec![config.into()],
            literal: None,
        }
    }

    /// Build the deepest path the given levels allow.
    ///
    /// Returns `None` when `config` is absent. A missing `section` drops any
    /// `option` that follows it.
    pub fn deepest(
        config: Option<&str>,
        section: Option<&str>,
        option: Option<&str>,
    ) -> Option<Self> {
        let mut path = Self::config(config?);
        if let Some(section) = section {
            path = path.section(section);
            if let Some(option) = option {
                path = path.option(option);
            }
        } else if option.is_some() {
            tracing::debug!("option given without a section, truncating key path at config");
        }
        Some(path)
    }

    /// Descend to a section. Only valid directly below the config level.
    pub fn section(mut self, section: impl Into<String>) -> Self {
        if self.segments.len() == 1 {
            self.segments.push(section.into());
        }
        self
    }

    /// Descend to an option. Ignored unless a section is already present.
    pub fn option(mut self, option: impl Into<String>) -> Self {
        if self.segments.len() == 2 {
            self.segments.push(option.into());
        }
        self
    }

    /// Append `=literal`.
    pub fn assign(mut self, literal: impl Into<String>) -> Self {
        self.literal = Some(literal.into());
        self
    }

    /// Append `='literal'`, the form list operations use.
    pub fn assign_quoted(self, literal: &str) -> Self {
        self.assign(format!("'{literal}'"))
    }

    /// Number of dotted segments (1 to 3).
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn literal(&self) -> Option<&str> {
        self.literal.as_deref()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))?;
        if let Some(literal) = &self.literal {
            write!(f, "={literal}")?;
        }
        Ok(())
    }
}

impl From<KeyPath> for String {
    fn from(path: KeyPath) -> Self {
        path.to_string()
    }
}
