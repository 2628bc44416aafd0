//! Type-safe engine argument contracts.
//!
//! Each engine action has a struct in [`crate::commands`] implementing
//! [`UciArgs`]. The struct fields are the structured identifiers; the trait
//! turns them into the single opaque parameter the engine receives.

use crate::types::Action;

/// Trait for typed engine arguments.
///
/// # Contract
///
/// - `action()`: the verb passed as the first engine argument.
/// - `param()`: the key path (or other operand) passed as the second
///   argument, or `None` when the action takes no operand. It is always a
///   single process argument, never split on spaces or dots.
/// - `stdin_text()`: text to pipe to the engine; `None` leaves the caller's
///   stdin attached.
///
/// # Example
///
/// ```
/// use ucitool::commands::options::GetArgs;
/// use ucitool::UciArgs;
///
/// let args = GetArgs {
///     config: "network".into(),
///     section: "lan".into(),
///     option: Some("ipaddr".into()),
/// };
/// assert_eq!(args.param().as_deref(), Some("network.lan.ipaddr"));
/// ```
pub trait UciArgs {
    fn action(&self) -> Action;

    fn param(&self) -> Option<String>;

    fn stdin_text(&self) -> Option<&str> {
        None
    }
}
