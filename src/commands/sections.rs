//! Arguments for section-level structure changes.
//!
//! | Struct        | Parameter                                  |
//! |---------------|--------------------------------------------|
//! | `AddArgs`     | `config section-type`                      |
//! | `DeleteArgs`  | `config[.section[.option[=id]]]`           |
//! | `RenameArgs`  | `config.section[.option]=name`             |
//! | `ReorderArgs` | `config.section=position`                  |

use crate::key_path::KeyPath;
use crate::types::Action;
use crate::uci_args::UciArgs;

/// `uci add <config> <section-type>`: create an anonymous section.
///
/// Config and type travel as one space-joined argument.
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub config: String,
    pub section_type: String,
}

impl UciArgs for AddArgs {
    fn action(&self) -> Action {
        Action::Add
    }

    fn param(&self) -> Option<String> {
        Some(format!("{} {}", self.config, self.section_type))
    }
}

/// `uci delete`: remove a section, an option, or one list entry.
#[derive(Debug, Clone)]
pub struct DeleteArgs {
    pub config: String,
    pub section: Option<String>,
    pub option: Option<String>,
    /// List entry to remove. Only used when both `section` and `option` are set.
    pub id: Option<String>,
}

impl UciArgs for DeleteArgs {
    fn action(&self) -> Action {
        Action::Delete
    }

    fn param(&self) -> Option<String> {
        let path = KeyPath::deepest(
            Some(self.config.as_str()),
            self.section.as_deref(),
            self.option.as_deref(),
        )?;
        let path = match &self.id {
            Some(id) if path.depth() == 3 => path.assign(id.as_str()),
            Some(_) => {
                tracing::debug!("delete id ignored without section and option");
                path
            }
            None => path,
        };
        Some(path.into())
    }
}

/// `uci rename <config>.<section>[.<option>]=<name>`
#[derive(Debug, Clone)]
pub struct RenameArgs {
    pub config: String,
    pub section: String,
    pub option: Option<String>,
    pub name: String,
}

impl UciArgs for RenameArgs {
    fn action(&self) -> Action {
        Action::Rename
    }

    fn param(&self) -> Option<String> {
        let mut path = KeyPath::config(self.config.as_str()).section(self.section.as_str());
        if let Some(option) = &self.option {
            path = path.option(option.as_str());
        }
        Some(path.assign(self.name.as_str()).into())
    }
}

/// `uci reorder <config>.<section>=<position>`
#[derive(Debug, Clone)]
pub struct ReorderArgs {
    pub config: String,
    pub section: String,
    pub position: u32,
}

impl UciArgs for ReorderArgs {
    fn action(&self) -> Action {
        Action::Reorder
    }

    fn param(&self) -> Option<String> {
        Some(
            KeyPath::config(self.config.as_str())
                .section(self.section.as_str())
                .assign(self.position.to_string())
                .into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delete(section: Option<&str>, option: Option<&str>, id: Option<&str>) -> Option<String> {
        DeleteArgs {
            config: "firewall".into(),
            section: section.map(Into::into),
            option: option.map(Into::into),
            id: id.map(Into::into),
        }
        .param()
    }

    #[test]
    fn test_add_is_space_joined() {
        let args = AddArgs {
            config: "network".into(),
            section_type: "interface".into(),
        };
        assert_eq!(args.param().as_deref(), Some("network interface"));
    }

    #[test]
    fn test_delete_depths() {
        assert_eq!(delete(Some("@rule[0]"), None, None).as_deref(), Some("firewall.@rule[0]"));
        assert_eq!(
            delete(Some("@rule[0]"), Some("src"), None).as_deref(),
            Some("firewall.@rule[0].src")
        );
        assert_eq!(
            delete(Some("@rule[0]"), Some("src_ip"), Some("10.0.0.1")).as_deref(),
            Some("firewall.@rule[0].src_ip=10.0.0.1")
        );
    }

    #[test]
    fn test_delete_truncates_missing_levels() {
        assert_eq!(delete(None, None, None).as_deref(), Some("firewall"));
        assert_eq!(delete(None, Some("src"), Some("x")).as_deref(), Some("firewall"));
        assert_eq!(
            delete(Some("@rule[0]"), None, Some("x")).as_deref(),
            Some("firewall.@rule[0]")
        );
    }

    #[test]
    fn test_rename_uses_name() {
        let mut args = RenameArgs {
            config: "network".into(),
            section: "cfg0a1b2c".into(),
            option: None,
            name: "guest".into(),
        };
        assert_eq!(args.param().as_deref(), Some("network.cfg0a1b2c=guest"));

        args.option = Some("ifname".into());
        args.name = "device".into();
        assert_eq!(args.param().as_deref(), Some("network.cfg0a1b2c.ifname=device"));
    }

    #[test]
    fn test_reorder() {
        let args = ReorderArgs {
            config: "firewall".into(),
            section: "@rule[3]".into(),
            position: 0,
        };
        assert_eq!(args.action(), Action::Reorder);
        assert_eq!(args.param().as_deref(), Some("firewall.@rule[3]=0"));
    }
}
