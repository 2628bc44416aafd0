//! Arguments for reading and writing values.

use crate::key_path::KeyPath;
use crate::types::Action;
use crate::uci_args::UciArgs;

/// `uci show [<config>[.<section>[.<option>]]]`
///
/// The deepest given prefix wins; no config means the whole tree.
#[derive(Debug, Clone, Default)]
pub struct ShowArgs {
    pub config: Option<String>,
    pub section: Option<String>,
    pub option: Option<String>,
}

impl UciArgs for ShowArgs {
    fn action(&self) -> Action {
        Action::Show
    }

    fn param(&self) -> Option<String> {
        KeyPath::deepest(
            self.config.as_deref(),
            self.section.as_deref(),
            self.option.as_deref(),
        )
        .map(String::from)
    }
}

/// `uci get <config>.<section>[.<option>]`
///
/// Without an option the engine answers with the section type.
#[derive(Debug, Clone)]
pub struct GetArgs {
    pub config: String,
    pub section: String,
    pub option: Option<String>,
}

impl UciArgs for GetArgs {
    fn action(&self) -> Action {
        Action::Get
    }

    fn param(&self) -> Option<String> {
        Some(section_path(&self.config, &self.section, self.option.as_deref()).into())
    }
}

/// `uci set <config>.<section>[.<option>]=<value>`
///
/// Without an option this creates (or retypes) a named section of type `value`.
#[derive(Debug, Clone)]
pub struct SetArgs {
    pub config: String,
    pub section: String,
    pub option: Option<String>,
    pub value: String,
}

impl UciArgs for SetArgs {
    fn action(&self) -> Action {
        Action::Set
    }

    fn param(&self) -> Option<String> {
        Some(
            section_path(&self.config, &self.section, self.option.as_deref())
                .assign(self.value.as_str())
                .into(),
        )
    }
}

/// `uci add_list <config>.<section>.<option>='<string>'`
#[derive(Debug, Clone)]
pub struct AddListArgs {
    pub config: String,
    pub section: String,
    pub option: String,
    pub value: String,
}

impl UciArgs for AddListArgs {
    fn action(&self) -> Action {
        Action::AddList
    }

    fn param(&self) -> Option<String> {
        Some(list_entry(&self.config, &self.section, &self.option, &self.value))
    }
}

/// `uci del_list <config>.<section>.<option>='<string>'`
#[derive(Debug, Clone)]
pub struct DelListArgs {
    pub config: String,
    pub section: String,
    pub option: String,
    pub value: String,
}

impl UciArgs for DelListArgs {
    fn action(&self) -> Action {
        Action::DelList
    }

    fn param(&self) -> Option<String> {
        Some(list_entry(&self.config, &self.section, &self.option, &self.value))
    }
}

fn section_path(config: &str, section: &str, option: Option<&str>) -> KeyPath {
    let path = KeyPath::config(config).section(section);
    match option {
        Some(option) => path.option(option),
        None => path,
    }
}

// The quotes are part of the argument; no shell strips them.
fn list_entry(config: &str, section: &str, option: &str, value: &str) -> String {
    KeyPath::config(config)
        .section(section)
        .option(option)
        .assign_quoted(value)
        .into()
}
