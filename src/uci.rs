//! The uci facade.
//!
//! One method per engine action. Each takes the structured identifiers, builds
//! the matching argument struct from [`crate::commands`], and runs it through
//! [`Uci::execute`], the single path to the engine.
//!
//! Read-style methods (`export`, `changes`, `show`, `get`) return the first
//! non-empty line the engine printed, or `"None"`. Write-style methods return
//! `()`. Neither reports engine-side failures; see [`crate::invoker`].

use crate::commands::options::{AddListArgs, DelListArgs, GetArgs, SetArgs, ShowArgs};
use crate::commands::sections::{AddArgs, DeleteArgs, RenameArgs, ReorderArgs};
use crate::commands::staging::{
    BatchArgs, ChangesArgs, CommitArgs, ExportArgs, ImportArgs, RevertArgs,
};
use crate::config::UciConfig;
use crate::error::Result;
use crate::invoker::{Invoker, ProcessRunner, StdinSource, SystemRunner, UciOutput};
use crate::privilege::{HelperPathProbe, PrivilegeProbe};
use crate::uci_args::UciArgs;

/// Stateless service object over the engine.
#[derive(Debug, Clone)]
pub struct Uci<P = HelperPathProbe, R = SystemRunner> {
    invoker: Invoker<P, R>,
}

impl Uci {
    pub fn new(config: UciConfig) -> Self {
        Self {
            invoker: Invoker::new(config),
        }
    }
}

impl Default for Uci {
    fn default() -> Self {
        Self::new(UciConfig::default())
    }
}

impl<P: PrivilegeProbe, R: ProcessRunner> Uci<P, R> {
    pub fn with_invoker(invoker: Invoker<P, R>) -> Self {
        Self { invoker }
    }

    pub fn invoker(&self) -> &Invoker<P, R> {
        &self.invoker
    }

    /// Run typed arguments and return everything the engine produced.
    pub fn execute<T: UciArgs + ?Sized>(&self, args: &T) -> Result<UciOutput> {
        let param = args.param();
        let stdin = match args.stdin_text() {
            Some(text) => StdinSource::Text(text),
            None => StdinSource::Inherit,
        };
        self.invoker.run_with_stdin(args.action(), param.as_deref(), stdin)
    }

    /// Run typed arguments and return the response if the action is read-style.
    ///
    /// `Some` exactly when [`Action::returns_output`](crate::Action::returns_output)
    /// holds for `args.action()`.
    pub fn respond<T: UciArgs + ?Sized>(&self, args: &T) -> Result<Option<String>> {
        let output = self.execute(args)?;
        Ok(args.action().returns_output().then(|| output.response()))
    }

    fn read<T: UciArgs>(&self, args: &T) -> Result<String> {
        debug_assert!(args.action().returns_output(), "{} is write-style", args.action());
        Ok(self.respond(args)?.unwrap_or_default())
    }

    fn write<T: UciArgs>(&self, args: &T) -> Result<()> {
        debug_assert!(!args.action().returns_output(), "{} is read-style", args.action());
        self.respond(args)?;
        Ok(())
    }

    /// Run a batch script from the caller's stdin.
    pub fn batch(&self) -> Result<()> {
        self.write(&BatchArgs::default())
    }

    /// Run the given batch script.
    pub fn batch_script(&self, script: &str) -> Result<()> {
        self.write(&BatchArgs {
            script: Some(script.to_string()),
        })
    }

    pub fn export(&self, config: Option<&str>) -> Result<String> {
        self.read(&ExportArgs {
            config: config.map(Into::into),
        })
    }

    /// Import uci syntax from the caller's stdin.
    pub fn import(&self, config: Option<&str>) -> Result<()> {
        self.write(&ImportArgs {
            config: config.map(Into::into),
            data: None,
        })
    }

    /// Import the given uci syntax.
    pub fn import_from(&self, config: Option<&str>, data: &str) -> Result<()> {
        self.write(&ImportArgs {
            config: config.map(Into::into),
            data: Some(data.to_string()),
        })
    }

    pub fn changes(&self, config: Option<&str>) -> Result<String> {
        self.read(&ChangesArgs {
            config: config.map(Into::into),
        })
    }

    pub fn commit(&self, config: Option<&str>) -> Result<()> {
        self.write(&CommitArgs {
            config: config.map(Into::into),
        })
    }

    pub fn add(&self, config: &str, section_type: &str) -> Result<()> {
        self.write(&AddArgs {
            config: config.into(),
            section_type: section_type.into(),
        })
    }

    pub fn add_list(&self, config: &str, section: &str, option: &str, value: &str) -> Result<()> {
        self.write(&AddListArgs {
            config: config.into(),
            section: section.into(),
            option: option.into(),
            value: value.into(),
        })
    }

    pub fn del_list(&self, config: &str, section: &str, option: &str, value: &str) -> Result<()> {
        self.write(&DelListArgs {
            config: config.into(),
            section: section.into(),
            option: option.into(),
            value: value.into(),
        })
    }

    pub fn show(
        &self,
        config: Option<&str>,
        section: Option<&str>,
        option: Option<&str>,
    ) -> Result<String> {
        self.read(&ShowArgs {
            config: config.map(Into::into),
            section: section.map(Into::into),
            option: option.map(Into::into),
        })
    }

    pub fn get(&self, config: &str, section: &str, option: Option<&str>) -> Result<String> {
        self.read(&GetArgs {
            config: config.into(),
            section: section.into(),
            option: option.map(Into::into),
        })
    }

    pub fn set(
        &self,
        config: &str,
        section: &str,
        option: Option<&str>,
        value: &str,
    ) -> Result<()> {
        self.write(&SetArgs {
            config: config.into(),
            section: section.into(),
            option: option.map(Into::into),
            value: value.into(),
        })
    }

    pub fn delete(
        &self,
        config: &str,
        section: Option<&str>,
        option: Option<&str>,
        id: Option<&str>,
    ) -> Result<()> {
        self.write(&DeleteArgs {
            config: config.into(),
            section: section.map(Into::into),
            option: option.map(Into::into),
            id: id.map(Into::into),
        })
    }

    pub fn rename(
        &self,
        config: &str,
        section: &str,
        option: Option<&str>,
        name: &str,
    ) -> Result<()> {
        self.write(&RenameArgs {
            config: config.into(),
            section: section.into(),
            option: option.map(Into::into),
            name: name.into(),
        })
    }

    pub fn revert(&self, config: &str, section: Option<&str>, option: Option<&str>) -> Result<()> {
        self.write(&RevertArgs {
            config: config.into(),
            section: section.map(Into::into),
            option: option.map(Into::into),
        })
    }

    pub fn reorder(&self, config: &str, section: &str, position: u32) -> Result<()> {
        self.write(&ReorderArgs {
            config: config.into(),
            section: section.into(),
            position,
        })
    }
}
