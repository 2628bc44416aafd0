//! ucitool library
//!
//! A typed command layer over `uci`, the configuration engine of OpenWrt
//! based routers. Structured identifiers (config, section, option, value) are
//! turned into the engine's dotted key paths and run as
//! `[sudo] uci <action> [<param>]`.
//!
//! ```no_run
//! use ucitool::Uci;
//!
//! let uci = Uci::default();
//! let addr = uci.get("network", "lan", Some("ipaddr"))?;
//! uci.add_list("system", "ntp", "server", "0.de.pool.ntp.org")?;
//! uci.commit(Some("system"))?;
//! # Ok::<(), ucitool::UciError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod invoker;
pub mod key_path;
pub mod privilege;
pub mod sanity;
pub mod types;
pub mod uci;
pub mod uci_args;

pub use config::UciConfig;
pub use error::{Result, UciError};
pub use invoker::{
    CommandLine, Invoker, ProcessRunner, StdinSource, SystemRunner, UciOutput, NO_OUTPUT,
};
pub use key_path::KeyPath;
pub use privilege::{HelperPathProbe, PrivilegeProbe, StaticProbe};
pub use types::Action;
pub use uci::Uci;
pub use uci_args::UciArgs;
