use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ucitool - typed front end for the uci configuration engine
#[derive(Parser, Debug)]
#[command(name = "ucitool")]
#[command(about = "Read and change uci configuration through typed commands")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file for the invoker
    #[arg(short = 'c', long = "config-file", global = true)]
    pub config_file: Option<PathBuf>,

    /// Engine binary to run instead of the configured one
    #[arg(long, global = true)]
    pub engine: Option<String>,

    /// Log the command that would run without running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Never prepend the elevation command
    #[arg(long, global = true)]
    pub no_elevation: bool,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run a multi-line uci script (from a file, or stdin)
    Batch {
        /// Script file; stdin is used when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Export configuration in uci syntax
    Export {
        config: Option<String>,
    },
    /// Import configuration in uci syntax (from a file, or stdin)
    Import {
        config: Option<String>,
        /// Data file; stdin is used when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// List staged changes
    Changes {
        config: Option<String>,
    },
    /// Write staged changes to persistent storage
    Commit {
        config: Option<String>,
    },
    /// Add an anonymous section of the given type
    Add {
        config: String,
        section_type: String,
    },
    /// Append a value to a list option
    AddList {
        config: String,
        section: String,
        option: String,
        value: String,
    },
    /// Remove a value from a list option
    DelList {
        config: String,
        section: String,
        option: String,
        value: String,
    },
    /// Show a config, section or option in compressed notation
    Show {
        config: Option<String>,
        section: Option<String>,
        option: Option<String>,
    },
    /// Get an option value, or a section's type
    Get {
        config: String,
        section: String,
        option: Option<String>,
    },
    /// Set an option value, or create a section of type VALUE
    Set {
        config: String,
        section: String,
        value: String,
        /// Option to set; without it the section itself is set
        #[arg(short, long)]
        option: Option<String>,
    },
    /// Delete a section, an option, or one list entry
    Delete {
        config: String,
        section: Option<String>,
        option: Option<String>,
        /// List entry to remove (needs SECTION and OPTION)
        #[arg(long)]
        id: Option<String>,
    },
    /// Rename a section or option
    Rename {
        config: String,
        section: String,
        name: String,
        /// Option to rename; without it the section is renamed
        #[arg(short, long)]
        option: Option<String>,
    },
    /// Revert staged changes to a config, section or option
    Revert {
        config: String,
        section: Option<String>,
        option: Option<String>,
    },
    /// Move a section to the given position
    Reorder {
        config: String,
        section: String,
        position: u32,
    },
    /// Check that the engine and elevation helper are available
    Doctor,
    /// Write the effective invoker configuration to a JSON file
    InitConfig {
        path: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
