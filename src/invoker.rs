//! Engine invocation.
//!
//! Every call to the configuration engine goes through [`Invoker`]. It builds
//! the command line `[elevation] engine action [param]`, runs it to
//! completion, and captures both output streams.
//!
//! # Failure policy
//!
//! The engine's exit code and stderr do not influence the value handed back by
//! [`Invoker::invoke`]: a failed `uci get` looks exactly like one that printed
//! nothing, and yields the `"None"` sentinel. Failures are logged at `warn`
//! level. Callers that need to act on them use [`Invoker::run`] and
//! [`UciOutput::ensure_success`].
//!
//! Failing to *start* the engine is a local fault and is returned as
//! [`UciError::Spawn`].

use std::fmt;
use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::config::UciConfig;
use crate::error::{Result, UciError};
use crate::privilege::{HelperPathProbe, PrivilegeProbe};
use crate::types::Action;

/// Returned by read-style operations when the engine printed nothing useful.
pub const NO_OUTPUT: &str = "None";

/// A fully resolved command line, one token per process argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// All tokens, program first.
    pub fn tokens(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}

/// Where the engine's stdin comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdinSource<'a> {
    /// Shared with the calling process (`uci batch` and `uci import` read it)
    Inherit,
    /// Text written to a pipe, then closed
    Text(&'a str),
}

/// Spawns a command and waits for it. Swappable so tests never fork.
pub trait ProcessRunner {
    fn run(&self, command: &CommandLine, stdin: StdinSource<'_>) -> Result<UciOutput>;
}

/// Production runner backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, command: &CommandLine, stdin: StdinSource<'_>) -> Result<UciOutput> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        match stdin {
            StdinSource::Inherit => cmd.stdin(Stdio::inherit()),
            StdinSource::Text(_) => cmd.stdin(Stdio::piped()),
        };

        let mut child = cmd
            .spawn()
            .map_err(|e| UciError::spawn(command.to_string(), e))?;

        // Feed stdin from a separate thread so a chatty engine cannot block on
        // a full stdout pipe while we are still writing.
        let writer = match (stdin, child.stdin.take()) {
            (StdinSource::Text(text), Some(mut pipe)) => {
                let text = text.to_owned();
                Some(std::thread::spawn(move || pipe.write_all(text.as_bytes())))
            }
            _ => None,
        };

        let output = child.wait_with_output()?;

        if let Some(writer) = writer {
            match writer.join() {
                Ok(Err(e)) if e.kind() != std::io::ErrorKind::BrokenPipe => return Err(e.into()),
                Ok(_) => {}
                Err(_) => warn!("stdin writer for `{}` panicked", command),
            }
        }

        Ok(UciOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
            success: output.status.success(),
            dry_run: false,
        })
    }
}

/// Everything the engine produced for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UciOutput {
    /// Standard output from the engine.
    pub stdout: String,
    /// Standard error from the engine.
    pub stderr: String,
    /// Exit code (None if terminated by signal).
    pub exit_code: Option<i32>,
    /// Whether the engine exited with code 0.
    pub success: bool,
    /// True when the command was only logged, not run.
    pub dry_run: bool,
}

impl UciOutput {
    /// Output of a call that was skipped in dry-run mode.
    pub fn dry_run() -> Self {
        Self {
            stdout: String::new(),
            stderr: String::new(),
            exit_code: Some(0),
            success: true,
            dry_run: true,
        }
    }

    /// First non-empty stdout line, trimmed.
    pub fn first_line(&self) -> Option<&str> {
        self.stdout.lines().map(str::trim).find(|line| !line.is_empty())
    }

    /// [`first_line`](Self::first_line), or the `"None"` sentinel.
    pub fn response(&self) -> String {
        self.first_line().unwrap_or(NO_OUTPUT).to_string()
    }

    /// Turn an unsuccessful exit into [`UciError::EngineFailed`].
    pub fn ensure_success(&self, action: Action) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(UciError::EngineFailed {
                action: action.to_string(),
                code: self.exit_code.unwrap_or(-1),
                stderr: self.stderr.trim().to_string(),
            })
        }
    }
}

/// Builds and runs engine command lines.
#[derive(Debug, Clone)]
pub struct Invoker<P = HelperPathProbe, R = SystemRunner> {
    config: UciConfig,
    probe: P,
    runner: R,
}

impl Invoker {
    /// Invoker that probes the configured helper path and spawns real processes.
    pub fn new(config: UciConfig) -> Self {
        let probe = HelperPathProbe::new(config.elevation_helper.clone());
        Self::with_parts(config, probe, SystemRunner)
    }
}

impl Default for Invoker {
    fn default() -> Self {
        Self::new(UciConfig::default())
    }
}

impl<P: PrivilegeProbe, R: ProcessRunner> Invoker<P, R> {
    pub fn with_parts(config: UciConfig, probe: P, runner: R) -> Self {
        Self {
            config,
            probe,
            runner,
        }
    }

    pub fn config(&self) -> &UciConfig {
        &self.config
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Resolve `[elevation] engine action [param]`.
    ///
    /// The probe runs on every call. An absent `param` adds no token at all.
    pub fn command_line(&self, action: Action, param: Option<&str>) -> CommandLine {
        let mut tokens = Vec::with_capacity(4);
        if self.probe.elevation_available() {
            tokens.push(self.config.elevation_command.clone());
        }
        tokens.push(self.config.engine.clone());
        tokens.push(action.to_string());
        if let Some(param) = param {
            tokens.push(param.to_string());
        }

        let program = tokens.remove(0);
        CommandLine {
            program,
            args: tokens,
        }
    }

    /// Run the engine with the caller's stdin and return everything it produced.
    pub fn run(&self, action: Action, param: Option<&str>) -> Result<UciOutput> {
        self.run_with_stdin(action, param, StdinSource::Inherit)
    }

    /// Run the engine with an explicit stdin source.
    pub fn run_with_stdin(
        &self,
        action: Action,
        param: Option<&str>,
        stdin: StdinSource<'_>,
    ) -> Result<UciOutput> {
        let command = self.command_line(action, param);
        debug!("Resolved command line: {:?}", command.tokens());

        if self.config.dry_run {
            info!("[DRY RUN] Skipped: {}", command);
            return Ok(UciOutput::dry_run());
        }

        info!("Running {}", command);
        let output = self.runner.run(&command, stdin)?;

        if !output.success {
            warn!(
                "`{}` exited with code {}: {}",
                command,
                output.exit_code.unwrap_or(-1),
                output.stderr.trim()
            );
        } else if !output.stderr.trim().is_empty() {
            warn!("`{}` wrote to stderr: {}", command, output.stderr.trim());
        }

        Ok(output)
    }

    /// Run the engine and return its first non-empty stdout line, or `"None"`.
    pub fn invoke(&self, action: Action, param: Option<&str>) -> Result<String> {
        Ok(self.run(action, param)?.response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::privilege::StaticProbe;
    use std::cell::RefCell;

    /// Records command lines and replays a canned stdout.
    struct CannedRunner {
        stdout: &'static str,
        success: bool,
        seen: RefCell<Vec<String>>,
    }

    impl CannedRunner {
        fn new(stdout: &'static str) -> Self {
            Self {
                stdout,
                success: true,
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProcessRunner for CannedRunner {
        fn run(&self, command: &CommandLine, _stdin: StdinSource<'_>) -> Result<UciOutput> {
            self.seen.borrow_mut().push(command.to_string());
            Ok(UciOutput {
                stdout: self.stdout.to_string(),
                stderr: if self.success {
                    String::new()
                } else {
                    "uci: Entry not found".to_string()
                },
                exit_code: Some(if self.success { 0 } else { 1 }),
                success: self.success,
                dry_run: false,
            })
        }
    }

    fn invoker(elevated: bool, runner: CannedRunner) -> Invoker<StaticProbe, CannedRunner> {
        Invoker::with_parts(UciConfig::default(), StaticProbe(elevated), runner)
    }

    #[test]
    fn test_command_line_shapes() {
        let plain = invoker(false, CannedRunner::new(""));
        assert_eq!(plain.command_line(Action::Batch, None).tokens(), vec!["uci", "batch"]);
        assert_eq!(
            plain.command_line(Action::Get, Some("network.lan")).tokens(),
            vec!["uci", "get", "network.lan"]
        );

        let elevated = invoker(true, CannedRunner::new(""));
        assert_eq!(
            elevated.command_line(Action::Commit, None).tokens(),
            vec!["sudo", "uci", "commit"]
        );
        assert_eq!(
            elevated.command_line(Action::Add, Some("network interface")).tokens(),
            vec!["sudo", "uci", "add", "network interface"]
        );
    }

    #[test]
    fn test_empty_param_is_still_passed() {
        let plain = invoker(false, CannedRunner::new(""));
        assert_eq!(plain.command_line(Action::Export, Some("")).args, vec!["export", ""]);
    }

    #[test]
    fn test_invoke_returns_first_trimmed_line() {
        let inv = invoker(false, CannedRunner::new("  192.168.1.1  \n10.0.0.1\n"));
        assert_eq!(inv.invoke(Action::Get, Some("network.lan.ipaddr")).unwrap(), "192.168.1.1");
    }

    #[test]
    fn test_invoke_skips_blank_lines() {
        let inv = invoker(false, CannedRunner::new("\n   \nlan\n"));
        assert_eq!(inv.invoke(Action::Show, None).unwrap(), "lan");
    }

    #[test]
    fn test_invoke_sentinel_on_no_output() {
        let inv = invoker(false, CannedRunner::new(""));
        assert_eq!(inv.invoke(Action::Changes, None).unwrap(), NO_OUTPUT);

        let inv = invoker(false, CannedRunner::new(" \n\t\n"));
        assert_eq!(inv.invoke(Action::Changes, None).unwrap(), "None");
    }

    #[test]
    fn test_engine_failure_is_swallowed() {
        let mut runner = CannedRunner::new("");
        runner.success = false;
        let inv = invoker(false, runner);

        let value = inv.invoke(Action::Get, Some("network.nope")).unwrap();
        assert_eq!(value, NO_OUTPUT);

        let output = inv.run(Action::Get, Some("network.nope")).unwrap();
        let err = output.ensure_success(Action::Get).unwrap_err();
        assert!(err.to_string().contains("Entry not found"));
    }

    #[test]
    fn test_dry_run_does_not_spawn() {
        let config = UciConfig {
            dry_run: true,
            ..UciConfig::default()
        };
        let inv = Invoker::with_parts(config, StaticProbe(true), CannedRunner::new("ignored"));
        let output = inv.run(Action::Commit, Some("network")).unwrap();
        assert!(output.dry_run);
        assert!(output.success);
        assert_eq!(output.response(), NO_OUTPUT);
        assert!(inv.runner().seen.borrow().is_empty());
    }

    #[test]
    fn test_probe_consulted_per_call() {
        struct Toggle(RefCell<bool>);
        impl PrivilegeProbe for Toggle {
            fn elevation_available(&self) -> bool {
                let current = *self.0.borrow();
                *self.0.borrow_mut() = !current;
                current
            }
        }

        let inv = Invoker::with_parts(
            UciConfig::default(),
            Toggle(RefCell::new(true)),
            CannedRunner::new(""),
        );
        inv.run(Action::Commit, None).unwrap();
        inv.run(Action::Commit, None).unwrap();
        assert_eq!(
            *inv.runner().seen.borrow(),
            vec!["sudo uci commit".to_string(), "uci commit".to_string()]
        );
    }

    #[test]
    fn test_spawn_failure_is_an_error() {
        let config = UciConfig {
            engine: "/nonexistent/ucitool-test/uci".to_string(),
            ..UciConfig::default()
        };
        let inv = Invoker::with_parts(config, StaticProbe(false), SystemRunner);
        let err = inv.invoke(Action::Show, None).unwrap_err();
        assert!(matches!(err, UciError::Spawn { .. }));
    }
}
