//! Command runner port
//!
//! External generator and applier tools are opaque programs: arguments and
//! optional stdin go in, exit code plus captured output come back.

use std::path::PathBuf;

use crate::error::WeaveResult;

/// A command to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub stdin: Option<Vec<u8>>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            stdin: None,
        }
    }

    /// Build from an argv list, substituting `{key}` placeholders.
    ///
    /// Returns `None` for an empty argv.
    pub fn from_template(argv: &[String], vars: &[(&str, &str)]) -> Option<Self> {
        let (program, rest) = argv.split_first()?;
        let substitute = |s: &String| {
            vars.iter().fold(s.clone(), |acc, (key, value)| {
                acc.replace(&format!("{{{}}}", key), value)
            })
        };

        Some(Self {
            program: substitute(program),
            args: rest.iter().map(substitute).collect(),
            cwd: None,
            stdin: None,
        })
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn stdin(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(input.into());
        self
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// stderr if it has content, otherwise stdout
    pub fn details(&self) -> &str {
        if self.stderr.trim().is_empty() {
            self.stdout.trim()
        } else {
            self.stderr.trim()
        }
    }
}

/// Executes external commands
pub trait CommandRunner {
    /// Run to completion. Only failing to start is an error; a non-zero
    /// exit is reported through `CommandOutput::code`.
    fn run(&self, spec: &CommandSpec) -> WeaveResult<CommandOutput>;
}
