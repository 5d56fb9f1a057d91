//! System command runner
//!
//! Runs external tools with `std::process::Command`, capturing stdout and
//! stderr and optionally feeding stdin.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutput, CommandRunner, CommandSpec};
use crate::error::{WeaveError, WeaveResult};

/// `CommandRunner` backed by real processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> WeaveResult<CommandOutput> {
        let spawn_err = |source| WeaveError::CommandSpawn {
            program: spec.program.clone(),
            source,
        };

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if spec.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });
        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(spawn_err)?;

        // Fed from a thread so a chatty child cannot fill its stdout pipe
        // while we block on stdin. A child that never reads stdin closes the
        // pipe early; its exit status is what gets reported.
        let feeder = match (&spec.stdin, child.stdin.take()) {
            (Some(input), Some(mut stdin)) => {
                let input = input.clone();
                Some(std::thread::spawn(move || {
                    let _ = stdin.write_all(&input);
                }))
            }
            _ => None,
        };

        let output = child.wait_with_output().map_err(spawn_err)?;
        if let Some(handle) = feeder {
            let _ = handle.join();
        }
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn captures_stdout_and_exit_code() {
        let spec = CommandSpec::new("sh").arg("-c").arg("echo hello; exit 3");
        let out = SystemCommandRunner.run(&spec).unwrap();
        assert_eq!(out.code, Some(3));
        assert_eq!(out.stdout, "hello\n");
    }

    #[test]
    fn feeds_stdin() {
        let spec = CommandSpec::new("cat").stdin("piped text");
        let out = SystemCommandRunner.run(&spec).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "piped text");
    }

    #[test]
    fn runs_in_working_directory() {
        let dir = tempdir().unwrap();
        let spec = CommandSpec::new("pwd").current_dir(dir.path());
        let out = SystemCommandRunner.run(&spec).unwrap();
        let reported = std::path::PathBuf::from(out.stdout.trim());
        assert_eq!(
            reported.canonicalize().unwrap(),
            dir.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let spec = CommandSpec::new("promptweave-no-such-program");
        assert!(matches!(
            SystemCommandRunner.run(&spec),
            Err(WeaveError::CommandSpawn { .. })
        ));
    }
}
