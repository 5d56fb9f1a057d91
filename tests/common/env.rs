//! Test environment for isolated promptweave runs.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as one JSON document
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout).unwrap_or_else(|e| {
            panic!("stdout is not JSON ({}):\n{}", e, self.stdout)
        })
    }

    /// Assert success, showing both streams otherwise
    pub fn assert_success(&self) -> &Self {
        assert!(
            self.success,
            "command failed with {}\nstdout:\n{}\nstderr:\n{}",
            self.exit_code, self.stdout, self.stderr
        );
        self
    }
}

/// Isolated project and home directories
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project, no workspace
    pub fn new() -> Self {
        Self {
            project_root: tempfile::tempdir().expect("project tempdir"),
            home_dir: tempfile::tempdir().expect("home tempdir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_promptweave")),
        }
    }

    /// Sample project with an initialized workspace
    pub fn initialized() -> Self {
        let env = Self::new();
        super::fixtures::write_sample_project(&env);
        env.run(&["init"]).assert_success();
        env
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn workspace_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(".promptweave").join(relative)
    }

    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.project_path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dirs");
        }
        std::fs::write(&path, content).expect("write project file");
    }

    pub fn read_file(&self, relative: &str) -> String {
        std::fs::read_to_string(self.project_path(relative))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", relative, e))
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.project_root.path(), args)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        let output = self.command(cwd, args).output().expect("run promptweave");
        to_result(output)
    }

    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(self.project_root.path(), args);
        for (key, value) in vars {
            cmd.env(key, value);
        }
        to_result(cmd.output().expect("run promptweave"))
    }

    /// Run with `input` on stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(self.project_root.path(), args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn promptweave");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("write stdin");
        to_result(child.wait_with_output().expect("wait for promptweave"))
    }

    fn command(&self, cwd: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("PROMPTWEAVE_TEST_HOME", self.home_dir.path())
            .env("NO_COLOR", "1")
            .env("LC_ALL", "C")
            .env_remove("PROMPTWEAVE_VERBOSITY")
            .env_remove("PROMPTWEAVE_OUTPUT_DIR")
            .env_remove("PROMPTWEAVE_GENERATE_CMD")
            .env_remove("PROMPTWEAVE_APPLY_CMD");
        cmd
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
