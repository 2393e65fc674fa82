//! Shared test utilities and fixtures
//!
//! Runs the real `tracee` binary in an isolated home directory so neither
//! the user's config nor their log directory is touched.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

/// A scratch home with an optional config file.
pub struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let sandbox = Self {
            dir: tempfile::tempdir().expect("tempdir"),
        };
        fs::create_dir_all(sandbox.work_dir()).expect("create work dir");
        sandbox
    }

    /// Sandbox whose config makes every iteration pause for zero time.
    pub fn instant() -> Self {
        let sandbox = Self::new();
        sandbox.write_config("[run]\ndelay_ms = 0\n");
        sandbox
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    pub fn home(&self) -> &Path {
        self.dir.path()
    }

    /// Working directory the binary is launched from.
    pub fn work_dir(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join(".tracee").join("logs").join("tracee.log")
    }

    pub fn write_config(&self, contents: &str) {
        fs::write(self.config_path(), contents).expect("write config");
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tracee"));
        cmd.env("HOME", self.dir.path())
            .env("TRACEE_CONFIG", self.config_path())
            .env_remove("TRACEE_REVISION")
            .env_remove("RUST_LOG")
            .current_dir(self.work_dir());
        cmd
    }

    pub fn run(&self) -> Output {
        self.command().output().expect("spawn tracee")
    }

    pub fn run_with_revision(&self, revision: &str) -> Output {
        self.command()
            .env("TRACEE_REVISION", revision)
            .output()
            .expect("spawn tracee")
    }
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8 stderr")
}

/// The start banner, ten func/test pairs, and the end banner.
pub fn loop_lines() -> Vec<String> {
    let mut lines = vec!["child process start".to_string()];
    for i in 0..10 {
        lines.push(format!("func is {i}"));
        lines.push(format!("test is {i}"));
    }
    lines.push("child process end".to_string());
    lines
}
