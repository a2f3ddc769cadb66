//! Best-effort git repository initialization
//!
//! Runs `git init`, `git add .` and an initial commit inside a freshly
//! scaffolded project. Failure is expected in some environments (no git on
//! PATH, no `user.name` configured) and is reported only through the returned
//! [`Result`]; callers in the scaffold path discard it.

use crate::INITIAL_COMMIT_MESSAGE;
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RepoInitError {
    #[error("Failed to run {step}: {source}")]
    Spawn {
        step: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("{step} exited with status {code:?}")]
    Failed {
        step: &'static str,
        code: Option<i32>,
    },
}

/// Runs the init / stage / commit sequence with a configurable git binary
#[derive(Debug, Clone)]
pub struct RepoInitializer {
    program: OsString,
}

impl Default for RepoInitializer {
    fn default() -> Self {
        Self::new("git")
    }
}

impl RepoInitializer {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Initialize a repository in `repo_dir` and commit everything in it
    ///
    /// Steps run in order and stop at the first failure. Output of every step
    /// is discarded.
    pub fn init_repository(&self, repo_dir: &Path) -> Result<(), RepoInitError> {
        self.run(repo_dir, "git init", &["init"])?;
        self.run(repo_dir, "git add", &["add", "."])?;
        self.run(
            repo_dir,
            "git commit",
            &["commit", "-m", INITIAL_COMMIT_MESSAGE],
        )?;
        Ok(())
    }

    fn run(&self, repo_dir: &Path, step: &'static str, args: &[&str]) -> Result<(), RepoInitError> {
        let status = Command::new(&self.program)
            .args(args)
            .current_dir(repo_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| RepoInitError::Spawn { step, source })?;

        if !status.success() {
            return Err(RepoInitError::Failed {
                step,
                code: status.code(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_spawn_error() {
        let dir = tempfile::tempdir().unwrap();
        let initializer = RepoInitializer::new("textuv-definitely-not-a-real-git");

        let err = initializer.init_repository(dir.path()).unwrap_err();
        assert!(matches!(err, RepoInitError::Spawn { step: "git init", .. }));
        assert!(!dir.path().join(".git").exists());
    }

    #[test]
    fn test_failed_step_reports_status() {
        let err = RepoInitError::Failed {
            step: "git commit",
            code: Some(128),
        };
        assert_eq!(err.to_string(), "git commit exited with status Some(128)");
    }
}
