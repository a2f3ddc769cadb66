//! Scaffold orchestration
//!
//! Resolves the target directory, refuses non-empty targets before anything is
//! written, writes the rendered files and finally runs best-effort git
//! initialization. A write failure part-way through is returned as-is; files
//! already written are left in place.

use crate::error::{Result, ScaffoldError};
use crate::git::RepoInitializer;
use crate::options::ScaffoldOptions;
use crate::templates::{self, RenderedFile};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Outcome of a successful scaffold
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// Absolute project directory
    pub target: PathBuf,
    /// Written files, relative to `target`, in write order
    pub files: Vec<PathBuf>,
    /// Shell commands to get the new project running
    pub next_steps: Vec<String>,
}

/// Scaffold a project relative to the current directory using `git` from PATH
pub fn scaffold(options: &ScaffoldOptions) -> Result<ScaffoldReport> {
    let cwd = std::env::current_dir().map_err(ScaffoldError::CurrentDir)?;
    scaffold_in(options, &cwd, &RepoInitializer::default())
}

/// Scaffold a project with an explicit base directory and git initializer
pub fn scaffold_in(
    options: &ScaffoldOptions,
    base_dir: &Path,
    repo: &RepoInitializer,
) -> Result<ScaffoldReport> {
    let target = resolve_target(options.project_name(), base_dir);

    ensure_target_available(&target)?;

    fs::create_dir_all(&target).map_err(|source| ScaffoldError::CreateDir {
        path: target.clone(),
        source,
    })?;

    let written = write_files(&target, &templates::render_files(options))?;

    if options.init_git() {
        // Best-effort: the outcome never affects the scaffold result
        let _ = repo.init_repository(&target);
    }

    Ok(ScaffoldReport {
        next_steps: next_steps(options, &target),
        target,
        files: written,
    })
}

/// Resolve the project name as a path against `base_dir`
///
/// Absolute names are used as-is. `.` and `..` components are folded
/// lexically; symlinks are not followed.
pub fn resolve_target(project_name: &str, base_dir: &Path) -> PathBuf {
    let joined = base_dir.join(project_name);

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

/// Fail with [`ScaffoldError::TargetExists`] unless `target` is missing or an
/// empty directory
///
/// An existing non-directory counts as occupied.
pub fn ensure_target_available(target: &Path) -> Result<()> {
    let metadata = match fs::metadata(target) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(source) => {
            return Err(ScaffoldError::Inspect {
                path: target.to_path_buf(),
                source,
            })
        }
    };

    if !metadata.is_dir() {
        return Err(ScaffoldError::TargetExists {
            path: target.to_path_buf(),
        });
    }

    let mut entries = fs::read_dir(target).map_err(|source| ScaffoldError::Inspect {
        path: target.to_path_buf(),
        source,
    })?;

    if entries.next().is_some() {
        return Err(ScaffoldError::TargetExists {
            path: target.to_path_buf(),
        });
    }

    Ok(())
}

/// Write `files` under `target` in order, returning their relative paths
///
/// Stops at the first failure. Files written before it stay on disk.
fn write_files(target: &Path, files: &[RenderedFile]) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        write_file(target, file)?;
        written.push(file.path.clone());
    }
    Ok(written)
}

fn write_file(target: &Path, file: &RenderedFile) -> Result<()> {
    let path = target.join(&file.path);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&path, &file.contents).map_err(|source| ScaffoldError::WriteFile { path, source })
}

/// Commands to run after scaffolding, starting with `cd` into the project
pub fn next_steps(options: &ScaffoldOptions, target: &Path) -> Vec<String> {
    let dir_name = target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.display().to_string());

    vec![
        format!("cd {}", dir_name),
        "uv venv".to_string(),
        "uv pip install -e .".to_string(),
        "uv pip install -e \".[dev]\"".to_string(),
        format!("uv run textual run --dev src/{}/app.py", options.package_name()),
    ]
}
