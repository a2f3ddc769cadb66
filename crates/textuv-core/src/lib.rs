//! textuv core - scaffolding for Textual + uv applications
//!
//! This library turns a free-form project name into a ready-to-run Python
//! project: a Textual app skeleton, a `pyproject.toml` for uv, a README,
//! a `.gitignore` and a Makefile, optionally committed to a fresh git
//! repository.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure functions** - name normalization ([`naming`]) and file
//!   rendering ([`templates`]), parameterized only by [`ScaffoldOptions`]
//! - **Layer 2: Orchestration** - [`scaffold`] validates the target, writes the
//!   tree and runs best-effort [`git`] initialization
//! - **Layer 3: CLI/TUI Interface** - colored console [`output`] and optional
//!   cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based interactive prompts module
//!
//! # Example Usage
//!
//! ```ignore
//! use textuv_core::{scaffold, ScaffoldOptions};
//!
//! let options = ScaffoldOptions::builder("my-app").init_git(false).build();
//! let report = scaffold::scaffold(&options)?;
//! println!("created {}", report.target.display());
//! ```

pub mod error;
pub mod git;
pub mod naming;
pub mod options;
pub mod output;
pub mod scaffold;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::{Result, ScaffoldError};
pub use naming::{derive_package_name, derive_script_name};
pub use options::{ScaffoldOptions, ScaffoldOptionsBuilder};
pub use scaffold::{scaffold, ScaffoldReport};
pub use templates::RenderedFile;

/// Default version constraint for the `textual` dependency
pub const DEFAULT_TEXTUAL_VERSION: &str = ">=0.41.0";

/// Environment variable overriding [`DEFAULT_TEXTUAL_VERSION`]
pub const TEXTUAL_VERSION_ENV: &str = "TEXTUV_TEXTUAL_VERSION";

/// Commit message used for the initial repository commit
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial Textual app template with uv";
