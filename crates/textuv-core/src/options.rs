//! Scaffold options
//!
//! [`ScaffoldOptions`] is built once per invocation and is the only input to
//! the renderers and the orchestrator. Fields are private so the derived names
//! cannot drift from the project name after construction.

use crate::naming::{
    derive_package_name, derive_script_name, is_valid_package_name, is_valid_script_name,
};
use crate::DEFAULT_TEXTUAL_VERSION;

/// Immutable inputs for one scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOptions {
    project_name: String,
    package_name: String,
    script_name: String,
    textual_version: String,
    init_git: bool,
    include_devtools: bool,
}

impl ScaffoldOptions {
    /// Start building options for a raw project name
    pub fn builder(project_name: impl Into<String>) -> ScaffoldOptionsBuilder {
        ScaffoldOptionsBuilder {
            project_name: project_name.into(),
            package_name: None,
            textual_version: None,
            init_git: true,
            include_devtools: true,
        }
    }

    /// Raw project name, also the target directory
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Python package name, `[a-z_][a-z0-9_]*`
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Console script name, `[a-z0-9][a-z0-9-]*`
    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    /// Version constraint appended to the `textual` dependency, verbatim
    pub fn textual_version(&self) -> &str {
        &self.textual_version
    }

    pub fn init_git(&self) -> bool {
        self.init_git
    }

    pub fn include_devtools(&self) -> bool {
        self.include_devtools
    }
}

/// Builder for [`ScaffoldOptions`]
#[derive(Debug, Clone)]
pub struct ScaffoldOptionsBuilder {
    project_name: String,
    package_name: Option<String>,
    textual_version: Option<String>,
    init_git: bool,
    include_devtools: bool,
}

impl ScaffoldOptionsBuilder {
    /// Override the derived package name
    ///
    /// The override is normalized like a project name, so `"My-Pkg"` is
    /// stored as `"my_pkg"`.
    pub fn package_name(mut self, package_name: impl Into<String>) -> Self {
        self.package_name = Some(package_name.into());
        self
    }

    /// Version constraint for `textual`, e.g. `">=0.41.0"`
    pub fn textual_version(mut self, version: impl Into<String>) -> Self {
        self.textual_version = Some(version.into());
        self
    }

    pub fn init_git(mut self, init_git: bool) -> Self {
        self.init_git = init_git;
        self
    }

    pub fn include_devtools(mut self, include_devtools: bool) -> Self {
        self.include_devtools = include_devtools;
        self
    }

    pub fn build(self) -> ScaffoldOptions {
        let package_name = match &self.package_name {
            Some(name) => derive_package_name(name),
            None => derive_package_name(&self.project_name),
        };
        let script_name = derive_script_name(&self.project_name);
        debug_assert!(is_valid_package_name(&package_name), "{:?}", package_name);
        debug_assert!(is_valid_script_name(&script_name), "{:?}", script_name);

        ScaffoldOptions {
            package_name,
            script_name,
            textual_version: self
                .textual_version
                .unwrap_or_else(|| DEFAULT_TEXTUAL_VERSION.to_string()),
            project_name: self.project_name,
            init_git: self.init_git,
            include_devtools: self.include_devtools,
        }
    }
}
