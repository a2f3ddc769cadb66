//! `pyproject.toml` - the uv/hatchling project manifest

use crate::options::ScaffoldOptions;

/// Development tooling added in front of the fixed dev dependencies
pub const DEVTOOLS_DEPENDENCY: &str = "textual-dev>=1.2.0";

/// Test framework, formatter and linter, in this order
pub const FIXED_DEV_DEPENDENCIES: &[&str] = &["pytest>=7.0.0", "black>=23.0.0", "ruff>=0.1.0"];

/// Ordered dev dependency list; devtools, when requested, comes first
pub fn dev_dependencies(options: &ScaffoldOptions) -> Vec<&'static str> {
    let mut deps = Vec::with_capacity(FIXED_DEV_DEPENDENCIES.len() + 1);
    if options.include_devtools() {
        deps.push(DEVTOOLS_DEPENDENCY);
    }
    deps.extend_from_slice(FIXED_DEV_DEPENDENCIES);
    deps
}

pub fn render_pyproject(options: &ScaffoldOptions) -> String {
    let dev_list = dev_dependencies(options)
        .iter()
        .map(|dep| format!("\"{}\"", dep))
        .collect::<Vec<_>>()
        .join(",\n    ");

    format!(
        r#"[project]
name = "{project}"
version = "0.1.0"
description = "A Textual TUI application"
readme = "README.md"
requires-python = ">=3.8"
dependencies = [
    "textual{textual_version}",
]

[project.optional-dependencies]
dev = [
    {dev_list}
]

[project.scripts]
{script} = "{package}.app:main"

[build-system]
requires = ["hatchling"]
build-backend = "hatchling.build"

[tool.ruff]
line-length = 88
select = ["E", "F", "I"]

[tool.black]
line-length = 88
"#,
        project = options.project_name(),
        textual_version = options.textual_version(),
        dev_list = dev_list,
        script = options.script_name(),
        package = options.package_name(),
    )
}
