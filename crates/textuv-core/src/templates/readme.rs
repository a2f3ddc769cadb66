//! `README.md`

use crate::options::ScaffoldOptions;

pub fn render_readme(options: &ScaffoldOptions) -> String {
    format!(
        r#"# {project}

A Textual TUI application scaffolded by textuv.

## Setup

```bash
uv venv
uv pip install -e .
uv pip install -e ".[dev]"
```

## Run

```bash
uv run python -m {package}.app
# or
uv run {script}
# dev mode (hot reload)
uv run textual run --dev src/{package}/app.py
```

## Lint & Format

```bash
uv run ruff check src/
uv run black src/
uv run ruff check --fix src/
```
"#,
        project = options.project_name(),
        package = options.package_name(),
        script = options.script_name(),
    )
}
