//! `Makefile` - uv task shortcuts

use crate::options::ScaffoldOptions;

/// Recipe lines must start with a tab; `\t` is spelled out for that reason.
pub fn render_makefile(options: &ScaffoldOptions) -> String {
    format!(
        ".PHONY: install dev run run-dev test lint format clean

install:
\tuv pip install -e .

dev:
\tuv pip install -e \".[dev]\"

run:
\tuv run python -m {package}.app

run-dev:
\tuv run textual run --dev src/{package}/app.py

test:
\tuv run pytest

lint:
\tuv run ruff check src/

format:
\tuv run black src/
\tuv run ruff check --fix src/

clean:
\tfind . -type d -name \"__pycache__\" -exec rm -rf {{}} +
\tfind . -type f -name \"*.pyc\" -delete
",
        package = options.package_name()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_targets_use_package() {
        let makefile = render_makefile(&ScaffoldOptions::builder("my-app").build());

        assert!(makefile.contains("run:\n\tuv run python -m my_app.app\n"));
        assert!(makefile.contains("run-dev:\n\tuv run textual run --dev src/my_app/app.py\n"));
    }

    #[test]
    fn test_clean_target() {
        let makefile = render_makefile(&ScaffoldOptions::builder("my-app").build());

        assert!(makefile
            .contains("\tfind . -type d -name \"__pycache__\" -exec rm -rf {} +\n"));
        assert!(makefile.contains("\tfind . -type f -name \"*.pyc\" -delete\n"));
    }

    #[test]
    fn test_recipes_are_tab_indented() {
        let makefile = render_makefile(&ScaffoldOptions::builder("my-app").build());

        for line in makefile.lines() {
            assert!(!line.starts_with(' '), "space-indented line: {:?}", line);
        }
        assert_eq!(makefile.lines().filter(|l| l.starts_with('\t')).count(), 10);
    }
}
