//! `.gitignore`

/// Build artifacts, caches and virtualenvs of a uv-managed Python project
pub const IGNORE_PATTERNS: &[&str] = &[
    "__pycache__/",
    "*.pyc",
    ".venv/",
    "dist/",
    "*.egg-info/",
    ".pytest_cache/",
    ".ruff_cache/",
    ".DS_Store",
];

pub fn render_gitignore() -> String {
    let mut content = IGNORE_PATTERNS.join("\n");
    content.push('\n');
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gitignore() {
        let content = render_gitignore();

        assert!(content.starts_with("__pycache__/\n*.pyc\n.venv/\n"));
        assert!(content.ends_with(".DS_Store\n"));
        assert_eq!(content.lines().count(), IGNORE_PATTERNS.len());
    }
}
