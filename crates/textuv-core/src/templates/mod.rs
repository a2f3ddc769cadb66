//! File rendering
//!
//! This module provides:
//! - One pure render function per generated file
//! - [`render_files`], the complete and ordered file set for a project
//!
//! Every renderer takes only [`ScaffoldOptions`]; nothing here touches the
//! filesystem.

pub mod app;
pub mod gitignore;
pub mod makefile;
pub mod pyproject;
pub mod readme;

use crate::options::ScaffoldOptions;
use std::path::PathBuf;

pub use app::render_app;
pub use gitignore::render_gitignore;
pub use makefile::render_makefile;
pub use pyproject::{dev_dependencies, render_pyproject};
pub use readme::render_readme;

/// A file to be written, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub contents: String,
}

impl RenderedFile {
    fn new(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            contents: contents.into(),
        }
    }
}

/// Render every file of a new project, in write order
pub fn render_files(options: &ScaffoldOptions) -> Vec<RenderedFile> {
    let package_dir = PathBuf::from("src").join(options.package_name());

    vec![
        // src package
        RenderedFile::new(package_dir.join("__init__.py"), ""),
        RenderedFile::new(package_dir.join("components").join("__init__.py"), ""),
        RenderedFile::new(package_dir.join("app.py"), render_app(options)),
        // tests
        RenderedFile::new(PathBuf::from("tests").join("__init__.py"), ""),
        // config files
        RenderedFile::new("pyproject.toml", render_pyproject(options)),
        RenderedFile::new("README.md", render_readme(options)),
        RenderedFile::new(".gitignore", render_gitignore()),
        RenderedFile::new("Makefile", render_makefile(options)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::path::Path;

    #[test]
    fn test_file_set() {
        let options = ScaffoldOptions::builder("My-App").build();
        let files = render_files(&options);

        let paths: Vec<&Path> = files.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(
            paths,
            vec![
                Path::new("src/my_app/__init__.py"),
                Path::new("src/my_app/components/__init__.py"),
                Path::new("src/my_app/app.py"),
                Path::new("tests/__init__.py"),
                Path::new("pyproject.toml"),
                Path::new("README.md"),
                Path::new(".gitignore"),
                Path::new("Makefile"),
            ]
        );
    }

    #[test]
    fn test_no_path_collisions() {
        // Package named like a top-level entry must still land under src/
        for name in ["tests", "src", "readme", "components"] {
            let options = ScaffoldOptions::builder(name).build();
            let files = render_files(&options);
            let unique: HashSet<_> = files.iter().map(|f| &f.path).collect();
            assert_eq!(unique.len(), files.len(), "collision for {}", name);
        }
    }

    #[test]
    fn test_markers_are_empty() {
        let files = render_files(&ScaffoldOptions::builder("demo").build());

        for file in files.iter().filter(|f| f.path.ends_with("__init__.py")) {
            assert!(file.contents.is_empty(), "{} not empty", file.path.display());
        }
    }
}
