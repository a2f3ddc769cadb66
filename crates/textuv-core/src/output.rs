//! Console messages
//!
//! All user-facing lines carry the `[textuv]` prefix. Success goes to stdout
//! in green, refusals to stderr in red.

use crate::scaffold::ScaffoldReport;
use colored::Colorize;
use std::path::Path;

const PREFIX: &str = "[textuv]";

pub fn created_message(target: &Path) -> String {
    format!("{} Project created at: {}", PREFIX, target.display())
}

pub fn target_exists_message(target: &Path) -> String {
    format!(
        "{} Target directory already exists and is not empty: {}",
        PREFIX,
        target.display()
    )
}

/// Warning shown when a `--package-name` override had to be normalized
pub fn package_name_warning(requested: &str, used: &str) -> String {
    format!(
        "Package name '{}' is not a valid identifier, using '{}'",
        requested, used
    )
}

/// Print the confirmation and next steps for a finished scaffold
pub fn print_created(report: &ScaffoldReport) {
    println!("{}", created_message(&report.target).green());
    println!();
    println!("Next steps:");
    for step in &report.next_steps {
        println!("  {}", step);
    }
}

pub fn print_target_exists(target: &Path) {
    eprintln!("{}", target_exists_message(target).red());
}

/// Print a non-fatal warning
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow(), message);
}
