//! Charm-style CLI prompts using cliclack

use crate::naming::derive_package_name;
use crate::options::ScaffoldOptions;
use crate::output;
use crate::scaffold;
use anyhow::Result;

/// Values pre-filled from command-line flags and environment
#[derive(Debug, Clone)]
pub struct PromptDefaults {
    /// Package name override, asked for when absent
    pub package_name: Option<String>,

    /// Version constraint for textual, not prompted
    pub textual_version: String,

    /// Initial answer for the git prompt
    pub init_git: bool,

    /// Initial answer for the devtools prompt
    pub include_devtools: bool,
}

/// True when both stdout and stderr are attached to a terminal
pub fn is_interactive() -> bool {
    console::Term::stdout().is_term() && console::Term::stderr().is_term()
}

/// Ask for the project name and toggles, returning finished options
pub fn prompt_options(defaults: &PromptDefaults) -> Result<ScaffoldOptions> {
    let project_name: String = cliclack::input("Project name")
        .placeholder("my-textual-app")
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Please enter a project name")
            } else {
                Ok(())
            }
        })
        .interact()?;

    let package_name = match &defaults.package_name {
        Some(name) => name.clone(),
        None => {
            let derived = derive_package_name(&project_name);
            cliclack::input("Python package name")
                .default_input(&derived)
                .placeholder(&derived)
                .interact()?
        }
    };

    let include_devtools: bool = cliclack::confirm("Include textual-dev in dev dependencies?")
        .initial_value(defaults.include_devtools)
        .interact()?;

    let init_git: bool = cliclack::confirm("Initialize a git repository?")
        .initial_value(defaults.init_git)
        .interact()?;

    let options = ScaffoldOptions::builder(project_name)
        .package_name(package_name.as_str())
        .textual_version(defaults.textual_version.clone())
        .init_git(init_git)
        .include_devtools(include_devtools)
        .build();

    if options.package_name() != package_name {
        cliclack::log::warning(output::package_name_warning(
            &package_name,
            options.package_name(),
        ))?;
    }

    Ok(options)
}

/// Run the interactive flow: prompts, scaffold, next steps
///
/// Scaffold errors are returned unprinted so the caller can map them to the
/// same messages and exit codes as the non-interactive path.
pub fn run(defaults: &PromptDefaults) -> Result<()> {
    cliclack::intro("textuv")?;

    let options = prompt_options(defaults)?;
    let report = scaffold::scaffold(&options)?;

    cliclack::log::success(output::created_message(&report.target))?;

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in report.next_steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy hacking!")?;

    Ok(())
}
