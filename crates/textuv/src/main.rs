//! textuv CLI - Scaffold a Textual + uv application

use anyhow::Result;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use textuv_core::{
    derive_package_name, output, scaffold, ScaffoldError, ScaffoldOptions,
    DEFAULT_TEXTUAL_VERSION, TEXTUAL_VERSION_ENV,
};

#[derive(Parser, Debug)]
#[command(name = "textuv")]
#[command(about = "textuv: Scaffold a Textual + uv application.")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Bare `textuv <PROJECT_NAME>` behaves like `textuv new <PROJECT_NAME>`
    #[command(flatten)]
    pub new: NewArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new Textual + uv application scaffold
    New(NewArgs),
}

#[derive(Args, Debug, Clone)]
pub struct NewArgs {
    /// Project directory and package name base
    pub project_name: Option<String>,

    /// Python package name (default: derived from project name)
    #[arg(long = "package-name")]
    pub package_name: Option<String>,

    /// Version spec for textual (e.g., ">=0.41.0")
    #[arg(
        long = "textual-version",
        env = TEXTUAL_VERSION_ENV,
        default_value = DEFAULT_TEXTUAL_VERSION,
        allow_hyphen_values = true
    )]
    pub textual_version: String,

    /// Initialize a git repository (default)
    #[arg(
        long = "init-git",
        action = ArgAction::SetTrue,
        overrides_with_all = ["init_git", "no_init_git"]
    )]
    pub init_git: bool,

    /// Do not initialize a git repository
    #[arg(
        long = "no-init-git",
        action = ArgAction::SetTrue,
        overrides_with_all = ["init_git", "no_init_git"]
    )]
    pub no_init_git: bool,

    /// Include textual-dev in dev dependencies (default)
    #[arg(
        long = "devtools",
        action = ArgAction::SetTrue,
        overrides_with_all = ["devtools", "no_devtools"]
    )]
    pub devtools: bool,

    /// Leave textual-dev out of dev dependencies
    #[arg(
        long = "no-devtools",
        action = ArgAction::SetTrue,
        overrides_with_all = ["devtools", "no_devtools"]
    )]
    pub no_devtools: bool,
}

impl NewArgs {
    // Both flags of a pair override the pair, so at most one side is set
    fn init_git_enabled(&self) -> bool {
        self.init_git || !self.no_init_git
    }

    fn devtools_enabled(&self) -> bool {
        self.devtools || !self.no_devtools
    }

    fn to_options(&self, project_name: &str) -> ScaffoldOptions {
        let mut builder = ScaffoldOptions::builder(project_name)
            .textual_version(self.textual_version.clone())
            .init_git(self.init_git_enabled())
            .include_devtools(self.devtools_enabled());
        if let Some(package_name) = &self.package_name {
            builder = builder.package_name(package_name.clone());
        }
        builder.build()
    }

    #[cfg(feature = "tui")]
    fn prompt_defaults(&self) -> textuv_core::tui::PromptDefaults {
        textuv_core::tui::PromptDefaults {
            package_name: self.package_name.clone(),
            textual_version: self.textual_version.clone(),
            init_git: self.init_git_enabled(),
            include_devtools: self.devtools_enabled(),
        }
    }
}

fn main() {
    install_terminal_guards();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::New(args)) => match args.project_name.clone() {
            Some(name) => create(&args, &name),
            None => Cli::command()
                .error(
                    clap::error::ErrorKind::MissingRequiredArgument,
                    "the following required arguments were not provided: <PROJECT_NAME>",
                )
                .exit(),
        },
        None => match cli.new.project_name.clone() {
            Some(name) => create(&cli.new, &name),
            None => no_project_name(&cli.new),
        },
    };

    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        match err.downcast_ref::<ScaffoldError>() {
            Some(ScaffoldError::TargetExists { path }) => output::print_target_exists(path),
            _ => eprintln!("Error: {:?}", err),
        }
        std::process::exit(1);
    }
}

/// Scaffold non-interactively from parsed arguments
fn create(args: &NewArgs, project_name: &str) -> Result<()> {
    let options = args.to_options(project_name);

    if let Some(requested) = &args.package_name {
        if derive_package_name(requested) != *requested {
            output::print_warning(&output::package_name_warning(
                requested,
                options.package_name(),
            ));
        }
    }

    let report = scaffold::scaffold(&options)?;
    output::print_created(&report);
    Ok(())
}

#[cfg(feature = "tui")]
fn no_project_name(args: &NewArgs) -> Result<()> {
    if textuv_core::tui::is_interactive() {
        return textuv_core::tui::run(&args.prompt_defaults());
    }
    print_help()
}

#[cfg(not(feature = "tui"))]
fn no_project_name(_args: &NewArgs) -> Result<()> {
    print_help()
}

fn print_help() -> Result<()> {
    Cli::command().print_help()?;
    println!();
    Ok(())
}

/// Restore the cursor if a prompt is interrupted by a panic or Ctrl+C
fn install_terminal_guards() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_project_name() {
        let cli = parse(&["textuv", "my-app"]);

        assert!(cli.command.is_none());
        assert_eq!(cli.new.project_name.as_deref(), Some("my-app"));
        assert!(cli.new.init_git_enabled());
        assert!(cli.new.devtools_enabled());
    }

    #[test]
    fn test_new_subcommand_with_flags() {
        let cli = parse(&[
            "textuv",
            "new",
            "my-app",
            "--package-name",
            "core",
            "--no-init-git",
            "--no-devtools",
            "--textual-version",
            "==0.80.0",
        ]);

        let Some(Command::New(args)) = cli.command else {
            panic!("expected new subcommand");
        };
        let options = args.to_options("my-app");
        assert_eq!(options.package_name(), "core");
        assert_eq!(options.script_name(), "my-app");
        assert_eq!(options.textual_version(), "==0.80.0");
        assert!(!options.init_git());
        assert!(!options.include_devtools());
    }

    #[test]
    fn test_last_toggle_wins() {
        let cli = parse(&["textuv", "demo", "--no-devtools", "--devtools"]);
        assert!(cli.new.devtools_enabled());

        let cli = parse(&["textuv", "demo", "--init-git", "--no-init-git"]);
        assert!(!cli.new.init_git_enabled());
    }

    #[test]
    fn test_repeated_toggles_are_accepted() {
        let cli = parse(&["textuv", "demo", "--devtools", "--devtools"]);
        assert!(cli.new.devtools_enabled());

        let cli = parse(&["textuv", "demo", "--no-init-git", "--no-init-git"]);
        assert!(!cli.new.init_git_enabled());

        let cli = parse(&["textuv", "demo", "--no-devtools", "--devtools", "--no-devtools"]);
        assert!(!cli.new.devtools_enabled());
    }

    #[test]
    fn test_no_arguments() {
        let cli = parse(&["textuv"]);
        assert!(cli.command.is_none());
        assert!(cli.new.project_name.is_none());
    }
}
