//! lintkit CLI - ESLint, Prettier and TypeScript setup for React Native projects

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lintkit_core::{PackageManager, Preset, ReactNativePreset, SetupArgs};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lintkit")]
#[command(about = "Scaffold ESLint, Prettier and TypeScript config for React Native projects")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub init: InitArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write config files, update package.json and install the tools
    Init(InitArgs),
    /// Print a generated config file without writing anything
    Show(ShowArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Project directory containing package.json
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,

    /// Do not install the tools after updating package.json
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Package manager to install with (detected from lockfiles otherwise)
    #[arg(long = "package-manager", value_enum)]
    pub package_manager: Option<PackageManager>,
}

impl From<InitArgs> for SetupArgs {
    fn from(args: InitArgs) -> Self {
        SetupArgs {
            directory: args.directory,
            yes: args.yes,
            skip_install: args.skip_install,
            package_manager: args.package_manager,
        }
    }
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Which file to print
    #[arg(value_enum)]
    pub file: ShownFile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShownFile {
    Eslintrc,
    Prettierrc,
    Tsconfig,
    Prettierignore,
}

impl ShownFile {
    fn file_name(&self) -> &'static str {
        match self {
            ShownFile::Eslintrc => ".eslintrc.js",
            ShownFile::Prettierrc => ".prettierrc.js",
            ShownFile::Tsconfig => "tsconfig.json",
            ShownFile::Prettierignore => ".prettierignore",
        }
    }
}

fn show<P: Preset>(preset: &P, file: ShownFile) -> Result<()> {
    let config = preset
        .config_files()
        .into_iter()
        .find(|f| f.file_name == file.file_name())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "{} preset has no {}",
                preset.display_name(),
                file.file_name()
            )
        })?;
    println!("{}", config.render());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let preset = ReactNativePreset;

    match args.command {
        Some(Command::Show(show_args)) => show(&preset, show_args.file),
        Some(Command::Init(init_args)) => setup(&preset, init_args).await,
        // No subcommand provided, default to init with the top-level flags
        None => setup(&preset, args.init).await,
    }
}

async fn setup<P: Preset>(preset: &P, args: InitArgs) -> Result<()> {
    let result = lintkit_core::run(preset, args.into()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
