use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};

use pleasing::cli::{run_version_workflow, VersionWorkflowArgs};
use pleasing::config;
use pleasing::domain::VersionOptions;
use pleasing::logging;
use pleasing::ui;

#[derive(Parser)]
#[command(
    name = "pleasing",
    version,
    about = "Keep the version number of a package in sync across its files"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Log each file as it is processed")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Update the version number listed in all files of a package
    Version(VersionArgs),
}

#[derive(clap::Args)]
#[command(group(ArgGroup::new("bump").args(["major", "minor", "patch"]).multiple(false)))]
struct VersionArgs {
    #[arg(help = "The path in which to find files to version [default: current directory]")]
    src: Option<PathBuf>,

    #[arg(long, help = "Increment the major version")]
    major: bool,

    #[arg(long, help = "Increment the minor version")]
    minor: bool,

    #[arg(long, help = "Increment the patch version")]
    patch: bool,

    #[arg(long, value_name = "TAG", help = "Build tag to append to the current version number")]
    build: Option<String>,

    #[arg(
        long,
        value_name = "N",
        default_value_t = 1,
        help = "The amount to increment the given version by"
    )]
    increment: u64,

    #[arg(long, value_name = "VERSION", help = "Set the version explicitly")]
    set: Option<String>,

    #[arg(long, value_name = "PATH", help = "The path to the appropriate composer.json")]
    composer: Option<PathBuf>,

    #[arg(long, help = "Preview what would change without writing any file")]
    dry_run: bool,
}

impl From<VersionArgs> for VersionWorkflowArgs {
    fn from(args: VersionArgs) -> Self {
        VersionWorkflowArgs {
            src: args.src,
            composer: args.composer,
            options: VersionOptions {
                set: args.set,
                major: args.major,
                minor: args.minor,
                patch: args.patch,
                build: args.build,
                increment: args.increment,
            },
            dry_run: args.dry_run,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Version(version_args) => {
            ui::display_status("Retrieving current version number...");
            let report = match run_version_workflow(version_args.into(), &config) {
                Ok(report) => report,
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(1);
                }
            };

            if !ui::display_outcome(&report) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
