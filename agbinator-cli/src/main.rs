//! agbinator CLI
//!
//! Command-line interface for identifying the sound driver of Game Boy
//! Advance ROMs.

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

use agbinator_lib::Settings;

mod commands;
mod error;

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "agbinator")]
#[command(about = "Identify the sound driver of Game Boy Advance ROMs", long_about = None)]
#[command(version)]
struct Cli {
    /// More output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output options shared by the scanning commands.
#[derive(Args, Clone, Copy)]
struct OutputArgs {
    /// Print JSON to stdout instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Identify the sound driver of ROM files or directories of ROMs
    Identify {
        /// ROM files or directories
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Quick mode: stop at the driver name, skip song and function scans
        #[arg(long)]
        quick: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the songs and entry points of a GAX Sound Engine ROM
    Gax {
        /// ROM file
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the MusyX entry points of a ROM
    Musyx {
        /// ROM file
        file: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List all recognizers in priority order
    List,

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Print the effective settings
    Show,
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    if let Err(e) = run(cli.command) {
        log::error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), CliError> {
    let settings = Settings::load()?;

    match command {
        Commands::Identify {
            paths,
            quick,
            output,
        } => commands::identify::run_identify(&settings, &paths, quick, output.json),
        Commands::Gax { file, output } => commands::gax::run_gax(&file, output.json),
        Commands::Musyx { file, output } => commands::musyx::run_musyx(&file, output.json),
        Commands::List => commands::list::run_list(&settings),
        Commands::Config { action } => match action {
            ConfigAction::Path => {
                commands::config::run_config_path();
                Ok(())
            }
            ConfigAction::Show => commands::config::run_config_show(&settings),
        },
    }
}

/// Message-only logger on stdout. `RUST_LOG` overrides the flags.
fn init_logger(verbose: u8, quiet: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}
