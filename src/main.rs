mod commands;

use std::path::PathBuf;

use anyhow::Result;
use byzcal_core::OutputFormat;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "byzcal")]
#[command(about = "Turn monthly calendar sheets into text digests and HTML pages")]
struct Cli {
    /// Directory that relative input paths and output directories resolve against
    /// (defaults to input_dir from config, then the executable's directory)
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a plain-text digest of a sheet (e.g. january_2026.csv)
    Text { file: PathBuf },

    /// Write a styled HTML page for a sheet
    Html { file: PathBuf },

    /// Write both the text digest and the HTML page
    All { file: PathBuf },

    /// Show configuration paths and effective settings
    Config {
        /// Create a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Text { file } => {
            commands::render::run(cli.base_dir, &file, &[OutputFormat::Text])
        }
        Commands::Html { file } => {
            commands::render::run(cli.base_dir, &file, &[OutputFormat::Html])
        }
        Commands::All { file } => commands::render::run(cli.base_dir, &file, &OutputFormat::ALL),
        Commands::Config { init } => commands::config::run(cli.base_dir, init),
    }
}
