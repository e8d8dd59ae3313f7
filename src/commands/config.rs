use std::path::PathBuf;

use anyhow::Result;
use byzcal_core::OutputFormat;
use byzcal_core::config::ByzcalConfig;
use owo_colors::OwoColorize;

use super::Workspace;

pub fn run(base_dir: Option<PathBuf>, init: bool) -> Result<()> {
    let config_path = ByzcalConfig::config_path()?;

    if init {
        if config_path.exists() {
            println!("Config already exists at {}", config_path.display());
        } else {
            ByzcalConfig::create_default_config(&config_path)?;
            println!("{} {}", "Created".green(), config_path.display());
        }
    }

    let workspace = Workspace::load(base_dir)?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Input:      {}", workspace.base_dir.display());
    println!("  Text:       {}", workspace.output_dir(OutputFormat::Text).display());
    println!("  HTML:       {}", workspace.output_dir(OutputFormat::Html).display());

    println!();
    println!("{}", "Settings".bold());
    for line in workspace.config.to_toml()?.lines() {
        println!("  {}", line);
    }

    Ok(())
}
