pub mod config;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use byzcal_core::config::ByzcalConfig;
use byzcal_core::{CalendarError, OutputFormat};

/// Loaded configuration plus the directory everything resolves against.
pub struct Workspace {
    pub base_dir: PathBuf,
    pub config: ByzcalConfig,
}

impl Workspace {
    pub fn load(base_dir: Option<PathBuf>) -> Result<Self> {
        let config = ByzcalConfig::load()?;
        Self::new(base_dir, config)
    }

    /// Base directory precedence: `--base-dir`, then `input_dir` from config,
    /// then the directory holding the executable.
    pub fn new(base_dir: Option<PathBuf>, config: ByzcalConfig) -> Result<Self> {
        let base_dir = match base_dir.or_else(|| config.resolved_input_dir()) {
            Some(dir) => dir,
            None => executable_dir()?,
        };

        Ok(Workspace { base_dir, config })
    }

    /// Resolve an input sheet, failing if it does not exist.
    pub fn resolve_input(&self, file: &Path) -> Result<PathBuf> {
        let path = self.base_dir.join(file);
        if !path.is_file() {
            return Err(CalendarError::InputNotFound(file.display().to_string()).into());
        }
        Ok(path)
    }

    pub fn output_dir(&self, format: OutputFormat) -> PathBuf {
        self.config.output_dir(&self.base_dir, format)
    }

    pub fn output_path(&self, format: OutputFormat, input: &Path) -> PathBuf {
        self.output_dir(format).join(format.output_file_name(input))
    }

    /// Path as shown to the user: relative to the base directory when possible.
    pub fn display_path<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.base_dir).unwrap_or(path)
    }
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not locate the byzcal executable")?;
    exe.parent()
        .map(Path::to_path_buf)
        .context("Executable path has no parent directory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_flag_wins_over_config() {
        let config = ByzcalConfig {
            input_dir: Some(PathBuf::from("/from/config")),
            ..ByzcalConfig::default()
        };

        let ws = Workspace::new(Some(PathBuf::from("/from/flag")), config).unwrap();
        assert_eq!(ws.base_dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_base_dir_from_config() {
        let config = ByzcalConfig {
            input_dir: Some(PathBuf::from("/from/config")),
            ..ByzcalConfig::default()
        };

        let ws = Workspace::new(None, config).unwrap();
        assert_eq!(ws.base_dir, PathBuf::from("/from/config"));
    }

    #[test]
    fn test_base_dir_defaults_to_executable_dir() {
        let ws = Workspace::new(None, ByzcalConfig::default()).unwrap();
        let exe = std::env::current_exe().unwrap();
        assert_eq!(Some(ws.base_dir.as_path()), exe.parent());
    }

    #[test]
    fn test_resolve_input_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::new(Some(dir.path().to_path_buf()), ByzcalConfig::default()).unwrap();

        let err = ws.resolve_input(Path::new("march_2026.csv")).unwrap_err();
        assert_eq!(err.to_string(), "File march_2026.csv not found");
    }

    #[test]
    fn test_resolve_input_relative_and_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let sheet = dir.path().join("march_2026.csv");
        std::fs::write(&sheet, "Date,Commemorations\n").unwrap();
        let ws = Workspace::new(Some(dir.path().to_path_buf()), ByzcalConfig::default()).unwrap();

        assert_eq!(ws.resolve_input(Path::new("march_2026.csv")).unwrap(), sheet);
        assert_eq!(ws.resolve_input(&sheet).unwrap(), sheet);
    }

    #[test]
    fn test_output_path_and_display() {
        let ws = Workspace::new(Some(PathBuf::from("/cal")), ByzcalConfig::default()).unwrap();
        let out = ws.output_path(OutputFormat::Text, Path::new("/cal/january_2026.csv"));

        assert_eq!(out, PathBuf::from("/cal/txt/january_2026.txt"));
        assert_eq!(ws.display_path(&out), Path::new("txt/january_2026.txt"));
    }
}
