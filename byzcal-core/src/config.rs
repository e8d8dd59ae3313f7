//! Global byzcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};
use crate::readings::DEFAULT_BIBLE_VERSION;
use crate::render::{DEFAULT_TITLE, OutputFormat};

static DEFAULT_YEAR: &str = "2026";

fn default_text_dir() -> PathBuf {
    PathBuf::from(OutputFormat::Text.default_dir())
}

fn default_html_dir() -> PathBuf {
    PathBuf::from(OutputFormat::Html.default_dir())
}

fn default_year() -> String {
    DEFAULT_YEAR.to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_bible_version() -> String {
    DEFAULT_BIBLE_VERSION.to_string()
}

/// Configuration at ~/.config/byzcal/config.toml
///
/// Every key is optional; `BYZCAL_*` environment variables override the file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ByzcalConfig {
    /// Directory relative input paths resolve against. Defaults to the
    /// directory holding the `byzcal` executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_dir: Option<PathBuf>,

    #[serde(default = "default_text_dir")]
    pub text_dir: PathBuf,

    #[serde(default = "default_html_dir")]
    pub html_dir: PathBuf,

    #[serde(default = "default_year")]
    pub year: String,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_bible_version")]
    pub bible_version: String,

    #[serde(default)]
    pub escape_html: bool,
}

impl Default for ByzcalConfig {
    fn default() -> Self {
        ByzcalConfig {
            input_dir: None,
            text_dir: default_text_dir(),
            html_dir: default_html_dir(),
            year: default_year(),
            title: default_title(),
            bible_version: default_bible_version(),
            escape_html: false,
        }
    }
}

impl ByzcalConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("byzcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default config path. A missing file means defaults.
    pub fn load() -> CalendarResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> CalendarResult<Self> {
        Self::load_with_env(path, None)
    }

    /// `env` replaces the process environment when given.
    fn load_with_env(path: &Path, env: Option<Map<String, String>>) -> CalendarResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("BYZCAL").source(env))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))
    }

    /// Output directory for a format, resolved against the base directory.
    pub fn output_dir(&self, base: &Path, format: OutputFormat) -> PathBuf {
        let dir = match format {
            OutputFormat::Text => &self.text_dir,
            OutputFormat::Html => &self.html_dir,
        };
        base.join(expand(dir))
    }

    pub fn resolved_input_dir(&self) -> Option<PathBuf> {
        self.input_dir.as_deref().map(expand)
    }

    pub fn to_toml(&self) -> CalendarResult<String> {
        toml::to_string_pretty(self).map_err(|e| CalendarError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalendarResult<()> {
        let contents = format!(
            "\
# byzcal configuration

# Directory that relative input files are read from
# (defaults to the directory holding the byzcal executable):
# input_dir = \"~/calendars\"

# Output directories, relative to the input directory:
# text_dir = \"{}\"
# html_dir = \"{}\"

# Year expected in sheet names (<month>_<year>.csv) and shown in page titles:
# year = \"{}\"

# Page title prefix:
# title = \"{}\"

# Translation used for readings links:
# bible_version = \"{}\"

# Escape <, >, & and quotes in HTML output:
# escape_html = false
",
            OutputFormat::Text.default_dir(),
            OutputFormat::Html.default_dir(),
            DEFAULT_YEAR,
            DEFAULT_TITLE,
            DEFAULT_BIBLE_VERSION,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}
