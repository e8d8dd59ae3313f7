//! Text and HTML renderings of calendar rows.

mod html;
mod text;

pub use html::{DEFAULT_TITLE, HtmlRenderer};
pub use text::TextRenderer;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::row::CalendarRow;

/// Something that turns parsed rows into a complete output document.
pub trait Render {
    fn format(&self) -> OutputFormat;

    fn render(&self, rows: &[CalendarRow]) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 2] = [OutputFormat::Text, OutputFormat::Html];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
        }
    }

    /// Default output directory, relative to the base directory.
    pub fn default_dir(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
        }
    }

    /// Output file name for an input sheet: same base name, new extension.
    pub fn output_file_name(self, input: &Path) -> PathBuf {
        let name = input.file_name().map(PathBuf::from).unwrap_or_default();
        name.with_extension(self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Html => write!(f, "HTML"),
        }
    }
}
