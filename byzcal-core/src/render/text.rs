//! Plain-text digest.

use crate::readings::ReadingsLink;
use crate::render::{OutputFormat, Render};
use crate::row::CalendarRow;

/// One block of lines per day, each block followed by a blank line.
pub struct TextRenderer {
    link: ReadingsLink,
}

impl TextRenderer {
    pub fn new(link: ReadingsLink) -> Self {
        TextRenderer { link }
    }
}

impl Render for TextRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Text
    }

    fn render(&self, rows: &[CalendarRow]) -> String {
        let mut lines = Vec::new();

        for row in rows {
            lines.push(row.date.clone());
            lines.push(format!("Commemorations: {}", row.commemorations));
            lines.push(format!("Link to readings: {}", row.readings_url(&self.link)));

            if let Some(ref about) = row.about {
                lines.push(format!("About: {}", about));
            }
            if let Some(ref remarks) = row.remarks {
                lines.push(format!("Remarks: {}", remarks));
            }

            lines.push(String::new());
        }

        lines.join("\n")
    }
}
