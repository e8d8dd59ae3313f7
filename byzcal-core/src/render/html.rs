//! Standalone HTML page with embedded styling.

use std::borrow::Cow;
use std::fmt::Write;

use crate::label::MonthLabel;
use crate::readings::ReadingsLink;
use crate::render::{OutputFormat, Render};
use crate::row::CalendarRow;

pub const DEFAULT_TITLE: &str = "Byzantine Calendar";

const STYLE: &str = r#"  <style>
    body {
      font-family: Georgia, serif;
      max-width: 800px;
      margin: 0 auto;
      padding: 20px;
      background-color: #fafafa;
      color: #333;
    }
    h1 {
      text-align: center;
      color: #8b0000;
      border-bottom: 2px solid #8b0000;
      padding-bottom: 10px;
    }
    .day-entry {
      background-color: white;
      padding: 20px;
      margin-bottom: 20px;
      border-left: 4px solid #8b0000;
      box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }
    .date {
      font-size: 1.3em;
      font-weight: bold;
      color: #8b0000;
      margin-bottom: 10px;
    }
    .commemorations {
      font-style: italic;
      margin-bottom: 10px;
      color: #555;
    }
    .readings-link {
      margin-bottom: 15px;
    }
    .readings-link a {
      color: #1a5490;
      text-decoration: none;
      font-weight: bold;
    }
    .readings-link a:hover {
      text-decoration: underline;
    }
    .about, .remarks {
      margin-top: 15px;
      line-height: 1.6;
      text-align: justify;
    }
    .about {
      color: #444;
    }
    .remarks {
      color: #666;
      font-style: italic;
    }
    .label {
      font-weight: bold;
      color: #8b0000;
    }
  </style>
"#;

/// Renders one `day-entry` block per row under a month heading.
///
/// Field values are inserted as-is unless escaping is turned on, so sheets
/// that carry inline markup in "About Today" keep it.
pub struct HtmlRenderer {
    label: MonthLabel,
    link: ReadingsLink,
    title: String,
    escape: bool,
}

impl HtmlRenderer {
    pub fn new(label: MonthLabel, link: ReadingsLink) -> Self {
        HtmlRenderer {
            label,
            link,
            title: DEFAULT_TITLE.to_string(),
            escape: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    fn text<'a>(&self, value: &'a str) -> Cow<'a, str> {
        if self.escape {
            Cow::Owned(escape_html(value))
        } else {
            Cow::Borrowed(value)
        }
    }

    fn write_document(&self, out: &mut String, rows: &[CalendarRow]) -> std::fmt::Result {
        self.write_head(out)?;
        for row in rows {
            self.write_entry(out, row)?;
        }
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }

    fn write_head(&self, out: &mut String) -> std::fmt::Result {
        let heading = format!("{} - {}", self.title, self.label);
        let heading = self.text(&heading);

        writeln!(out, "<!DOCTYPE html>")?;
        writeln!(out, "<html lang=\"en\">")?;
        writeln!(out, "<head>")?;
        writeln!(out, "  <meta charset=\"UTF-8\">")?;
        writeln!(
            out,
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(out, "  <title>{}</title>", heading)?;
        out.push_str(STYLE);
        writeln!(out, "</head>")?;
        writeln!(out, "<body>")?;
        writeln!(out, "  <h1>{}</h1>", heading)
    }

    fn write_entry(&self, out: &mut String, row: &CalendarRow) -> std::fmt::Result {
        let url = row.readings_url(&self.link);

        writeln!(out, "  <div class=\"day-entry\">")?;
        writeln!(out, "    <div class=\"date\">{}</div>", self.text(&row.date))?;
        writeln!(
            out,
            "    <div class=\"commemorations\">{}</div>",
            self.text(&row.commemorations)
        )?;
        writeln!(out, "    <div class=\"readings-link\">")?;
        writeln!(
            out,
            "      <span class=\"label\">Readings:</span> <a href=\"{}\" target=\"_blank\">View Readings</a>",
            self.text(&url)
        )?;
        writeln!(out, "    </div>")?;

        if let Some(ref about) = row.about {
            writeln!(out, "    <div class=\"about\">")?;
            writeln!(out, "      <span class=\"label\">About:</span> {}", self.text(about))?;
            writeln!(out, "    </div>")?;
        }

        if let Some(ref remarks) = row.remarks {
            writeln!(out, "    <div class=\"remarks\">")?;
            writeln!(
                out,
                "      <span class=\"label\">Remarks:</span> {}",
                self.text(remarks)
            )?;
            writeln!(out, "    </div>")?;
        }

        writeln!(out, "  </div>")
    }
}

impl Render for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, rows: &[CalendarRow]) -> String {
        let mut out = String::new();
        self.write_document(&mut out, rows)
            .expect("formatting into a String is infallible");
        out
    }
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
