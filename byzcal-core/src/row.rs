//! Calendar rows extracted from a sheet.

use tracing::debug;

use crate::columns::ColumnMap;
use crate::csv::{parse_line, trim_field};
use crate::readings::ReadingsLink;

/// One calendar day ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRow {
    pub date: String,
    /// Commemorations for display, with `|` separators turned into `, `.
    pub commemorations: String,
    /// Raw readings field, still grouped with `|`.
    pub readings: String,
    pub about: Option<String>,
    pub remarks: Option<String>,
}

impl CalendarRow {
    /// Build a row from parsed fields, or `None` when the date or commemorations are missing.
    pub fn from_fields(fields: &[String], columns: &ColumnMap) -> Option<Self> {
        let field = |index: usize| fields.get(index).map(String::as_str).unwrap_or("");

        let date = field(columns.date);
        let commemorations = field(columns.commemorations);
        if date.is_empty() || commemorations.is_empty() {
            return None;
        }

        Some(CalendarRow {
            date: date.to_string(),
            commemorations: commemorations.replace('|', ", "),
            readings: field(columns.readings).to_string(),
            about: non_empty(field(columns.about)),
            remarks: non_empty(field(columns.remarks)),
        })
    }

    pub fn readings_url(&self, link: &ReadingsLink) -> String {
        link.url(&self.readings)
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = trim_field(value);
    if trimmed.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parse sheet contents into the rows that will be rendered.
///
/// Blank lines are ignored, the first remaining line is the header, and data
/// lines without a date or commemorations are dropped.
pub fn parse_rows(contents: &str) -> Vec<CalendarRow> {
    let mut lines = contents.split('\n').filter(|line| !trim_field(line).is_empty());

    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns = ColumnMap::from_header(&parse_line(header));

    let mut skipped = 0usize;
    let rows: Vec<CalendarRow> = lines
        .filter_map(|line| {
            let row = CalendarRow::from_fields(&parse_line(line), &columns);
            if row.is_none() {
                skipped += 1;
            }
            row
        })
        .collect();

    debug!(rows = rows.len(), skipped, ?columns, "parsed calendar sheet");
    rows
}
