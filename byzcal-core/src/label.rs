//! Month/year label for rendered pages.
//!
//! Sheets are named `<month>_<year>.csv` (e.g. `january_2026.csv`), and the
//! label is taken from that name.

use std::fmt;
use std::path::Path;

use crate::error::{CalendarError, CalendarResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    pub month: String,
    pub year: String,
}

impl MonthLabel {
    /// Label from a `<month>_<year>.csv` file name.
    ///
    /// Fails when the name does not carry the expected suffix.
    pub fn from_file_name(file_name: &str, year: &str) -> CalendarResult<Self> {
        let name = base_name(file_name);
        let suffix = suffix_for(year);

        match name.strip_suffix(&suffix) {
            Some(month) if !month.is_empty() => Ok(MonthLabel {
                month: capitalize(month),
                year: year.to_string(),
            }),
            _ => Err(CalendarError::InputName {
                name: name.to_string(),
                suffix,
            }),
        }
    }

    /// Like [`MonthLabel::from_file_name`], but a name without the suffix is
    /// used whole as the month.
    pub fn from_file_name_lossy(file_name: &str, year: &str) -> Self {
        let name = base_name(file_name);
        let suffix = suffix_for(year);
        let month = name.strip_suffix(&suffix).unwrap_or(name);

        MonthLabel {
            month: capitalize(month),
            year: year.to_string(),
        }
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month, self.year)
    }
}

fn suffix_for(year: &str) -> String {
    format!("_{}.csv", year)
}

fn base_name(file_name: &str) -> &str {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
