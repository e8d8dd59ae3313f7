//! Header-driven column lookup.
//!
//! Calendar sheets have always used a fixed layout (date, commemorations,
//! readings, ..., "About Today" at 11, "Remarks" at 12). The header row is
//! consulted once so a reordered sheet still renders correctly; any column
//! the header does not name keeps its fixed position.

use crate::csv::trim_field;

const DATE_NAMES: &[&str] = &["date"];
const COMMEMORATION_NAMES: &[&str] = &["commemorations", "commemoration", "dayname"];
const READINGS_NAMES: &[&str] = &["readings", "reading"];
const ABOUT_NAMES: &[&str] = &["abouttoday", "about"];
const REMARKS_NAMES: &[&str] = &["remarks", "remark"];

/// Field positions of the columns the renderers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub date: usize,
    pub commemorations: usize,
    pub readings: usize,
    pub about: usize,
    pub remarks: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        ColumnMap {
            date: 0,
            commemorations: 1,
            readings: 2,
            about: 11,
            remarks: 12,
        }
    }
}

impl ColumnMap {
    /// Resolve positions from the header fields, falling back to the fixed layout.
    pub fn from_header<S: AsRef<str>>(header: &[S]) -> Self {
        let names: Vec<String> = header.iter().map(|h| normalize(h.as_ref())).collect();
        let find = |candidates: &[&str], fallback: usize| {
            candidates
                .iter()
                .find_map(|c| names.iter().position(|n| n == c))
                .unwrap_or(fallback)
        };

        let fixed = ColumnMap::default();
        ColumnMap {
            date: find(DATE_NAMES, fixed.date),
            commemorations: find(COMMEMORATION_NAMES, fixed.commemorations),
            readings: find(READINGS_NAMES, fixed.readings),
            about: find(ABOUT_NAMES, fixed.about),
            remarks: find(REMARKS_NAMES, fixed.remarks),
        }
    }
}

/// Lowercase and drop everything but letters and digits ("About Today" -> "abouttoday").
fn normalize(name: &str) -> String {
    trim_field(name)
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}
