//! Line-based CSV field splitting.
//!
//! The calendar sheets are exported with plain comma delimiters and
//! double-quoted fields where a value contains a comma. Quotes only toggle
//! the "inside quotes" state; a doubled quote is not an escape.

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Split one line into trimmed fields.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == QUOTE {
            in_quotes = !in_quotes;
        } else if ch == DELIMITER && !in_quotes {
            fields.push(trim_field(&current).to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(trim_field(&current).to_string());

    fields
}

/// Trim whitespace plus any byte-order mark left over from spreadsheet exports.
pub fn trim_field(field: &str) -> &str {
    field.trim_matches(is_blank)
}

/// Space separators, tabs, line terminators and the byte-order mark.
/// NEL (U+0085) is not blank: a field holding only NEL is kept.
pub fn is_blank(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}
