//! Scripture lookup links for the readings column.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const DEFAULT_BIBLE_VERSION: &str = "RSVCE";

const PASSAGE_URL: &str = "https://www.biblegateway.com/passage/";

/// Characters left alone when encoding a URI component: ASCII alphanumerics
/// and `- _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds Bible Gateway passage links for a given translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingsLink {
    pub version: String,
}

impl Default for ReadingsLink {
    fn default() -> Self {
        ReadingsLink {
            version: DEFAULT_BIBLE_VERSION.to_string(),
        }
    }
}

impl ReadingsLink {
    pub fn new(version: impl Into<String>) -> Self {
        ReadingsLink {
            version: version.into(),
        }
    }

    /// Link for a raw readings field, or an empty string when there is nothing to look up.
    ///
    /// Every `|`-separated group is flattened into one comma-separated search,
    /// so the lookup page shows all of the day's passages together.
    pub fn url(&self, readings: &str) -> String {
        if readings.is_empty() {
            return String::new();
        }

        let search = citations(readings).join(",");

        format!(
            "{}?search={}&version={}",
            PASSAGE_URL,
            encode_component(&search),
            encode_component(&self.version)
        )
    }
}

/// All citations in the field, in order, with group boundaries dropped.
pub fn citations(readings: &str) -> Vec<&str> {
    readings
        .split('|')
        .flat_map(|group| group.split(',').map(str::trim))
        .collect()
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_empty_readings_is_empty() {
        assert_eq!(ReadingsLink::default().url(""), "");
    }

    #[test]
    fn test_url_single_citation() {
        let url = ReadingsLink::default().url("John 1:1-5");
        assert_eq!(
            url,
            "https://www.biblegateway.com/passage/?search=John%201%3A1-5&version=RSVCE"
        );
    }

    #[test]
    fn test_citations_flatten_groups_in_order() {
        assert_eq!(
            citations("John 1:1-5|Matt 2:1, Matt 2:2"),
            vec!["John 1:1-5", "Matt 2:1", "Matt 2:2"]
        );
    }

    #[test]
    fn test_url_flattens_groups() {
        let url = ReadingsLink::default().url("John 1:1-5|Matt 2:1, Matt 2:2");
        assert_eq!(
            url,
            "https://www.biblegateway.com/passage/?search=John%201%3A1-5%2CMatt%202%3A1%2CMatt%202%3A2&version=RSVCE"
        );
    }

    #[test]
    fn test_url_encodes_like_uri_component() {
        let url = ReadingsLink::default().url("Gen 1:1; (Ps 1)*!~'_.");
        assert!(
            url.contains("search=Gen%201%3A1%3B%20(Ps%201)*!~'_.&"),
            "Unexpected encoding: {}",
            url
        );
    }

    #[test]
    fn test_url_encodes_non_ascii_as_utf8() {
        let url = ReadingsLink::default().url("Ps 1 – 2");
        assert!(url.contains("search=Ps%201%20%E2%80%93%202&"), "Got: {}", url);
    }

    #[test]
    fn test_url_uses_configured_version() {
        let url = ReadingsLink::new("NABRE").url("Luke 2:1");
        assert!(url.ends_with("&version=NABRE"), "Got: {}", url);
    }

    #[test]
    fn test_url_keeps_empty_citations() {
        // A trailing comma leaves an empty citation, which still contributes a separator.
        let url = ReadingsLink::default().url("Luke 2:1,");
        assert!(url.contains("search=Luke%202%3A1%2C&"), "Got: {}", url);
    }
}
