//! File naming helpers for saved results

use chrono::{DateTime, SecondsFormat, Utc};

/// Characters that cannot appear in a file name on some filesystem
const RESERVED_FILE_NAME_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// File-name-safe form of a query.
///
/// Runs of whitespace become a single `-`, and so do path separators and
/// other reserved characters, so the slug never leaves the output directory.
#[must_use]
pub fn query_slug(query: &str) -> String {
    query
        .split(|c: char| c.is_whitespace() || c.is_control() || RESERVED_FILE_NAME_CHARS.contains(&c))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// File name for a saved result: `resultados-<slug>-<timestamp>.json`.
///
/// The timestamp is RFC 3339 at second precision with `:` replaced by `-` so
/// the name is valid on every filesystem, e.g. `2026-10-17T12-30-05`.
#[must_use]
pub fn result_file_name(query: &str, timestamp: DateTime<Utc>) -> String {
    let stamp = timestamp
        .to_rfc3339_opts(SecondsFormat::Secs, true)
        .trim_end_matches('Z')
        .replace(':', "-");
    format!("resultados-{}-{}.json", query_slug(query), stamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_query_slug() {
        assert_eq!(query_slug("mesa  de\tcentro"), "mesa-de-centro");
        assert_eq!(query_slug("laptop"), "laptop");
    }

    #[test]
    fn test_query_slug_strips_path_separators() {
        assert_eq!(query_slug("usb/c"), "usb-c");
        assert_eq!(query_slug("cable usb / c"), "cable-usb-c");
        assert_eq!(query_slug(r"..\etc"), "..-etc");
        assert_eq!(query_slug(r#"a:b*c?d"e<f>g|h"#), "a-b-c-d-e-f-g-h");
    }

    #[test]
    fn test_result_file_name() {
        let ts = Utc
            .with_ymd_and_hms(2026, 10, 17, 12, 30, 5)
            .single()
            .expect("valid timestamp");
        assert_eq!(
            result_file_name("mesa de centro", ts),
            "resultados-mesa-de-centro-2026-10-17T12-30-05.json"
        );
    }
}
