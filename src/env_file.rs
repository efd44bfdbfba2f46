//! `.env`-style settings loading.
//!
//! The settings file is a plain list of `KEY=value` lines. Blank lines and
//! `#` comments are skipped, whitespace around keys and values is trimmed,
//! and a matching pair of surrounding quotes (single or double) is stripped
//! from values. The loader returns an immutable map; nothing downstream
//! depends on the file representation.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::WorkOrderError;

/// Reads the settings file at `path` and parses it into a key/value map.
pub fn load(path: &Path) -> Result<HashMap<String, String>, WorkOrderError> {
    let text = fs::read_to_string(path).map_err(|err| {
        WorkOrderError::simple(format!(
            "Failed to load .env file '{}': {}",
            path.display(),
            err
        ))
    })?;
    Ok(parse(&text))
}

/// Parses settings-file text into a key/value map.
pub fn parse(text: &str) -> HashMap<String, String> {
    let mut settings = HashMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = match line.split_once('=') {
            Some(pair) => pair,
            None => continue,
        };

        let key = key.trim();
        let value = strip_quotes(value.trim());
        settings.insert(key.to_string(), value.to_string());
    }

    settings
}

fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        let last = bytes[bytes.len() - 1];
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_pairs() {
        let settings = parse("API_KEY=abc123\nOTHER=xyz\n");
        assert_eq!(settings.get("API_KEY").unwrap(), "abc123");
        assert_eq!(settings.get("OTHER").unwrap(), "xyz");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let settings = parse("# a comment\n\n   \nAPI_KEY=abc\n# another\n");
        assert_eq!(settings.len(), 1);
        assert_eq!(settings.get("API_KEY").unwrap(), "abc");
    }

    #[test]
    fn skips_lines_without_equals() {
        let settings = parse("not a setting\nKEY=value\n");
        assert_eq!(settings.len(), 1);
    }

    #[test]
    fn trims_whitespace_around_key_and_value() {
        let settings = parse("  KEY  =  value  \n");
        assert_eq!(settings.get("KEY").unwrap(), "value");
    }

    #[test]
    fn strips_matching_quotes() {
        let settings = parse("A=\"quoted\"\nB='single'\nC=\"unmatched'\n");
        assert_eq!(settings.get("A").unwrap(), "quoted");
        assert_eq!(settings.get("B").unwrap(), "single");
        assert_eq!(settings.get("C").unwrap(), "\"unmatched'");
    }

    #[test]
    fn value_may_contain_equals() {
        let settings = parse("URL=https://example.com/?a=1&b=2\n");
        assert_eq!(settings.get("URL").unwrap(), "https://example.com/?a=1&b=2");
    }

    #[test]
    fn later_lines_override_earlier_ones() {
        let settings = parse("KEY=first\nKEY=second\n");
        assert_eq!(settings.get("KEY").unwrap(), "second");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load(Path::new("/nonexistent/.env")).unwrap_err();
        assert!(err.message.contains("Failed to load .env file"));
    }
}
