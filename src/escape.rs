use std::fmt::Write;

/// Escapes a string for embedding inside a double-quoted JSON string literal.
///
/// The result is the bare fragment: the caller supplies the surrounding
/// quotes. Each character is mapped independently, so the output decodes back
/// to the input under any standard JSON parser:
///
/// - `"` becomes `\"` and `\` becomes `\\`
/// - newline, carriage return, and tab become `\n`, `\r`, and `\t`
/// - any other control character below U+0020 becomes a `\u00XX` escape
/// - everything else passes through unchanged
///
/// # Example
///
/// ```rust
/// use workorders::escape;
///
/// assert_eq!(escape("He said \"hi\"\n"), "He said \\\"hi\\\"\\n");
/// ```
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ if (ch as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(fragment: &str) -> String {
        serde_json::from_str(&format!("\"{}\"", fragment)).unwrap()
    }

    #[test]
    fn quotes_and_newline() {
        let escaped = escape("He said \"hi\"\n");
        assert_eq!(escaped, "He said \\\"hi\\\"\\n");
        assert_eq!(decode(&escaped), "He said \"hi\"\n");
    }

    #[test]
    fn backslashes_double() {
        assert_eq!(escape(r"C:\temp\file"), r"C:\\temp\\file");
    }

    #[test]
    fn carriage_return_and_tab() {
        assert_eq!(escape("a\r\tb"), "a\\r\\tb");
    }

    #[test]
    fn other_control_chars_get_hex_escapes() {
        assert_eq!(escape("\u{0007}\u{000b}\u{001f}"), "\\u0007\\u000b\\u001f");
        assert_eq!(decode(&escape("\u{0000}bell\u{0007}")), "\u{0000}bell\u{0007}");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(escape("work order 42"), "work order 42");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn non_ascii_passes_through() {
        assert_eq!(escape("ünïcödé ⚙"), "ünïcödé ⚙");
    }

    #[test]
    fn wrapped_fragment_always_reparses_to_input() {
        for input in ["", "plain", "\"\\\"", "a\nb\rc\td", "mixed \u{0001}\"\\\n"] {
            assert_eq!(decode(&escape(input)), input);
        }
    }
}
