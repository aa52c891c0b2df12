//! YSO parsing.
//!
//! This module provides the [`Parser`] that turns YSO text into a
//! [`Document`].
//!
//! ## Overview
//!
//! The parser is line-oriented and single-pass:
//!
//! - **Section headers**: a trimmed, non-comment line containing `[`; the
//!   name sits between the first `[` and the first `]` after it
//! - **Key/value lines**: split at the first `:`; single-line values are
//!   trimmed
//! - **Multi-line values**: a value containing the `"""` marker collects
//!   subsequent lines verbatim until a line carrying the closing marker
//! - **Comments**: lines starting with `#` or `;` are skipped
//! - **Everything else**: silently ignored, including any text before the
//!   first section header (which is where an optional file header lives)
//!
//! Structural errors (`[unclosed` headers, a multi-line value left open at
//! end of input) abort the parse; no partial document is returned. Line
//! numbers are not tracked.
//!
//! ## Usage
//!
//! Most users should use [`from_str`](crate::from_str) and friends in the
//! crate root:
//!
//! ```rust
//! use yso::from_str;
//!
//! let doc = from_str("[general]\nname:demo\n").unwrap();
//! assert_eq!(doc.section("general").unwrap().get("name").unwrap(), "demo");
//! ```

use crate::{Document, Error, Result, Section, MULTILINE_MARKER};
use std::iter::Peekable;
use std::str::Lines;

/// The YSO parser.
///
/// Consumes its input in one top-to-bottom pass. Created via [`Parser::new`];
/// most callers should prefer [`from_str`](crate::from_str).
pub struct Parser<'a> {
    lines: Peekable<Lines<'a>>,
}

/// Returns `true` if the trimmed line is a comment (`#` or `;`).
fn is_comment(line: &str) -> bool {
    line.starts_with('#') || line.starts_with(';')
}

/// Returns `true` if the trimmed line opens a section header.
///
/// A key/value line takes precedence: a `[` that appears after the key
/// separator (`brackets:[not a header]`) does not open a section, so bare
/// values containing `[` survive a round trip.
///
/// This is the cheap recognition check shared by the top-level loop and the
/// section-body loop; the body loop stops on it without consuming the line,
/// so a malformed header is reported by the top-level loop that owns it.
fn is_header_line(line: &str) -> bool {
    if line.is_empty() || is_comment(line) {
        return false;
    }
    match line.find('[') {
        Some(open) => !line[..open].contains(':'),
        None => false,
    }
}

/// Extracts the section name from a header line, or `None` if the line is
/// not a header.
///
/// # Errors
///
/// Fails with [`Error::UnclosedHeader`] if the line contains `[` but no `]`
/// after it.
fn header_name(line: &str) -> Result<Option<&str>> {
    if !is_header_line(line) {
        return Ok(None);
    }
    match line.split_once('[') {
        Some((_, rest)) => match rest.split_once(']') {
            Some((name, _)) => Ok(Some(name.trim())),
            None => Err(Error::unclosed_header(line)),
        },
        None => Ok(None),
    }
}

impl<'a> Parser<'a> {
    /// Creates a parser over the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Parser {
            lines: input.lines().peekable(),
        }
    }

    /// Parses the input to completion.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnclosedHeader`] or [`Error::UnterminatedValue`]
    /// on structural errors; the whole parse aborts and no partial document
    /// is returned.
    pub fn parse(mut self) -> Result<Document> {
        let mut doc = Document::new();

        while let Some(line) = self.lines.next() {
            let line = line.trim();
            if let Some(name) = header_name(line)? {
                let section = self.parse_section()?;
                // A later section of the same name overwrites the earlier one.
                doc.insert(name.to_string(), section);
            }
        }

        Ok(doc)
    }

    /// Parses one section body: every line up to the next section header or
    /// end of input. The header line itself is left for the caller.
    fn parse_section(&mut self) -> Result<Section> {
        let mut section = Section::new();

        while let Some(peeked) = self.lines.peek() {
            if is_header_line(peeked.trim()) {
                break;
            }
            let Some(line) = self.lines.next() else {
                break;
            };
            let line = line.trim();

            if line.is_empty() || is_comment(line) {
                continue;
            }
            let Some((key, raw)) = line.split_once(':') else {
                // Unknown line shapes are ignored.
                continue;
            };
            let key = key.trim();

            let value = if raw.contains(MULTILINE_MARKER) {
                self.collect_multiline(key, raw)?
            } else {
                raw.trim().to_string()
            };
            section.insert(key.to_string(), value);
        }

        Ok(section)
    }

    /// Collects a multi-line value opened on the key line `key:..."""...`.
    ///
    /// Content after the opening marker on the key line is the first
    /// segment; subsequent lines are taken verbatim, with `\n` reinserted
    /// between originally-separate lines, until a line carrying the closing
    /// marker. Content before the closing marker on that line is included;
    /// the marker itself never is.
    fn collect_multiline(&mut self, key: &str, raw: &str) -> Result<String> {
        let mut value = String::new();
        let mut started = false;

        if let Some((_, opening_rest)) = raw.split_once(MULTILINE_MARKER) {
            // Opening and closing marker on the same line.
            if let Some((inline, _)) = opening_rest.split_once(MULTILINE_MARKER) {
                return Ok(inline.to_string());
            }
            if !opening_rest.is_empty() {
                value.push_str(opening_rest);
                started = true;
            }
        }

        loop {
            let Some(line) = self.lines.next() else {
                return Err(Error::unterminated_value(key));
            };
            if let Some((prefix, _)) = line.split_once(MULTILINE_MARKER) {
                if !prefix.is_empty() {
                    if started {
                        value.push('\n');
                    }
                    value.push_str(prefix);
                }
                return Ok(value);
            }
            if started {
                value.push('\n');
            }
            value.push_str(line);
            started = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_str;

    #[test]
    fn test_header_name_extraction() {
        assert_eq!(header_name("[general]").unwrap(), Some("general"));
        assert_eq!(header_name("[  padded  ]").unwrap(), Some("padded"));
        assert_eq!(header_name("name:value").unwrap(), None);
        assert_eq!(header_name("").unwrap(), None);
        assert_eq!(header_name("# [commented]").unwrap(), None);
        assert_eq!(header_name("; [commented]").unwrap(), None);
    }

    #[test]
    fn test_bracket_after_colon_is_not_a_header() {
        assert!(!is_header_line("brackets:[not a header]"));
        assert!(is_header_line("[section]"));
        assert!(is_header_line("[se:ction]"));

        let doc = from_str("[s]\nbrackets:[not a header]\n").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(
            doc.section("s").unwrap().get("brackets").unwrap(),
            "[not a header]"
        );
    }

    #[test]
    fn test_header_missing_close_bracket() {
        let err = header_name("[unclosed").unwrap_err();
        assert_eq!(err, Error::unclosed_header("[unclosed"));
    }

    #[test]
    fn test_basic_document() {
        let doc = from_str("[general]\nname:demo\nport:8080\n").unwrap();
        let general = doc.section("general").unwrap();
        assert_eq!(general.get("name").unwrap(), "demo");
        assert_eq!(general.get("port").unwrap(), "8080");
    }

    #[test]
    fn test_single_line_values_are_trimmed() {
        let doc = from_str("[s]\nkey:  spaced out  \n").unwrap();
        assert_eq!(doc.section("s").unwrap().get("key").unwrap(), "spaced out");
    }

    #[test]
    fn test_value_splits_at_first_colon_only() {
        let doc = from_str("[s]\nurl:http://example.com:8080\n").unwrap();
        assert_eq!(
            doc.section("s").unwrap().get("url").unwrap(),
            "http://example.com:8080"
        );
    }

    #[test]
    fn test_comment_lines_skipped() {
        let input = "[s]\n# hash comment\n; semicolon comment\n# commented:pair\n; another:pair\nreal:value\n";
        let doc = from_str(input).unwrap();
        let s = doc.section("s").unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.get("real").unwrap(), "value");
    }

    #[test]
    fn test_unknown_lines_ignored() {
        let doc = from_str("[s]\nno colon here\nkey:value\n").unwrap();
        assert_eq!(doc.section("s").unwrap().len(), 1);
    }

    #[test]
    fn test_content_before_first_header_ignored() {
        let doc = from_str("My file header\n\nstray:pair\n\n[s]\nk:v\n").unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.section("s").unwrap().get("k").unwrap(), "v");
    }

    #[test]
    fn test_duplicate_section_overwrites() {
        let doc = from_str("[s]\na:1\n[s]\nb:2\n").unwrap();
        let s = doc.section("s").unwrap();
        assert!(!s.contains("a"));
        assert_eq!(s.get("b").unwrap(), "2");
    }

    #[test]
    fn test_multiline_value() {
        let input = "[general]\nname:demo\ndesc:\"\"\"\nhello\nworld\n\"\"\"\n";
        let doc = from_str(input).unwrap();
        let general = doc.section("general").unwrap();
        assert_eq!(general.get("name").unwrap(), "demo");
        assert_eq!(general.get("desc").unwrap(), "hello\nworld");
    }

    #[test]
    fn test_multiline_terminator_prefix_included() {
        let input = "[s]\nk:\"\"\"\nfirst\nlast\"\"\"\n";
        let doc = from_str(input).unwrap();
        assert_eq!(doc.section("s").unwrap().get("k").unwrap(), "first\nlast");
    }

    #[test]
    fn test_multiline_opening_remainder_included() {
        let input = "[s]\nk:\"\"\"first\nlast\"\"\"\n";
        let doc = from_str(input).unwrap();
        assert_eq!(doc.section("s").unwrap().get("k").unwrap(), "first\nlast");
    }

    #[test]
    fn test_multiline_closed_on_opening_line() {
        let doc = from_str("[s]\nk:\"\"\"inline\"\"\"\nnext:1\n").unwrap();
        let s = doc.section("s").unwrap();
        assert_eq!(s.get("k").unwrap(), "inline");
        assert_eq!(s.get("next").unwrap(), "1");
    }

    #[test]
    fn test_multiline_keeps_empty_interior_lines() {
        let input = "[s]\nk:\"\"\"\na\n\nb\n\"\"\"\n";
        let doc = from_str(input).unwrap();
        assert_eq!(doc.section("s").unwrap().get("k").unwrap(), "a\n\nb");
    }

    #[test]
    fn test_multiline_content_is_not_trimmed() {
        let input = "[s]\nk:\"\"\"\n  indented\n\"\"\"\n";
        let doc = from_str(input).unwrap();
        assert_eq!(doc.section("s").unwrap().get("k").unwrap(), "  indented");
    }

    #[test]
    fn test_multiline_swallows_header_looking_lines() {
        let input = "[s]\nk:\"\"\"\n[not a header]\n\"\"\"\n";
        let doc = from_str(input).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.section("s").unwrap().get("k").unwrap(), "[not a header]");
    }

    #[test]
    fn test_unterminated_multiline_fails() {
        let err = from_str("[S]\nk:\"\"\"\nabc\n").unwrap_err();
        assert_eq!(err, Error::unterminated_value("k"));
        assert!(err.is_malformed());
    }

    #[test]
    fn test_unclosed_header_fails() {
        let err = from_str("[unclosed").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_unclosed_header_mid_document_returns_no_partial() {
        let err = from_str("[ok]\na:1\n[broken\nb:2\n").unwrap_err();
        assert_eq!(err, Error::unclosed_header("[broken"));
    }

    #[test]
    fn test_empty_section_name_permitted() {
        let doc = from_str("[]\nk:v\n").unwrap();
        assert!(doc.contains_section(""));
        assert_eq!(doc.section("").unwrap().get("k").unwrap(), "v");
    }

    #[test]
    fn test_empty_key_name_permitted() {
        let doc = from_str("[s]\n:value\n").unwrap();
        assert_eq!(doc.section("s").unwrap().get("").unwrap(), "value");
    }

    #[test]
    fn test_empty_value() {
        let doc = from_str("[s]\nk:\n").unwrap();
        assert_eq!(doc.section("s").unwrap().get("k").unwrap(), "");
    }

    #[test]
    fn test_empty_input() {
        let doc = from_str("").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_crlf_input() {
        let doc = from_str("[s]\r\nk:v\r\n").unwrap();
        assert_eq!(doc.section("s").unwrap().get("k").unwrap(), "v");
    }
}
