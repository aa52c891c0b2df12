//! YSO serialization.
//!
//! This module provides the [`Serializer`] that renders a [`Document`] back
//! to YSO text.
//!
//! ## Output shape
//!
//! An optional header line followed by a blank line, then each section as
//! `[name]`, one `key:value` line per entry, and a blank separator line.
//! Sections and keys are emitted in unspecified order; the format is
//! unordered by design.
//!
//! Values containing a newline are wrapped in the `"""` marker with the
//! value text verbatim in between. An embedded `"""` inside a value is not
//! escaped; such a value will not survive a round trip. This is a limitation
//! of the textual format, as are values that begin or end with a newline
//! (the line-oriented grammar cannot distinguish them from their stripped
//! forms).
//!
//! Keys and section names are written as-is: they are assumed well-formed
//! from having passed through parsing or the explicit model API.
//!
//! ## Usage
//!
//! Most users should use [`to_string`](crate::to_string) and friends in the
//! crate root:
//!
//! ```rust
//! use yso::{to_string, Document};
//!
//! let mut doc = Document::new();
//! doc.section_mut("general").set("name", "demo");
//! assert_eq!(to_string(&doc), "[general]\nname:demo\n\n");
//! ```

use crate::{Document, MULTILINE_MARKER};

/// The YSO serializer.
///
/// Accumulates rendered text in an internal buffer; retrieve it with
/// [`Serializer::into_inner`]. Created via [`Serializer::new`].
#[derive(Debug, Default)]
pub struct Serializer {
    output: String,
}

impl Serializer {
    /// Creates a serializer with an empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        // Pre-allocate a little; typical documents are small.
        Serializer {
            output: String::with_capacity(256),
        }
    }

    /// Consumes the serializer, returning the rendered text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    /// Renders the document with no header line.
    pub fn render(&mut self, doc: &Document) {
        self.render_with_header(doc, "");
    }

    /// Renders the document, preceded by `header` and a blank line when
    /// `header` is non-empty.
    pub fn render_with_header(&mut self, doc: &Document, header: &str) {
        if !header.is_empty() {
            self.output.push_str(header);
            self.output.push_str("\n\n");
        }

        for (name, section) in doc.iter() {
            self.output.push('[');
            self.output.push_str(name);
            self.output.push_str("]\n");
            for (key, value) in section.iter() {
                self.output.push_str(key);
                self.output.push(':');
                self.write_value(value);
                self.output.push('\n');
            }
            self.output.push('\n');
        }
    }

    fn write_value(&mut self, value: &str) {
        if value.contains('\n') {
            self.output.push_str(MULTILINE_MARKER);
            self.output.push_str(value);
            self.output.push_str(MULTILINE_MARKER);
        } else {
            self.output.push_str(value);
        }
    }
}
