//! # yso
//!
//! Parser and serializer for the YSO sectioned key/value configuration format.
//!
//! ## What is YSO?
//!
//! YSO is a small line-oriented text format: a document is divided into named
//! sections, each holding key/value string pairs, with comment lines and
//! triple-quoted multi-line values:
//!
//! ```text
//! My config file
//!
//! [general]
//! # a comment
//! name:demo
//! desc:"""
//! hello
//! world
//! """
//! ```
//!
//! Values are opaque strings; YSO has no typed values, no nested sections,
//! and no escaping within single-line values. Interpretation is left to the
//! caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use yso::{from_str, to_string, Document};
//!
//! let doc = from_str("[general]\nname:demo\n").unwrap();
//! assert_eq!(doc.section("general").unwrap().get("name").unwrap(), "demo");
//!
//! let mut doc = Document::new();
//! doc.section_mut("server").set("port", "8080");
//! let text = to_string(&doc);
//! assert_eq!(from_str(&text).unwrap(), doc);
//! ```
//!
//! ## Building documents with the `yso!` macro
//!
//! ```rust
//! use yso::yso;
//!
//! let doc = yso!({
//!     "general": { "name": "demo" },
//! });
//! assert!(doc.contains_section("general"));
//! ```
//!
//! ## Ordering
//!
//! Sections and keys are backed by hash maps and carry no iteration-order
//! guarantee; two renderings of the same document may order sections and
//! keys differently while parsing back to equal documents. Do not depend on
//! output order.
//!
//! ## Concurrency
//!
//! Everything here is synchronous and single-threaded. A [`Document`] is an
//! independent value; sharing one instance across threads requires external
//! synchronization by the caller.
//!
//! ## Serde interop
//!
//! [`Document`] and [`Section`] are transparent over their maps for serde,
//! so a document converts to and from other formats directly:
//!
//! ```rust
//! use yso::{from_str, Document};
//!
//! let doc = from_str("[s]\nk:v\n").unwrap();
//! let json = serde_json::to_string(&doc).unwrap();
//! assert_eq!(json, r#"{"s":{"k":"v"}}"#);
//! ```

pub mod de;
pub mod document;
pub mod error;
pub mod macros;
pub mod ser;

pub use de::Parser;
pub use document::{Document, Section};
pub use error::{Error, Result};
pub use ser::Serializer;

use std::fs;
use std::io;
use std::path::Path;

/// The literal triple-double-quote token delimiting a multi-line value.
pub const MULTILINE_MARKER: &str = "\"\"\"";

/// Parses a string of YSO text into a [`Document`].
///
/// # Examples
///
/// ```rust
/// use yso::from_str;
///
/// let doc = from_str("[general]\nname:demo\n").unwrap();
/// assert!(doc.contains_section("general"));
/// ```
///
/// # Errors
///
/// Returns an error on structural failures: a section header with no closing
/// `]`, or a multi-line value still open at end of input. No partial
/// document is returned.
pub fn from_str(input: &str) -> Result<Document> {
    Parser::new(input).parse()
}

/// Parses a [`Document`] from an I/O stream of YSO text.
///
/// The stream is read to completion in one call.
///
/// # Examples
///
/// ```rust
/// use yso::from_reader;
/// use std::io::Cursor;
///
/// let doc = from_reader(Cursor::new(b"[s]\nk:v\n")).unwrap();
/// assert_eq!(doc.section("s").unwrap().get("k").unwrap(), "v");
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is structurally malformed.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&input)
}

/// Loads a [`Document`] from the file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents are
/// structurally malformed.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let input = fs::read_to_string(path).map_err(|e| Error::io(&e.to_string()))?;
    from_str(&input)
}

/// Renders a [`Document`] to YSO text with no header line.
///
/// # Examples
///
/// ```rust
/// use yso::{to_string, Document};
///
/// let mut doc = Document::new();
/// doc.section_mut("s").set("k", "v");
/// assert_eq!(to_string(&doc), "[s]\nk:v\n\n");
/// ```
#[must_use]
pub fn to_string(doc: &Document) -> String {
    to_string_with_header(doc, "")
}

/// Renders a [`Document`] to YSO text, preceded by `header` and a blank line
/// when `header` is non-empty.
#[must_use]
pub fn to_string_with_header(doc: &Document, header: &str) -> String {
    let mut serializer = Serializer::new();
    serializer.render_with_header(doc, header);
    serializer.into_inner()
}

/// Renders a [`Document`] to a writer with no header line.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W: io::Write>(writer: W, doc: &Document) -> Result<()> {
    to_writer_with_header(writer, doc, "")
}

/// Renders a [`Document`] to a writer, preceded by `header` and a blank line
/// when `header` is non-empty.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer_with_header<W: io::Write>(
    mut writer: W,
    doc: &Document,
    header: &str,
) -> Result<()> {
    let text = to_string_with_header(doc, header);
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Saves a [`Document`] to the file at `path`, preceded by `header` and a
/// blank line when `header` is non-empty.
///
/// # Errors
///
/// Returns an error if the path cannot be opened for writing.
pub fn to_file<P: AsRef<Path>>(path: P, doc: &Document, header: &str) -> Result<()> {
    fs::write(path, to_string_with_header(doc, header)).map_err(|e| Error::io(&e.to_string()))
}
