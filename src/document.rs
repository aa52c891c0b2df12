//! In-memory document model for YSO data.
//!
//! This module provides the two containers the format is built from:
//!
//! - [`Section`]: a flat mapping from key to opaque string value
//! - [`Document`]: the full document, a mapping from section name to [`Section`]
//!
//! ## Why HashMap?
//!
//! Both containers are backed by [`HashMap`] and deliberately expose no
//! iteration-order guarantee: the YSO format is unordered by design, and the
//! serializer may emit sections and keys in any order. Callers must not
//! depend on the order of [`Document::iter`] or [`Section::iter`].
//!
//! Values are opaque strings. They may contain any character, including
//! newlines; interpretation is left entirely to the caller.
//!
//! ## Lookup contract
//!
//! Each container offers the same four operations at its level: an existence
//! check that never fails, a fallible borrow that errors with
//! [`Error::KeyNotFound`](crate::Error::KeyNotFound) on absence, an
//! auto-vivifying mutable accessor that creates the entry on first use, and
//! plain insertion.
//!
//! ## Examples
//!
//! ```rust
//! use yso::Document;
//!
//! let mut doc = Document::new();
//! doc.section_mut("general").set("name", "demo");
//!
//! assert!(doc.contains_section("general"));
//! assert_eq!(doc.section("general").unwrap().get("name").unwrap(), "demo");
//! assert!(doc.section("missing").is_err());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named group of key/value string pairs.
///
/// Keys are unique within the section. Values are opaque strings; no escaping
/// or interpretation is applied by the container.
///
/// # Examples
///
/// ```rust
/// use yso::Section;
///
/// let mut section = Section::new();
/// section.set("host", "localhost");
/// section.set("port", "8080");
///
/// assert_eq!(section.len(), 2);
/// assert_eq!(section.get("host").unwrap(), "localhost");
/// assert_eq!(section.get_or("scheme", "http"), "http");
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Section(HashMap<String, String>);

impl Section {
    /// Creates an empty `Section`.
    #[must_use]
    pub fn new() -> Self {
        Section(HashMap::new())
    }

    /// Creates an empty `Section` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Section(HashMap::with_capacity(capacity))
    }

    /// Returns `true` if the key exists. Never fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yso::Section;
    ///
    /// let mut section = Section::new();
    /// section.set("key", "value");
    /// assert!(section.contains("key"));
    /// assert!(!section.contains("missing"));
    /// ```
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the value for `key`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::KeyNotFound`] if the key is absent. Use
    /// [`Section::contains`] or [`Section::get_or`] when absence is expected.
    pub fn get(&self, key: &str) -> Result<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Returns the value for `key`, or `default` if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yso::Section;
    ///
    /// let section = Section::new();
    /// assert_eq!(section.get_or("level", "info"), "info");
    /// ```
    #[must_use]
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.0.get(key).map_or(default, String::as_str)
    }

    /// Returns a mutable reference to the value for `key`, inserting an empty
    /// string first if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yso::Section;
    ///
    /// let mut section = Section::new();
    /// section.value_mut("greeting").push_str("hello");
    /// assert_eq!(section.get("greeting").unwrap(), "hello");
    /// ```
    pub fn value_mut(&mut self, key: &str) -> &mut String {
        self.0.entry(key.to_string()).or_default()
    }

    /// Sets `key` to `value`, replacing any previous value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Returns the number of keys in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the section holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys (unspecified order).
    pub fn keys(&self) -> std::collections::hash_map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values (unspecified order).
    pub fn values(&self) -> std::collections::hash_map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs (unspecified order).
    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl From<HashMap<String, String>> for Section {
    fn from(map: HashMap<String, String>) -> Self {
        Section(map)
    }
}

impl From<Section> for HashMap<String, String> {
    fn from(section: Section) -> Self {
        section.0
    }
}

impl IntoIterator for Section {
    type Item = (String, String);
    type IntoIter = std::collections::hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::hash_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Section {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Section(HashMap::from_iter(iter))
    }
}

/// The full YSO document: a collection of named [`Section`]s.
///
/// Section names are unique; the document owns all of its sections. A
/// `Document` is an independent value with no process-wide state. It is not
/// synchronized: sharing one instance across threads requires external
/// synchronization by the caller.
///
/// # Examples
///
/// ```rust
/// use yso::Document;
///
/// let mut doc = Document::new();
/// doc.section_mut("server").set("port", "8080");
/// doc.section_mut("server").set("host", "0.0.0.0");
///
/// let server = doc.section("server").unwrap();
/// assert_eq!(server.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(HashMap<String, Section>);

impl Document {
    /// Creates an empty `Document`.
    #[must_use]
    pub fn new() -> Self {
        Document(HashMap::new())
    }

    /// Returns `true` if the named section exists. Never fails.
    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the named section.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::KeyNotFound`] if the section is absent. Use
    /// [`Document::contains_section`] when absence is expected.
    pub fn section(&self, name: &str) -> Result<&Section> {
        self.0.get(name).ok_or_else(|| Error::key_not_found(name))
    }

    /// Returns a mutable reference to the named section, creating it empty
    /// first if it does not exist.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use yso::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.section_mut("new").set("k", "v");
    /// assert!(doc.contains_section("new"));
    /// ```
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.0.entry(name.to_string()).or_default()
    }

    /// Inserts a section under `name`, returning the previous section of the
    /// same name if there was one.
    pub fn insert(&mut self, name: String, section: Section) -> Option<Section> {
        self.0.insert(name, section)
    }

    /// Removes a section, returning it if it was present.
    pub fn remove_section(&mut self, name: &str) -> Option<Section> {
        self.0.remove(name)
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the document holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the section names (unspecified order).
    pub fn names(&self) -> std::collections::hash_map::Keys<'_, String, Section> {
        self.0.keys()
    }

    /// Returns an iterator over the name-section pairs (unspecified order).
    pub fn iter(&self) -> std::collections::hash_map::Iter<'_, String, Section> {
        self.0.iter()
    }
}

impl From<HashMap<String, Section>> for Document {
    fn from(map: HashMap<String, Section>) -> Self {
        Document(map)
    }
}

impl From<Document> for HashMap<String, Section> {
    fn from(doc: Document) -> Self {
        doc.0
    }
}

impl IntoIterator for Document {
    type Item = (String, Section);
    type IntoIter = std::collections::hash_map::IntoIter<String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Section);
    type IntoIter = std::collections::hash_map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Section)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Section)>>(iter: T) -> Self {
        Document(HashMap::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_section_lookup_contract() {
        let mut section = Section::new();
        section.set("name", "demo");

        assert!(section.contains("name"));
        assert!(!section.contains("missing"));
        assert_eq!(section.get("name").unwrap(), "demo");
        assert_eq!(
            section.get("missing").unwrap_err(),
            Error::key_not_found("missing")
        );
    }

    #[test]
    fn test_section_auto_vivify() {
        let mut section = Section::new();
        assert!(!section.contains("fresh"));
        section.value_mut("fresh").push_str("made");
        assert_eq!(section.get("fresh").unwrap(), "made");
        // Repeated access mutates the same entry.
        section.value_mut("fresh").push('!');
        assert_eq!(section.get("fresh").unwrap(), "made!");
    }

    #[test]
    fn test_section_set_overwrites() {
        let mut section = Section::new();
        section.set("k", "one");
        section.set("k", "two");
        assert_eq!(section.len(), 1);
        assert_eq!(section.get("k").unwrap(), "two");
    }

    #[test]
    fn test_document_lookup_contract() {
        let mut doc = Document::new();
        doc.section_mut("general").set("name", "demo");

        assert!(doc.contains_section("general"));
        assert!(!doc.contains_section("missing"));
        assert!(doc.section("general").is_ok());
        assert_eq!(
            doc.section("missing").unwrap_err(),
            Error::key_not_found("missing")
        );
    }

    #[test]
    fn test_document_auto_vivify_creates_empty_section() {
        let mut doc = Document::new();
        let section = doc.section_mut("fresh");
        assert!(section.is_empty());
        assert!(doc.contains_section("fresh"));
    }

    #[test]
    fn test_document_insert_replaces() {
        let mut doc = Document::new();
        let mut first = Section::new();
        first.set("a", "1");
        let mut second = Section::new();
        second.set("b", "2");

        assert!(doc.insert("s".to_string(), first).is_none());
        let old = doc.insert("s".to_string(), second).unwrap();
        assert!(old.contains("a"));
        assert!(doc.section("s").unwrap().contains("b"));
        assert!(!doc.section("s").unwrap().contains("a"));
    }

    #[test]
    fn test_values_keep_newlines() {
        let mut section = Section::new();
        section.set("multi", "line1\nline2");
        assert_eq!(section.get("multi").unwrap(), "line1\nline2");
    }

    #[test]
    fn test_from_hashmap_round_trip() {
        let mut map = HashMap::new();
        map.insert("k".to_string(), "v".to_string());
        let section = Section::from(map.clone());
        assert_eq!(HashMap::from(section), map);
    }
}
