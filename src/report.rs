//! Validation reports.
//!
//! This module provides [`Report`], the per-field error mapping produced by a
//! validation pass, [`FieldReport`], one field's entry in it, and
//! [`Validation`], the overall outcome. A report is tree-shaped: nested
//! records contribute nested reports, and list-of-records fields contribute
//! per-index sub-reports for the elements that failed.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::Value as Json;

use crate::path::FieldPath;

/// The outcome of a validation pass.
///
/// When every field passes, the outcome is [`Validation::Valid`] and no
/// report is allocated — "no errors" stays cheap to check. Otherwise the
/// outcome carries the full [`Report`].
///
/// # Example
///
/// ```rust
/// use triage::{validate, Record};
///
/// let record = Record::new().field("name", "", "required");
///
/// match validate(&record) {
///     triage::Validation::Valid => unreachable!(),
///     triage::Validation::Invalid(report) => {
///         assert_eq!(report.message("name"), Some("This field is required"));
///     }
/// }
/// ```
#[must_use = "a validation outcome reports failures that should be handled"]
#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    /// Every field passed.
    Valid,
    /// At least one field failed; the report holds an entry per failing field.
    Invalid(Report),
}

impl Validation {
    /// Returns true if every field passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Returns true if at least one field failed.
    pub fn is_invalid(&self) -> bool {
        matches!(self, Validation::Invalid(_))
    }

    /// Returns the report, or `None` for a valid outcome.
    pub fn report(&self) -> Option<&Report> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(report) => Some(report),
        }
    }

    /// Consumes the outcome, returning the report if there is one.
    pub fn into_report(self) -> Option<Report> {
        match self {
            Validation::Valid => None,
            Validation::Invalid(report) => Some(report),
        }
    }

    /// Converts the outcome into a `Result`, with the report as the error.
    pub fn into_result(self) -> Result<(), Report> {
        match self {
            Validation::Valid => Ok(()),
            Validation::Invalid(report) => Err(report),
        }
    }
}

/// One field's entry in a [`Report`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldReport {
    /// A scalar or collection-level failure: the first failing rule's message.
    Message(String),
    /// A nested record failed; the sub-report is keyed by its field names.
    Nested(Report),
    /// Elements of a list-of-records field failed; keyed by zero-based index,
    /// with entries only for the indices that actually failed.
    Items(BTreeMap<usize, Report>),
}

impl FieldReport {
    /// Returns the message, if this entry is a plain failure message.
    pub fn as_message(&self) -> Option<&str> {
        match self {
            FieldReport::Message(message) => Some(message),
            _ => None,
        }
    }

    /// Returns the nested report, if this entry is a nested-record failure.
    pub fn as_nested(&self) -> Option<&Report> {
        match self {
            FieldReport::Nested(report) => Some(report),
            _ => None,
        }
    }

    /// Returns the per-index sub-reports, if this entry is a list failure.
    pub fn as_items(&self) -> Option<&BTreeMap<usize, Report>> {
        match self {
            FieldReport::Items(items) => Some(items),
            _ => None,
        }
    }

    /// Converts this entry into its wire shape: a message string, a nested
    /// object, or an object keyed by stringified zero-based index.
    pub fn to_json(&self) -> Json {
        match self {
            FieldReport::Message(message) => Json::String(message.clone()),
            FieldReport::Nested(report) => report.to_json(),
            FieldReport::Items(items) => Json::Object(
                items
                    .iter()
                    .map(|(index, report)| (index.to_string(), report.to_json()))
                    .collect(),
            ),
        }
    }
}

/// A per-field error mapping, ordered by field declaration.
///
/// Reports are produced by [`validate`](crate::validate); an empty report is
/// never handed to callers (a fully-valid pass yields [`Validation::Valid`]
/// instead).
///
/// # Example
///
/// ```rust
/// use triage::{validate, Record};
///
/// let record = Record::new()
///     .field("name", "ab", "required;min:3")
///     .field("age", 17, "min:18");
///
/// let report = validate(&record).into_report().unwrap();
/// assert_eq!(report.len(), 2);
/// assert_eq!(
///     report.message("name"),
///     Some("This field must be at least 3 characters")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Report {
    entries: IndexMap<String, FieldReport>,
}

impl Report {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, entry: FieldReport) {
        self.entries.insert(name.into(), entry);
    }

    /// Returns true if no field failed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of failing fields at this level.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entry for a field, if it failed.
    pub fn get(&self, name: &str) -> Option<&FieldReport> {
        self.entries.get(name)
    }

    /// Returns the failure message for a field, if it failed with a plain
    /// message (scalar or collection-level failure).
    pub fn message(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldReport::as_message)
    }

    /// Iterates over failing fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldReport)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Flattens the tree into `(path, message)` pairs, depth-first in
    /// declaration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use triage::{validate, Record};
    ///
    /// let address = Record::new().field("street", "", "required");
    /// let record = Record::new().field("addresses", vec![address], "min:1");
    ///
    /// let report = validate(&record).into_report().unwrap();
    /// let flat = report.flatten();
    /// assert_eq!(flat[0].0.to_string(), "addresses[0].street");
    /// assert_eq!(flat[0].1, "This field is required");
    /// ```
    pub fn flatten(&self) -> Vec<(FieldPath, &str)> {
        let mut out = Vec::new();
        self.flatten_into(&FieldPath::root(), &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, base: &FieldPath, out: &mut Vec<(FieldPath, &'a str)>) {
        for (name, entry) in &self.entries {
            let path = base.push_field(name);
            match entry {
                FieldReport::Message(message) => out.push((path, message.as_str())),
                FieldReport::Nested(report) => report.flatten_into(&path, out),
                FieldReport::Items(items) => {
                    for (index, report) in items {
                        report.flatten_into(&path.push_index(*index), out);
                    }
                }
            }
        }
    }

    /// Converts the report into its wire shape: an object keyed by field
    /// name, with message strings, nested objects, or index-keyed objects as
    /// values.
    pub fn to_json(&self) -> Json {
        Json::Object(
            self.entries
                .iter()
                .map(|(name, entry)| (name.clone(), entry.to_json()))
                .collect(),
        )
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flat = self.flatten();
        writeln!(f, "Validation failed with {} error(s):", flat.len())?;
        for (i, (path, message)) in flat.iter().enumerate() {
            writeln!(f, "  {}. {}: {}", i + 1, path, message)?;
        }
        Ok(())
    }
}

// Reports cross thread boundaries freely: all fields are owned types.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Report>();
    assert_sync::<Report>();
    assert_send::<Validation>();
    assert_sync::<Validation>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn message(text: &str) -> FieldReport {
        FieldReport::Message(text.to_string())
    }

    #[test]
    fn test_report_preserves_insertion_order() {
        let mut report = Report::new();
        report.insert("zulu", message("a"));
        report.insert("alpha", message("b"));

        let names: Vec<_> = report.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["zulu", "alpha"]);
    }

    #[test]
    fn test_message_accessor() {
        let mut report = Report::new();
        report.insert("name", message("This field is required"));

        assert_eq!(report.message("name"), Some("This field is required"));
        assert_eq!(report.message("other"), None);
    }

    #[test]
    fn test_message_accessor_is_none_for_nested() {
        let mut inner = Report::new();
        inner.insert("street", message("This field is required"));
        let mut report = Report::new();
        report.insert("address", FieldReport::Nested(inner));

        assert_eq!(report.message("address"), None);
        assert!(report.get("address").unwrap().as_nested().is_some());
    }

    #[test]
    fn test_to_json_shapes() {
        let mut element = Report::new();
        element.insert("street", message("This field is required"));
        let mut items = BTreeMap::new();
        items.insert(0, element);

        let mut report = Report::new();
        report.insert("name", message("too short"));
        report.insert("addresses", FieldReport::Items(items));

        assert_eq!(
            report.to_json(),
            json!({
                "name": "too short",
                "addresses": { "0": { "street": "This field is required" } }
            })
        );
    }

    #[test]
    fn test_flatten_walks_items_and_nested() {
        let mut street = Report::new();
        street.insert("street", message("This field is required"));
        let mut items = BTreeMap::new();
        items.insert(1, street);

        let mut report = Report::new();
        report.insert("addresses", FieldReport::Items(items));

        let flat = report.flatten();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].0.to_string(), "addresses[1].street");
    }

    #[test]
    fn test_display_numbered_lines() {
        let mut report = Report::new();
        report.insert("name", message("This field is required"));
        report.insert("age", message("This field must be at least 18"));

        let rendered = report.to_string();
        assert!(rendered.contains("2 error(s)"));
        assert!(rendered.contains("1. name: This field is required"));
        assert!(rendered.contains("2. age: This field must be at least 18"));
    }

    #[test]
    fn test_validation_accessors() {
        assert!(Validation::Valid.is_valid());
        assert!(Validation::Valid.report().is_none());
        assert!(Validation::Valid.into_result().is_ok());

        let mut report = Report::new();
        report.insert("name", message("x"));
        let invalid = Validation::Invalid(report.clone());
        assert!(invalid.is_invalid());
        assert_eq!(invalid.report(), Some(&report));
        assert_eq!(invalid.into_report(), Some(report));
    }
}
