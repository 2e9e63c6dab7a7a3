//! Record and field declarations.
//!
//! A [`Record`] is the validation view of a caller's data: an ordered list
//! of fields, each declaring its reporting name, its rule tag, and its
//! value. Records are plain data — building one performs no validation and
//! the engine never mutates it.
//!
//! There is no runtime introspection anywhere: callers describe their shape
//! explicitly through the builder (or implement [`Validate`] once per type),
//! which keeps the engine total over any record shape while staying
//! statically typed.

use crate::engine;
use crate::report::Validation;
use crate::rule::{parse_rules, RuleExpr};
use crate::value::Value;

/// One declared field: reporting name, parsed rule list, and value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    rules: Vec<RuleExpr>,
    value: Value,
}

impl Field {
    /// The reporting name — the key under which failures appear in the
    /// report (callers typically pass their wire-format key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed rule expressions, in tag order.
    pub fn rules(&self) -> &[RuleExpr] {
        &self.rules
    }

    /// The field's value.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// An ordered set of declared fields.
///
/// Field order is the contract: rules run field by field in declaration
/// order, rules within a field run in tag order, and the report preserves
/// the same order. The first failing rule for a field short-circuits that
/// field's remaining rules, so a multi-violating field surfaces the message
/// of its earliest-declared failing rule.
///
/// # Example
///
/// ```rust
/// use triage::Record;
///
/// let record = Record::new()
///     .field("name", "ada", "required;min:3;max:20")
///     .field("age", 36, "required;min:18;max:60")
///     .field("status", "active", "enum:active,inactive");
///
/// assert!(record.validate().is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field: reporting name, value, and semicolon-separated rule
    /// tag. An empty tag declares the field with no rules; such fields are
    /// never reported and never recursed into.
    ///
    /// # Example
    ///
    /// ```rust
    /// use triage::{Record, Value};
    ///
    /// let address = Record::new()
    ///     .field("street", "12 Main St", "required")
    ///     .field("city", "", "required");
    ///
    /// let record = Record::new()
    ///     .field("address", address, "required")
    ///     .field("emails", Value::from(vec!["a@b.com"]), "required;max:3")
    ///     .field("note", "free-form, never checked", "");
    ///
    /// let report = record.validate().into_report().unwrap();
    /// assert!(report.get("address").is_some());
    /// ```
    pub fn field(mut self, name: impl Into<String>, value: impl Into<Value>, rules: &str) -> Self {
        self.fields.push(Field {
            name: name.into(),
            rules: parse_rules(rules),
            value: value.into(),
        });
        self
    }

    /// Iterates over the declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates this record. Equivalent to [`validate(&self)`](crate::validate).
    pub fn validate(&self) -> Validation {
        engine::validate(self)
    }
}

/// Implemented by types that can describe themselves as a [`Record`].
///
/// This is the registration point for caller-defined types: implement
/// [`record`](Validate::record) once and the provided
/// [`validate`](Validate::validate) method does the rest.
///
/// # Example
///
/// ```rust
/// use triage::{Record, Validate};
///
/// struct User {
///     name: String,
///     age: i64,
/// }
///
/// impl Validate for User {
///     fn record(&self) -> Record {
///         Record::new()
///             .field("name", self.name.as_str(), "required;min:3;max:20")
///             .field("age", self.age, "required;min:18;max:60")
///     }
/// }
///
/// let user = User { name: "test".into(), age: 17 };
/// let report = user.validate().into_report().unwrap();
/// assert_eq!(report.message("age"), Some("This field must be at least 18"));
/// ```
pub trait Validate {
    /// Builds the validation view of `self`.
    fn record(&self) -> Record;

    /// Validates the record view of `self`.
    fn validate(&self) -> Validation {
        engine::validate(&self.record())
    }
}
