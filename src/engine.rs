//! The structural traversal engine and validation entry points.
//!
//! [`validate`] walks a record's declared fields in order, dispatching each
//! one on its value kind:
//!
//! - nested records are traversed recursively,
//! - lists have their collection-level rules checked first, then (for lists
//!   of records) each element traversed with failures keyed by index,
//! - scalars have their rules evaluated in tag order, first failure wins.
//!
//! Traversal terminates because input records are finite trees; recursion
//! depth equals the nesting depth of the record.

use std::collections::BTreeMap;

use crate::error::ValidateError;
use crate::record::Record;
use crate::report::{FieldReport, Report, Validation};
use crate::rule::eval::check_rule;
use crate::rule::RuleExpr;
use crate::value::Value;

/// Validates a record, producing [`Validation::Valid`] iff no field failed.
///
/// Fields are processed in declaration order and each contributes at most
/// one report entry. Validation is a pure function of the record: the same
/// unmodified record always yields the same outcome.
///
/// # Example
///
/// ```rust
/// use triage::{validate, Record};
///
/// let record = Record::new()
///     .field("email", "example@gmail.com", "required;email")
///     .field("age", 17, "required;min:18;max:60");
///
/// let report = validate(&record).into_report().unwrap();
/// assert_eq!(report.message("email"), None);
/// assert_eq!(report.message("age"), Some("This field must be at least 18"));
/// ```
pub fn validate(record: &Record) -> Validation {
    let report = traverse(record);
    if report.is_empty() {
        Validation::Valid
    } else {
        Validation::Invalid(report)
    }
}

/// Validates a value that must be a record.
///
/// This is the checked entry point for callers holding a [`Value`] of
/// unknown kind: anything other than [`Value::Record`] fails fast with
/// [`ValidateError::InvalidInput`] instead of silently passing.
///
/// # Example
///
/// ```rust
/// use triage::{validate_value, Record, ValidateError, Value};
///
/// let value = Value::from(Record::new().field("name", "ada", "required"));
/// assert!(validate_value(&value).unwrap().is_valid());
///
/// let err = validate_value(&Value::from(42)).unwrap_err();
/// assert_eq!(err, ValidateError::InvalidInput { kind: "integer" });
/// ```
pub fn validate_value(value: &Value) -> Result<Validation, ValidateError> {
    match value {
        Value::Record(record) => Ok(validate(record)),
        other => Err(ValidateError::InvalidInput {
            kind: other.type_name(),
        }),
    }
}

/// Walks one record level, returning an entry per failing field.
pub(crate) fn traverse(record: &Record) -> Report {
    let mut report = Report::new();

    for field in record.fields() {
        // Invariant: a field with no declared rules never produces an entry
        // and is never recursed into.
        if field.rules().is_empty() {
            continue;
        }

        match field.value() {
            Value::Record(nested) => {
                let sub = traverse(nested);
                if !sub.is_empty() {
                    report.insert(field.name(), FieldReport::Nested(sub));
                }
            }
            Value::List(items) => {
                if let Some(entry) = check_list(field.rules(), field.value(), items) {
                    report.insert(field.name(), entry);
                }
            }
            _ => {
                if let Some(message) = first_failure(field.rules(), field.value()) {
                    report.insert(field.name(), FieldReport::Message(message));
                }
            }
        }
    }

    report
}

/// Collection-level rules run against the list itself first; a failure there
/// settles the field. Otherwise record elements are traversed individually
/// and failing indices collected.
fn check_list(rules: &[RuleExpr], list: &Value, items: &[Value]) -> Option<FieldReport> {
    if let Some(message) = first_failure(rules, list) {
        return Some(FieldReport::Message(message));
    }

    let mut failed = BTreeMap::new();
    for (index, item) in items.iter().enumerate() {
        if let Value::Record(element) = item {
            let sub = traverse(element);
            if !sub.is_empty() {
                failed.insert(index, sub);
            }
        }
    }

    if failed.is_empty() {
        None
    } else {
        Some(FieldReport::Items(failed))
    }
}

/// Evaluates rules in tag order, returning the first failure message.
fn first_failure(rules: &[RuleExpr], value: &Value) -> Option<String> {
    rules.iter().find_map(|rule| check_rule(rule, value))
}
