//! # Triage
//!
//! A declarative field-validation engine: describe a record's fields with
//! short tag-style rules (`"required"`, `"min:3"`, `"enum:a,b"`), validate,
//! and get back a structured report of which fields failed and why.
//!
//! ## Overview
//!
//! Rules are evaluated per field in declaration order, and the first failing
//! rule settles a field — each field surfaces at most one message per pass.
//! Nested records are traversed recursively, and lists of records report
//! failures per element index, so the report mirrors the shape of the data.
//!
//! Unknown rule names, unparseable rule arguments, and rules applied to a
//! value kind they cannot interpret are deliberate no-ops, never failures.
//! This keeps the tag space open for caller metadata and is a tested part of
//! the contract.
//!
//! ## Core Types
//!
//! - [`Record`] / [`Field`]: the declared validation view of caller data
//! - [`Value`]: the closed union of field value kinds
//! - [`Validation`]: the outcome — [`Valid`](Validation::Valid) or a [`Report`]
//! - [`Report`] / [`FieldReport`]: the nested per-field error mapping
//! - [`RuleExpr`]: one parsed `name:argument` rule expression
//!
//! ## Example
//!
//! ```rust
//! use triage::{validate, Record, Value};
//!
//! let addresses: Value = [Record::new()
//!     .field("label", "Home", "enum:Home,Office")
//!     .field("street", "", "required")
//!     .field("city", "Dhaka", "required")]
//! .into_iter()
//! .collect();
//!
//! let user = Record::new()
//!     .field("name", "test", "required;min:3;max:20")
//!     .field("age", 17, "required;min:18;max:60")
//!     .field("email", "example@gmail.com", "required;email")
//!     .field("addresses", addresses, "required;min:1;max:3")
//!     .field("gender", "mole", "enum:male,female");
//!
//! let report = validate(&user).into_report().unwrap();
//!
//! assert_eq!(report.message("age"), Some("This field must be at least 18"));
//! assert_eq!(
//!     report.message("gender"),
//!     Some("This field must be one of the following values: male,female")
//! );
//!
//! // The one broken address is reported under its index.
//! let items = report.get("addresses").unwrap().as_items().unwrap();
//! assert_eq!(
//!     items[&0].message("street"),
//!     Some("This field is required")
//! );
//! ```
//!
//! The format validators are also exported as plain predicates:
//!
//! ```rust
//! assert!(triage::is_valid_email("someone@example.com"));
//! assert!(!triage::is_valid_date("not a date"));
//! ```

pub mod engine;
pub mod error;
pub mod path;
pub mod record;
pub mod report;
pub mod rule;
pub mod validators;
pub mod value;

pub use engine::{validate, validate_value};
pub use error::ValidateError;
pub use path::{FieldPath, PathSegment};
pub use record::{Field, Record, Validate};
pub use report::{FieldReport, Report, Validation};
pub use rule::{parse_rules, RuleExpr};
pub use validators::{is_valid_date, is_valid_email, is_valid_ip, is_valid_ipv4, is_valid_url};
pub use value::{Kind, Value};
