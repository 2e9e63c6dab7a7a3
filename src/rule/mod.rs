//! The rule-expression grammar.
//!
//! A rule tag is a semicolon-separated list of rule expressions, each of the
//! form `name` or `name:argument` — for example `"required;min:3;enum:a,b"`.
//! [`RuleExpr::parse`] splits one expression on the first `:`; everything
//! after it is the raw argument, interpreted later by the rule itself
//! (integer bound, comma list, and so on). There is no escaping and no
//! nesting.
//!
//! Malformed expressions are not errors: an expression with an empty name
//! parses successfully and evaluates as a no-op. This leniency is deliberate
//! and lets callers keep non-validation metadata in the same tag space.

mod messages;

pub(crate) mod eval;

pub(crate) use messages::{render, template};

/// A single parsed rule expression: a name plus a raw argument.
///
/// # Example
///
/// ```rust
/// use triage::RuleExpr;
///
/// let rule = RuleExpr::parse("min:3");
/// assert_eq!(rule.name(), "min");
/// assert_eq!(rule.arg(), "3");
///
/// let bare = RuleExpr::parse("required");
/// assert_eq!(bare.name(), "required");
/// assert_eq!(bare.arg(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleExpr {
    name: String,
    arg: String,
}

impl RuleExpr {
    /// Parses one rule expression.
    ///
    /// The expression is split on the first `:`. With no `:` the argument is
    /// empty. An empty name is preserved; the evaluator treats it as a no-op.
    pub fn parse(expr: &str) -> Self {
        match expr.split_once(':') {
            Some((name, arg)) => Self {
                name: name.to_string(),
                arg: arg.to_string(),
            },
            None => Self {
                name: expr.to_string(),
                arg: String::new(),
            },
        }
    }

    /// The rule name (the lookup key into the rule table).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The raw argument string. Empty when the expression had no `:`.
    pub fn arg(&self) -> &str {
        &self.arg
    }
}

/// Parses a semicolon-separated rule tag into its rule expressions.
///
/// Empty segments are dropped, so an empty tag yields an empty rule list and
/// a trailing `;` is harmless.
///
/// # Example
///
/// ```rust
/// use triage::parse_rules;
///
/// let rules = parse_rules("required;min:18;max:60");
/// assert_eq!(rules.len(), 3);
/// assert_eq!(rules[1].name(), "min");
/// assert_eq!(rules[1].arg(), "18");
///
/// assert!(parse_rules("").is_empty());
/// ```
pub fn parse_rules(tag: &str) -> Vec<RuleExpr> {
    tag.split(';')
        .filter(|expr| !expr.is_empty())
        .map(RuleExpr::parse)
        .collect()
}
