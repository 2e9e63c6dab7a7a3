//! The scalar rule evaluator.
//!
//! [`check_rule`] interprets one parsed rule against one value and returns
//! `None` on pass or `Some(message)` on failure. Three situations are
//! silent no-ops rather than failures, and tests pin each one down:
//!
//! - an unknown rule name (callers may keep non-validation metadata in the
//!   same tag space),
//! - a numeric argument that does not parse (`min:abc`),
//! - a rule applied to a value kind it cannot interpret (`min` on a
//!   boolean, `enum` on an integer).

use crate::rule::{render, template, RuleExpr};
use crate::validators;
use crate::value::Value;

/// Evaluates a single rule against a single value.
///
/// Returns `None` when the rule passes or does not apply, `Some(message)`
/// when it fails. Messages come from the canonical template table with the
/// raw argument substituted verbatim.
pub(crate) fn check_rule(rule: &RuleExpr, value: &Value) -> Option<String> {
    let arg = rule.arg();
    match rule.name() {
        "required" => check_required(value),
        "min" => check_bound(value, arg, "min"),
        "max" => check_bound(value, arg, "max"),
        "eq" => check_eq(value, arg),
        "ne" => check_ne(value, arg),
        "gt" | "gte" | "lt" | "lte" => check_ordering(rule.name(), value, arg),
        "enum" => check_enum(value, arg),
        "include" => check_include(value, arg),
        "email" => check_format(value, "email", validators::is_valid_email),
        "url" => check_format(value, "url", validators::is_valid_url),
        "ip" => check_format(value, "ip", validators::is_valid_ip),
        "ipv4" => check_format(value, "ipv4", validators::is_valid_ipv4),
        "date" => check_format(value, "date", validators::is_valid_date),
        _ => None,
    }
}

/// Renders the failure message for a rule, if the rule has a template.
fn fail(name: &str, arg: &str) -> Option<String> {
    template(name).map(|t| render(t, arg))
}

fn check_required(value: &Value) -> Option<String> {
    let missing = match value {
        Value::Str(s) => s.is_empty(),
        Value::Int(n) => *n == 0,
        Value::Float(f) => *f == 0.0,
        Value::List(items) => items.is_empty(),
        // Booleans have no empty state; records are handled by traversal.
        Value::Bool(_) | Value::Record(_) => false,
    };
    if missing {
        fail("required", "")
    } else {
        None
    }
}

/// `min`/`max` share one shape: measure the value, compare to the bound.
/// Strings measure character count and carry a unit in the message.
fn check_bound(value: &Value, arg: &str, name: &str) -> Option<String> {
    let bound: f64 = arg.parse().ok()?;
    let (measured, unit) = match value {
        Value::Str(s) => (s.chars().count() as f64, " characters"),
        Value::Int(n) => (*n as f64, ""),
        Value::Float(f) => (*f, ""),
        Value::List(items) => (items.len() as f64, ""),
        Value::Bool(_) | Value::Record(_) => return None,
    };
    let pass = match name {
        "min" => measured >= bound,
        _ => measured <= bound,
    };
    if pass {
        None
    } else {
        fail(name, arg).map(|message| message + unit)
    }
}

/// Shared match test for `eq`/`ne`. Returns `None` when the rule does not
/// apply to this value kind (or the argument is non-numeric for numbers).
///
/// For strings with a numeric argument this keeps the dual semantics the
/// engine has always had: the value matches when its character count equals
/// the number OR its text equals the raw argument.
fn eq_matches(value: &Value, arg: &str) -> Option<bool> {
    match value {
        Value::Str(s) => Some(match arg.parse::<f64>() {
            Ok(n) => s.chars().count() as f64 == n || s == arg,
            Err(_) => s == arg,
        }),
        Value::Int(n) => arg.parse::<f64>().ok().map(|a| *n as f64 == a),
        Value::Float(f) => arg.parse::<f64>().ok().map(|a| *f == a),
        Value::Bool(_) | Value::List(_) | Value::Record(_) => None,
    }
}

fn check_eq(value: &Value, arg: &str) -> Option<String> {
    match eq_matches(value, arg) {
        Some(false) => fail("eq", arg),
        _ => None,
    }
}

fn check_ne(value: &Value, arg: &str) -> Option<String> {
    match eq_matches(value, arg) {
        Some(true) => fail("ne", arg),
        _ => None,
    }
}

fn check_ordering(name: &str, value: &Value, arg: &str) -> Option<String> {
    let bound: f64 = arg.parse().ok()?;
    let measured = match value {
        Value::Int(n) => *n as f64,
        Value::Float(f) => *f,
        _ => return None,
    };
    let pass = match name {
        "gt" => measured > bound,
        "gte" => measured >= bound,
        "lt" => measured < bound,
        "lte" => measured <= bound,
        _ => return None,
    };
    if pass {
        None
    } else {
        fail(name, arg)
    }
}

fn check_enum(value: &Value, arg: &str) -> Option<String> {
    match value {
        // Case-sensitive, no trimming: the value must equal one token exactly.
        Value::Str(s) if !arg.split(',').any(|token| token == s) => fail("enum", arg),
        _ => None,
    }
}

fn check_include(value: &Value, arg: &str) -> Option<String> {
    match value {
        Value::Str(s) if !arg.contains(s.as_str()) => fail("include", arg),
        _ => None,
    }
}

/// Format rules (`email`, `url`, `ip`, `ipv4`, `date`) delegate to the
/// standalone predicates and apply only to strings.
fn check_format(value: &Value, name: &str, valid: fn(&str) -> bool) -> Option<String> {
    match value {
        Value::Str(s) if !valid(s) => fail(name, ""),
        _ => None,
    }
}
