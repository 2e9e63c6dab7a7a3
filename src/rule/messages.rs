//! Canonical failure-message templates.
//!
//! One template per rule, process-wide and read-only. `%s` is substituted
//! with the raw argument string, verbatim — rendering never reformats the
//! argument.

/// Template table, rule name to message template.
const TEMPLATES: &[(&str, &str)] = &[
    ("required", "This field is required"),
    ("min", "This field must be at least %s"),
    ("max", "This field must be at most %s"),
    ("eq", "This field must be equal to %s"),
    ("ne", "This field must not be equal to %s"),
    ("gt", "This field must be greater than %s"),
    ("gte", "This field must be greater than or equal to %s"),
    ("lt", "This field must be less than %s"),
    ("lte", "This field must be less than or equal to %s"),
    ("enum", "This field must be one of the following values: %s"),
    ("include", "This field must include one of the following values: %s"),
    ("email", "This field must be a valid email address"),
    ("url", "This field must be a valid URL"),
    ("ip", "This field must be a valid IP address"),
    ("ipv4", "This field must be a valid IPv4 address"),
    ("date", "This field must be a valid date"),
];

/// Looks up the message template for a rule name.
pub(crate) fn template(name: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(rule, _)| *rule == name)
        .map(|(_, template)| *template)
}

/// Renders a template, substituting `%s` with the raw argument.
pub(crate) fn render(template: &str, arg: &str) -> String {
    template.replace("%s", arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_has_a_template() {
        for name in [
            "required", "min", "max", "eq", "ne", "gt", "gte", "lt", "lte", "enum", "include",
            "email", "url", "ip", "ipv4", "date",
        ] {
            assert!(template(name).is_some(), "missing template for {}", name);
        }
    }

    #[test]
    fn test_unknown_rule_has_no_template() {
        assert!(template("json").is_none());
        assert!(template("").is_none());
    }

    #[test]
    fn test_render_substitutes_raw_argument() {
        let rendered = render(template("enum").unwrap(), "male,female");
        assert_eq!(
            rendered,
            "This field must be one of the following values: male,female"
        );
    }

    #[test]
    fn test_render_without_placeholder() {
        let rendered = render(template("required").unwrap(), "ignored");
        assert_eq!(rendered, "This field is required");
    }
}
