//! Standalone format validators.
//!
//! Pure `&str -> bool` predicates with no dependency on the traversal
//! engine. The rule evaluator delegates to them for the `email`, `url`,
//! `ip`, `ipv4`, and `date` rules, and they are exported for direct use.

use std::net::{IpAddr, Ipv4Addr};

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Mailbox-address pattern in the WHATWG style: printable local part, `@`,
/// dot-separated label sequence. Compiled once.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^[a-zA-Z0-9.!\#$%&'*+/=?^_`{|}~-]+
        @
        [a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?
        (?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

/// Date-only layouts, tried before the datetime layouts.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Datetime layouts, including the literal-`Z` and millisecond variants.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S%.3fZ",
];

/// Returns true if `s` is an RFC-5322-style mailbox address.
///
/// # Example
///
/// ```rust
/// use triage::is_valid_email;
///
/// assert!(is_valid_email("example@gmail.com"));
/// assert!(!is_valid_email("test.email"));
/// ```
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_REGEX.is_match(s)
}

/// Returns true if `s` parses as an absolute URI.
///
/// # Example
///
/// ```rust
/// use triage::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/path?q=1"));
/// assert!(!is_valid_url("example.com"));
/// ```
pub fn is_valid_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

/// Returns true if `s` is a valid IP literal, v4 or v6.
///
/// # Example
///
/// ```rust
/// use triage::is_valid_ip;
///
/// assert!(is_valid_ip("192.168.0.1"));
/// assert!(is_valid_ip("::1"));
/// assert!(!is_valid_ip("192.168.0"));
/// ```
pub fn is_valid_ip(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}

/// Returns true if `s` is a valid IPv4 literal specifically.
///
/// # Example
///
/// ```rust
/// use triage::is_valid_ipv4;
///
/// assert!(is_valid_ipv4("10.0.0.1"));
/// assert!(!is_valid_ipv4("::1"));
/// ```
pub fn is_valid_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

/// Returns true if `s` matches any accepted date or datetime layout.
///
/// Accepted layouts, tried in order: `YYYY-MM-DD`, `YYYY/MM/DD`,
/// `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`, `YYYY-MM-DDTHH:MM:SSZ`,
/// `YYYY-MM-DDTHH:MM:SS.sssZ`. Calendar validity is enforced — `2024-02-30`
/// is rejected, not just shape-checked.
///
/// # Example
///
/// ```rust
/// use triage::is_valid_date;
///
/// assert!(is_valid_date("2024-01-15"));
/// assert!(is_valid_date("2024-01-15T10:30:00.250Z"));
/// assert!(!is_valid_date("15/01/2024"));
/// ```
pub fn is_valid_date(s: &str) -> bool {
    DATE_FORMATS
        .iter()
        .any(|layout| NaiveDate::parse_from_str(s, layout).is_ok())
        || DATETIME_FORMATS
            .iter()
            .any(|layout| NaiveDateTime::parse_from_str(s, layout).is_ok())
}
