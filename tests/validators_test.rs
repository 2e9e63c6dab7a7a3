//! Integration tests for the standalone format validators.

use triage::{is_valid_date, is_valid_email, is_valid_ip, is_valid_ipv4, is_valid_url};

#[test]
fn test_email_validation() {
    assert!(is_valid_email("example@gmail.com"));
    assert!(is_valid_email("first.last@example.co.uk"));
    assert!(is_valid_email("user+tag@example.com"));

    assert!(!is_valid_email("test.email"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("@host"));
    assert!(!is_valid_email("two words@example.com"));
    assert!(!is_valid_email(""));
}

#[test]
fn test_url_validation() {
    assert!(is_valid_url("http://example.com"));
    assert!(is_valid_url("https://example.com/a/b?q=1"));
    assert!(is_valid_url("ftp://files.example.com"));

    assert!(!is_valid_url("example.com"));
    assert!(!is_valid_url("/relative/path"));
    assert!(!is_valid_url("not a url"));
    assert!(!is_valid_url(""));
}

#[test]
fn test_ip_validation() {
    assert!(is_valid_ip("0.0.0.0"));
    assert!(is_valid_ip("255.255.255.255"));
    assert!(is_valid_ip("::1"));
    assert!(is_valid_ip("2001:db8:85a3::8a2e:370:7334"));

    assert!(!is_valid_ip("256.1.1.1"));
    assert!(!is_valid_ip("1.2.3"));
    assert!(!is_valid_ip("host.example.com"));
    assert!(!is_valid_ip(""));
}

#[test]
fn test_ipv4_validation() {
    assert!(is_valid_ipv4("192.168.0.1"));
    assert!(is_valid_ipv4("8.8.8.8"));

    assert!(!is_valid_ipv4("::1"));
    assert!(!is_valid_ipv4("192.168.0.256"));
    assert!(!is_valid_ipv4("192.168.0"));
}

#[test]
fn test_date_validation_accepted_layouts() {
    assert!(is_valid_date("2024-01-15"));
    assert!(is_valid_date("2024/01/15"));
    assert!(is_valid_date("2024-01-15 10:30:00"));
    assert!(is_valid_date("2024-01-15T10:30:00"));
    assert!(is_valid_date("2024-01-15T10:30:00Z"));
    assert!(is_valid_date("2024-01-15T10:30:00.123Z"));
}

#[test]
fn test_date_validation_rejected_inputs() {
    assert!(!is_valid_date("15-01-2024"));
    assert!(!is_valid_date("2024-1-a"));
    assert!(!is_valid_date("2024-01-15T10:30"));
    assert!(!is_valid_date("2024-01-15T10:30:00+06:00"));
    assert!(!is_valid_date("yesterday"));
    assert!(!is_valid_date(""));
}

#[test]
fn test_date_validation_checks_the_calendar() {
    assert!(is_valid_date("2024-02-29"));
    assert!(!is_valid_date("2023-02-29"));
    assert!(!is_valid_date("2024-00-10"));
    assert!(!is_valid_date("2024-04-31"));
}
