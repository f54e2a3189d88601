//! Custom Test Assertions
//!
//! Assertions comparing the JSON wire form of contacts with domain values,
//! with messages that name the offending field.

use chrono::{DateTime, Utc};
use domain_contact::Contact;
use serde_json::Value;

fn parse_timestamp(value: &Value, field: &str) -> DateTime<Utc> {
    let raw = value
        .as_str()
        .unwrap_or_else(|| panic!("Expected '{}' to be a string, got {}", field, value));
    DateTime::parse_from_rfc3339(raw)
        .unwrap_or_else(|e| panic!("Field '{}' is not RFC 3339 ({}): {}", field, e, raw))
        .with_timezone(&Utc)
}

/// Asserts that one JSON object carries exactly the fields of `expected`
///
/// # Panics
///
/// Panics naming the first field whose value differs
pub fn assert_contact_json_eq(actual: &Value, expected: &Contact) {
    assert_eq!(actual["id"], expected.id.as_str(), "id mismatch");
    assert_eq!(actual["name"], expected.name.as_str(), "name mismatch for {}", expected.id);
    assert_eq!(actual["email"], expected.email.as_str(), "email mismatch for {}", expected.id);

    match expected.date_of_birth {
        Some(dob) => assert_eq!(
            parse_timestamp(&actual["dateOfBirth"], "dateOfBirth"),
            dob,
            "dateOfBirth mismatch for {}",
            expected.id
        ),
        None => assert!(
            actual["dateOfBirth"].is_null(),
            "Expected null dateOfBirth for {}, got {}",
            expected.id,
            actual["dateOfBirth"]
        ),
    }

    assert_eq!(
        parse_timestamp(&actual["createdAt"], "createdAt"),
        expected.created_at,
        "createdAt mismatch for {}",
        expected.id
    );
    assert_eq!(
        parse_timestamp(&actual["updatedAt"], "updatedAt"),
        expected.updated_at,
        "updatedAt mismatch for {}",
        expected.id
    );
}

/// Asserts that a JSON array matches `expected` element by element, in order
pub fn assert_contacts_json_eq(actual: &Value, expected: &[Contact]) {
    let items = actual
        .as_array()
        .unwrap_or_else(|| panic!("Expected a JSON array, got {}", actual));

    assert_eq!(
        items.len(),
        expected.len(),
        "Expected {} contacts, got {}",
        expected.len(),
        items.len()
    );

    for (item, contact) in items.iter().zip(expected) {
        assert_contact_json_eq(item, contact);
    }
}
