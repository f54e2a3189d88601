//! Contact record
//!
//! The wire form uses camelCase field names and RFC 3339 timestamps:
//!
//! ```json
//! {
//!   "id": "1",
//!   "name": "Ada Lovelace",
//!   "email": "ada@example.com",
//!   "dateOfBirth": null,
//!   "createdAt": "2024-01-01T00:00:00Z",
//!   "updatedAt": "2024-01-01T00:00:00Z"
//! }
//! ```
//!
//! Incoming timestamps may also be bare `YYYY-MM-DD` dates, read as
//! midnight UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::ContactId;

/// A contact as persisted in the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Store-assigned unique key
    pub id: ContactId,
    /// Display name
    pub name: String,
    /// Email address, not validated here
    pub email: String,
    /// Date of birth, if known
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub date_of_birth: Option<DateTime<Utc>>,
    /// When the row was created
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
    /// When the row was last updated
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Creates a contact with no birth date whose update time equals its creation time
    pub fn new(
        id: ContactId,
        name: impl Into<String>,
        email: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            date_of_birth: None,
            created_at,
            updated_at: created_at,
        }
    }

    /// Sets the date of birth
    pub fn with_date_of_birth(mut self, date_of_birth: DateTime<Utc>) -> Self {
        self.date_of_birth = Some(date_of_birth);
        self
    }

    /// Sets the last update time
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }
}

mod timestamp {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{de::Error, Deserialize, Deserializer};

    fn parse<E: Error>(raw: &str) -> Result<DateTime<Utc>, E> {
        if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
            return Ok(ts.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
            .ok_or_else(|| E::custom(format!("invalid timestamp '{}'", raw)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw)
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ada() -> Contact {
        Contact::new(
            ContactId::new("1"),
            "Ada Lovelace",
            "ada@example.com",
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_serializes_camel_case_with_null_birth_date() {
        let json = serde_json::to_value(ada()).unwrap();

        assert_eq!(json["id"], "1");
        assert_eq!(json["name"], "Ada Lovelace");
        assert!(json["dateOfBirth"].is_null());
        assert!(json["createdAt"].as_str().unwrap().starts_with("2024-01-01T00:00:00"));
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_accepts_date_only_timestamps() {
        let contact: Contact = serde_json::from_str(
            r#"{"id":"1","name":"Ada Lovelace","email":"ada@example.com",
                "dateOfBirth":null,"createdAt":"2024-01-01","updatedAt":"2024-01-01"}"#,
        )
        .unwrap();

        assert_eq!(contact, ada());
    }

    #[test]
    fn test_missing_birth_date_is_none() {
        let contact: Contact = serde_json::from_str(
            r#"{"id":"2","name":"Grace","email":"grace@example.com",
                "createdAt":"2024-02-03T10:00:00.000Z","updatedAt":"2024-02-03T10:00:00.000Z"}"#,
        )
        .unwrap();

        assert!(contact.date_of_birth.is_none());
        assert_eq!(contact.created_at, Utc.with_ymd_and_hms(2024, 2, 3, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_rejects_garbage_timestamp() {
        let result: Result<Contact, _> = serde_json::from_str(
            r#"{"id":"1","name":"x","email":"y","createdAt":"yesterday","updatedAt":"2024-01-01"}"#,
        );
        assert!(result.is_err());
    }
}
