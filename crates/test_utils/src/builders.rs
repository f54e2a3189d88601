//! Test Data Builders
//!
//! Builder for contacts that lets a test set only the fields it cares about.

use chrono::{DateTime, Utc};
use core_kernel::ContactId;
use domain_contact::Contact;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;

use crate::fixtures::TemporalFixtures;

/// Builder for constructing test contacts
pub struct TestContactBuilder {
    id: String,
    name: String,
    email: String,
    date_of_birth: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Default for TestContactBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContactBuilder {
    /// Creates a new builder with deterministic default values
    pub fn new() -> Self {
        Self {
            id: "contact-1".to_string(),
            name: "Test Contact".to_string(),
            email: "test@example.com".to_string(),
            date_of_birth: None,
            created_at: TemporalFixtures::new_year_2024(),
            updated_at: None,
        }
    }

    /// Creates a builder with a faked name and email
    pub fn random() -> Self {
        Self::new()
            .with_name(Name().fake::<String>())
            .with_email(SafeEmail().fake::<String>())
    }

    /// Sets the id
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the date of birth
    pub fn with_date_of_birth(mut self, date: DateTime<Utc>) -> Self {
        self.date_of_birth = Some(date);
        self
    }

    /// Sets the creation time
    pub fn with_created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Sets the update time (defaults to the creation time)
    pub fn with_updated_at(mut self, at: DateTime<Utc>) -> Self {
        self.updated_at = Some(at);
        self
    }

    /// Builds the contact
    pub fn build(self) -> Contact {
        Contact {
            id: ContactId::new(self.id),
            name: self.name,
            email: self.email,
            date_of_birth: self.date_of_birth,
            created_at: self.created_at,
            updated_at: self.updated_at.unwrap_or(self.created_at),
        }
    }
}

/// Builds `count` faked contacts with ids `contact-0`, `contact-1`, ...
pub fn random_contacts(count: usize) -> Vec<Contact> {
    (0..count)
        .map(|i| TestContactBuilder::random().with_id(format!("contact-{}", i)).build())
        .collect()
}
