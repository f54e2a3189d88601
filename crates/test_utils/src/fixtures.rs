//! Pre-built Test Fixtures
//!
//! Ready-to-use contacts and timestamps. Values are fixed so assertions on
//! rendered output stay predictable.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::ContactId;
use domain_contact::Contact;

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Jan 1, 2024 at midnight UTC
    pub fn new_year_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    /// Mar 15, 2024 at noon UTC
    pub fn mid_march_2024() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    /// Dec 10, 1815 at midnight UTC
    pub fn ada_birthday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1815, 12, 10, 0, 0, 0).unwrap()
    }
}

/// Fixture for contact test data
pub struct ContactFixtures;

impl ContactFixtures {
    /// `{id:"1", name:"Ada Lovelace", email:"ada@example.com", dateOfBirth:null}` created 2024-01-01
    pub fn ada_lovelace() -> Contact {
        Contact::new(
            ContactId::new("1"),
            "Ada Lovelace",
            "ada@example.com",
            TemporalFixtures::new_year_2024(),
        )
    }

    /// A contact with a known birth date
    pub fn grace_hopper() -> Contact {
        Contact::new(
            ContactId::new("2"),
            "Grace Hopper",
            "grace@example.com",
            TemporalFixtures::mid_march_2024(),
        )
        .with_date_of_birth(Utc.with_ymd_and_hms(1906, 12, 9, 0, 0, 0).unwrap())
    }

    /// A contact whose name and email need HTML escaping
    pub fn markup_heavy() -> Contact {
        Contact::new(
            ContactId::new("3"),
            "<b>Bobby</b> & \"Tables\"",
            "bobby'tables@example.com",
            TemporalFixtures::new_year_2024(),
        )
    }

    /// The three fixtures above, in id order
    pub fn all() -> Vec<Contact> {
        vec![Self::ada_lovelace(), Self::grace_hopper(), Self::markup_heavy()]
    }
}
