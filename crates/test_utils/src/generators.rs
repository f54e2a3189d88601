//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating contacts.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::ContactId;
use domain_contact::Contact;
use proptest::prelude::*;

/// Strategy for store-style ids
pub fn contact_id_strategy() -> impl Strategy<Value = ContactId> {
    "[a-z0-9]{1,25}".prop_map(ContactId::from)
}

/// Strategy for timestamps with second precision between 1900 and 2100
pub fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (-2_208_988_800i64..4_102_444_800i64)
        .prop_map(|secs| Utc.timestamp_opt(secs, 0).single().expect("in range"))
}

/// Strategy for arbitrary contacts, including unicode names
pub fn contact_strategy() -> impl Strategy<Value = Contact> {
    (
        contact_id_strategy(),
        "\\PC{1,40}",
        "[a-z]{1,12}@[a-z]{1,12}\\.(com|org|net)",
        proptest::option::of(timestamp_strategy()),
        timestamp_strategy(),
        timestamp_strategy(),
    )
        .prop_map(|(id, name, email, date_of_birth, created_at, updated_at)| Contact {
            id,
            name,
            email,
            date_of_birth,
            created_at,
            updated_at,
        })
}

/// Strategy for contact collections with unique ids, possibly empty
pub fn contacts_strategy(max_len: usize) -> impl Strategy<Value = Vec<Contact>> {
    proptest::collection::vec(contact_strategy(), 0..=max_len).prop_map(|contacts| {
        contacts
            .into_iter()
            .enumerate()
            .map(|(i, mut c)| {
                c.id = ContactId::new(format!("{}-{}", c.id, i));
                c
            })
            .collect()
    })
}
