//! Request handlers

pub mod contacts;
pub mod health;
pub mod page;
