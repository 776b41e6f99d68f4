//! Data structures for contact records and form submissions.

pub mod contact;

pub use contact::{Contact, ContactSubmission};
