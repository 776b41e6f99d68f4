//! Contact model.

use serde::{Deserialize, Serialize};

/// A contact record.
///
/// The name is the primary key; there is no separate numeric identifier.
/// Field names serialize in camelCase, which is both the data-file format and
/// the naming the HTML forms submit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Full name, unique across the collection
    pub name: String,

    /// Mobile phone number
    pub phone_number: String,

    /// Email address
    pub email: String,
}

impl Contact {
    /// Create a new contact.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }
}

/// A raw, unvalidated form submission.
///
/// Exactly the fields the add and edit forms post; the validation workflow
/// decides whether it may become a [`Contact`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone_number: String,

    #[serde(default)]
    pub email: String,
}

impl ContactSubmission {
    /// Create a submission from raw field values.
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }
}

impl From<ContactSubmission> for Contact {
    fn from(submission: ContactSubmission) -> Self {
        Contact {
            name: submission.name,
            phone_number: submission.phone_number,
            email: submission.email,
        }
    }
}
