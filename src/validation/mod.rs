//! The add/edit validation workflow.
//!
//! Decides whether a submitted (name, phoneNumber, email) triple may become a
//! stored contact. Checks run in a fixed order and every violated rule
//! contributes its message; nothing short-circuits, so a field missing
//! entirely still reports its format violation alongside the presence one.

use crate::domain::{EmailAddress, PhoneNumber};
use crate::error::StoreResult;
use crate::models::{Contact, ContactSubmission};
use crate::repositories::ContactRepository;
use std::sync::Arc;

pub const MSG_NAME_REQUIRED: &str = "Name is required";
pub const MSG_PHONE_REQUIRED: &str = "Phone Number is required";
pub const MSG_EMAIL_REQUIRED: &str = "E-mail is required";
pub const MSG_NAME_EXISTS: &str = "Name already exists";
pub const MSG_PHONE_EXISTS: &str = "Phone Number already exists";
pub const MSG_EMAIL_EXISTS: &str = "E-mail already exists";
pub const MSG_EMAIL_INVALID: &str = "Email Invalid";
pub const MSG_PHONE_INVALID: &str = "Phone Number Invalid";

/// Outcome of running the workflow on one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every rule passed; the record may be committed.
    Valid(Contact),

    /// At least one rule failed; messages preserve the order the checks ran.
    Invalid(Vec<String>),
}

impl ValidationOutcome {
    fn from_messages(submission: ContactSubmission, messages: Vec<String>) -> Self {
        if messages.is_empty() {
            Self::Valid(submission.into())
        } else {
            Self::Invalid(messages)
        }
    }
}

/// The validation workflow over the contact store.
#[derive(Clone)]
pub struct ContactWorkflow {
    store: Arc<dyn ContactRepository>,
}

impl ContactWorkflow {
    /// Create a workflow consulting the given store for uniqueness checks.
    pub fn new(store: Arc<dyn ContactRepository>) -> Self {
        Self { store }
    }

    /// Validate a submission for the add path.
    ///
    /// Check order: name/phone/email presence, name/phone/email uniqueness,
    /// email format, phone format.
    pub async fn validate_add(
        &self,
        submission: &ContactSubmission,
    ) -> StoreResult<ValidationOutcome> {
        let mut messages = Vec::new();

        self.check_presence(submission, &mut messages);

        if self.store.name_exists(&submission.name).await? {
            messages.push(MSG_NAME_EXISTS.to_string());
        }
        if self.store.phone_exists(&submission.phone_number).await? {
            messages.push(MSG_PHONE_EXISTS.to_string());
        }
        if self.store.email_exists(&submission.email).await? {
            messages.push(MSG_EMAIL_EXISTS.to_string());
        }

        self.check_formats(submission, &mut messages);

        Ok(ValidationOutcome::from_messages(
            submission.clone(),
            messages,
        ))
    }

    /// Validate a submission for the edit path.
    ///
    /// Name uniqueness only applies when the name changed away from
    /// `prior_name` and collides with a third-party record. Phone and email
    /// uniqueness are covered by a whole-record duplicate check that runs once
    /// the field-level rules pass, excluding the record under edit so a
    /// contact may keep its own phone and email.
    pub async fn validate_edit(
        &self,
        submission: &ContactSubmission,
        prior_name: &str,
    ) -> StoreResult<ValidationOutcome> {
        let mut messages = Vec::new();

        self.check_presence(submission, &mut messages);

        if submission.name != prior_name && self.store.name_exists(&submission.name).await? {
            messages.push(MSG_NAME_EXISTS.to_string());
        }

        self.check_formats(submission, &mut messages);

        if messages.is_empty() {
            messages = self.duplicate_conflicts(submission, prior_name).await?;
        }

        Ok(ValidationOutcome::from_messages(
            submission.clone(),
            messages,
        ))
    }

    fn check_presence(&self, submission: &ContactSubmission, messages: &mut Vec<String>) {
        if submission.name.is_empty() {
            messages.push(MSG_NAME_REQUIRED.to_string());
        }
        if submission.phone_number.is_empty() {
            messages.push(MSG_PHONE_REQUIRED.to_string());
        }
        if submission.email.is_empty() {
            messages.push(MSG_EMAIL_REQUIRED.to_string());
        }
    }

    fn check_formats(&self, submission: &ContactSubmission, messages: &mut Vec<String>) {
        if EmailAddress::new(submission.email.clone()).is_err() {
            messages.push(MSG_EMAIL_INVALID.to_string());
        }
        if PhoneNumber::new(submission.phone_number.clone()).is_err() {
            messages.push(MSG_PHONE_INVALID.to_string());
        }
    }

    /// Whole-record duplicate check against every contact except the one
    /// stored under `exclude_name`.
    async fn duplicate_conflicts(
        &self,
        submission: &ContactSubmission,
        exclude_name: &str,
    ) -> StoreResult<Vec<String>> {
        let contacts = self.store.list_all().await?;
        let others = contacts.iter().filter(|c| c.name != exclude_name);

        let mut messages = Vec::new();
        let mut phone_taken = false;
        let mut email_taken = false;
        for contact in others {
            phone_taken |= contact.phone_number == submission.phone_number;
            email_taken |= contact.email == submission.email;
        }
        if phone_taken {
            messages.push(MSG_PHONE_EXISTS.to_string());
        }
        if email_taken {
            messages.push(MSG_EMAIL_EXISTS.to_string());
        }
        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::JsonContactRepository;

    fn workflow_with(contacts: Vec<Contact>) -> ContactWorkflow {
        ContactWorkflow::new(Arc::new(JsonContactRepository::with_contacts(contacts)))
    }

    fn alice() -> Contact {
        Contact::new("Alice", "081234567890", "alice@example.com")
    }

    fn messages(outcome: ValidationOutcome) -> Vec<String> {
        match outcome {
            ValidationOutcome::Invalid(messages) => messages,
            ValidationOutcome::Valid(contact) => {
                panic!("expected rejection, got valid contact {:?}", contact)
            }
        }
    }

    #[tokio::test]
    async fn test_add_valid_submission() {
        let workflow = workflow_with(vec![alice()]);
        let submission = ContactSubmission::new("Bob", "081111111111", "bob@example.com");

        let outcome = workflow.validate_add(&submission).await.unwrap();
        assert_eq!(
            outcome,
            ValidationOutcome::Valid(Contact::new("Bob", "081111111111", "bob@example.com"))
        );
    }

    #[tokio::test]
    async fn test_add_empty_everything_collects_all_rules_in_order() {
        let workflow = workflow_with(vec![]);
        let submission = ContactSubmission::default();

        let messages = messages(workflow.validate_add(&submission).await.unwrap());
        assert_eq!(
            messages,
            vec![
                MSG_NAME_REQUIRED,
                MSG_PHONE_REQUIRED,
                MSG_EMAIL_REQUIRED,
                MSG_EMAIL_INVALID,
                MSG_PHONE_INVALID,
            ]
        );
    }

    #[tokio::test]
    async fn test_add_empty_name_only() {
        let workflow = workflow_with(vec![]);
        let submission = ContactSubmission::new("", "081111111111", "bob@example.com");

        let messages = messages(workflow.validate_add(&submission).await.unwrap());
        assert_eq!(messages, vec![MSG_NAME_REQUIRED]);
    }

    #[tokio::test]
    async fn test_add_duplicate_name() {
        let workflow = workflow_with(vec![alice()]);
        let submission = ContactSubmission::new("Alice", "089999999999", "bob@example.com");

        let messages = messages(workflow.validate_add(&submission).await.unwrap());
        assert_eq!(messages, vec![MSG_NAME_EXISTS]);
    }

    #[tokio::test]
    async fn test_add_duplicate_phone_and_email() {
        let workflow = workflow_with(vec![alice()]);
        let submission = ContactSubmission::new("Bob", "081234567890", "alice@example.com");

        let messages = messages(workflow.validate_add(&submission).await.unwrap());
        assert_eq!(messages, vec![MSG_PHONE_EXISTS, MSG_EMAIL_EXISTS]);
    }

    #[tokio::test]
    async fn test_add_bad_formats() {
        let workflow = workflow_with(vec![]);
        let submission = ContactSubmission::new("Bob", "12345", "not-an-email");

        let messages = messages(workflow.validate_add(&submission).await.unwrap());
        assert_eq!(messages, vec![MSG_EMAIL_INVALID, MSG_PHONE_INVALID]);
    }

    #[tokio::test]
    async fn test_edit_unchanged_submission_passes() {
        let workflow = workflow_with(vec![alice()]);
        let submission = ContactSubmission::new("Alice", "081234567890", "alice@example.com");

        let outcome = workflow.validate_edit(&submission, "Alice").await.unwrap();
        assert!(matches!(outcome, ValidationOutcome::Valid(_)));
    }

    #[tokio::test]
    async fn test_edit_rename_to_free_name_passes() {
        let workflow = workflow_with(vec![alice()]);
        let submission = ContactSubmission::new("Alicia", "081234567890", "alice@example.com");

        let outcome = workflow.validate_edit(&submission, "Alice").await.unwrap();
        assert!(matches!(outcome, ValidationOutcome::Valid(_)));
    }

    #[tokio::test]
    async fn test_edit_rename_onto_other_contact_rejected() {
        let bob = Contact::new("Bob", "081111111111", "bob@example.com");
        let workflow = workflow_with(vec![alice(), bob]);
        let submission = ContactSubmission::new("Bob", "081234567890", "alice@example.com");

        let messages = messages(workflow.validate_edit(&submission, "Alice").await.unwrap());
        assert_eq!(messages, vec![MSG_NAME_EXISTS]);
    }

    #[tokio::test]
    async fn test_edit_rejects_phone_of_other_contact() {
        let bob = Contact::new("Bob", "081111111111", "bob@example.com");
        let workflow = workflow_with(vec![alice(), bob]);
        let submission = ContactSubmission::new("Alice", "081111111111", "alice@example.com");

        let messages = messages(workflow.validate_edit(&submission, "Alice").await.unwrap());
        assert_eq!(messages, vec![MSG_PHONE_EXISTS]);
    }

    #[tokio::test]
    async fn test_edit_rejects_phone_and_email_of_other_contact() {
        let bob = Contact::new("Bob", "081111111111", "bob@example.com");
        let workflow = workflow_with(vec![alice(), bob]);
        let submission = ContactSubmission::new("Alice", "081111111111", "bob@example.com");

        let messages = messages(workflow.validate_edit(&submission, "Alice").await.unwrap());
        assert_eq!(messages, vec![MSG_PHONE_EXISTS, MSG_EMAIL_EXISTS]);
    }

    #[tokio::test]
    async fn test_edit_field_rules_run_before_duplicate_check() {
        // With a field-level failure present, the duplicate check must not add
        // its messages on top.
        let bob = Contact::new("Bob", "081111111111", "bob@example.com");
        let workflow = workflow_with(vec![alice(), bob]);
        let submission = ContactSubmission::new("Alice", "081111111111", "broken");

        let messages = messages(workflow.validate_edit(&submission, "Alice").await.unwrap());
        assert_eq!(messages, vec![MSG_EMAIL_INVALID]);
    }
}
