use crate::error::StoreResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository over the canonical contact collection.
///
/// The collection is a flat list of contacts keyed by unique name. The
/// repository exclusively owns the canonical data; callers only ever hold
/// transient copies.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Retrieve every contact in listing order.
    async fn list_all(&self) -> StoreResult<Vec<Contact>>;

    /// Look up a contact by its exact name.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>>;

    /// Insert a new contact. Fails if the name is already taken.
    async fn add(&self, contact: Contact) -> StoreResult<()>;

    /// Replace the contact currently stored under `previous_name`.
    ///
    /// The replacement may carry a different name; the record keeps its
    /// position in the listing.
    async fn update(&self, contact: Contact, previous_name: &str) -> StoreResult<()>;

    /// Remove the contact with the given name.
    async fn delete(&self, name: &str) -> StoreResult<()>;

    /// Whether any contact has this exact name.
    async fn name_exists(&self, name: &str) -> StoreResult<bool>;

    /// Whether any contact has this exact phone number.
    async fn phone_exists(&self, phone_number: &str) -> StoreResult<bool>;

    /// Whether any contact has this exact email address.
    async fn email_exists(&self, email: &str) -> StoreResult<bool>;
}
