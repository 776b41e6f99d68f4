use crate::error::{StoreError, StoreResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

/// Contact repository backed by a flat JSON array on disk.
///
/// The whole collection lives in memory behind an `RwLock`; every mutation
/// rewrites the data file before returning, so the file always reflects the
/// last committed state. Constructed without a path it is purely in-memory,
/// which is what the tests use.
pub struct JsonContactRepository {
    contacts: RwLock<Vec<Contact>>,
    path: Option<PathBuf>,
}

impl JsonContactRepository {
    /// Open a repository bound to a JSON file, loading any existing contacts.
    ///
    /// A missing file is an empty collection, not an error; it is created on
    /// the first mutation.
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let contacts = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };

        debug!(path = %path.display(), count = contacts.len(), "contact file loaded");

        Ok(Self {
            contacts: RwLock::new(contacts),
            path: Some(path),
        })
    }

    /// Create an empty in-memory repository with no file binding.
    pub fn in_memory() -> Self {
        Self {
            contacts: RwLock::new(Vec::new()),
            path: None,
        }
    }

    /// Seed an in-memory repository with initial contacts.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
            path: None,
        }
    }

    /// Number of contacts currently held.
    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    /// Whether the collection is empty.
    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }

    async fn persist(&self, contacts: &[Contact]) -> StoreResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let bytes = serde_json::to_vec_pretty(contacts)?;
        tokio::fs::write(path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl ContactRepository for JsonContactRepository {
    async fn list_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.contacts.read().await.clone())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().find(|c| c.name == name).cloned())
    }

    async fn add(&self, contact: Contact) -> StoreResult<()> {
        let mut contacts = self.contacts.write().await;

        if contacts.iter().any(|c| c.name == contact.name) {
            return Err(StoreError::DuplicateName(contact.name));
        }

        contacts.push(contact);
        self.persist(&contacts).await
    }

    async fn update(&self, contact: Contact, previous_name: &str) -> StoreResult<()> {
        let mut contacts = self.contacts.write().await;

        let index = contacts
            .iter()
            .position(|c| c.name == previous_name)
            .ok_or_else(|| StoreError::NotFound(previous_name.to_string()))?;

        if contact.name != previous_name && contacts.iter().any(|c| c.name == contact.name) {
            return Err(StoreError::DuplicateName(contact.name));
        }

        contacts[index] = contact;
        self.persist(&contacts).await
    }

    async fn delete(&self, name: &str) -> StoreResult<()> {
        let mut contacts = self.contacts.write().await;

        let index = contacts
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;

        contacts.remove(index);
        self.persist(&contacts).await
    }

    async fn name_exists(&self, name: &str) -> StoreResult<bool> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().any(|c| c.name == name))
    }

    async fn phone_exists(&self, phone_number: &str) -> StoreResult<bool> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().any(|c| c.phone_number == phone_number))
    }

    async fn email_exists(&self, email: &str) -> StoreResult<bool> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().any(|c| c.email == email))
    }
}
