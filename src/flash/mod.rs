//! One-shot flash notices.
//!
//! A notice is set by the handler that performs a mutation and read exactly
//! once by the next listing render, surviving exactly one redirect. Success
//! and error slots are independent.

use std::sync::Mutex;

/// Holder for the one-shot `msgSuccess` / `msgError` notices.
#[derive(Debug, Default)]
pub struct FlashStore {
    success: Mutex<Option<String>>,
    error: Mutex<Option<String>>,
}

impl FlashStore {
    /// Create an empty flash store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the success notice, replacing any unread one.
    pub fn set_success(&self, message: impl Into<String>) {
        *self.success.lock().expect("flash lock poisoned") = Some(message.into());
    }

    /// Set the error notice, replacing any unread one.
    pub fn set_error(&self, message: impl Into<String>) {
        *self.error.lock().expect("flash lock poisoned") = Some(message.into());
    }

    /// Take the success notice, clearing it.
    pub fn take_success(&self) -> Option<String> {
        self.success.lock().expect("flash lock poisoned").take()
    }

    /// Take the error notice, clearing it.
    pub fn take_error(&self) -> Option<String> {
        self.error.lock().expect("flash lock poisoned").take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_read_once_then_cleared() {
        let flash = FlashStore::new();
        flash.set_success("Contact added successfully!");

        assert_eq!(
            flash.take_success(),
            Some("Contact added successfully!".to_string())
        );
        assert_eq!(flash.take_success(), None);
    }

    #[test]
    fn test_flash_slots_are_independent() {
        let flash = FlashStore::new();
        flash.set_success("ok");
        flash.set_error("Request Invalid");

        assert_eq!(flash.take_error(), Some("Request Invalid".to_string()));
        assert_eq!(flash.take_success(), Some("ok".to_string()));
    }

    #[test]
    fn test_flash_set_replaces_unread_notice() {
        let flash = FlashStore::new();
        flash.set_success("first");
        flash.set_success("second");

        assert_eq!(flash.take_success(), Some("second".to_string()));
        assert_eq!(flash.take_success(), None);
    }
}
