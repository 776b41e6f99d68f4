//! Domain value objects.
//!
//! Type-safe wrappers for email addresses and phone numbers. Both validate at
//! construction time; the validation workflow maps a failed construction to
//! the corresponding form error message.

pub mod email;
pub mod errors;
pub mod phone;

pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
