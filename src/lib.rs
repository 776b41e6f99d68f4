//! Contact Book - a server-rendered web application for managing contacts.
//!
//! Contacts are records of name, phone number, and email, keyed by unique
//! name. Mutating routes run a fixed-order validation workflow before
//! touching the store; failures travel back to the originating form as an
//! error list in the query string, successes as a one-shot flash notice.
//!
//! # Architecture
//!
//! - **models**: Contact records and raw form submissions
//! - **domain**: Validated value objects for email addresses and phone numbers
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Contact store trait and the JSON-file implementation
//! - **validation**: The add/edit validation workflow
//! - **flash**: One-shot success/error notices surviving a single redirect
//! - **pages**: Server-side HTML rendering
//! - **server**: Route dispatcher and HTTP handlers

pub mod config;
pub mod domain;
pub mod error;
pub mod flash;
pub mod models;
pub mod pages;
pub mod repositories;
pub mod server;
pub mod validation;

pub use config::Config;
pub use error::{ConfigError, StoreError};
pub use flash::FlashStore;
pub use models::{Contact, ContactSubmission};
pub use repositories::{ContactRepository, JsonContactRepository};
pub use server::{build_router, AppState};
pub use validation::{ContactWorkflow, ValidationOutcome};
