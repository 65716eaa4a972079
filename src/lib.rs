//! # credstore
//!
//! Generic credential storage backed by the Windows Credential Manager.
//! A [`Credential`] is a plain value object (name, optional username,
//! optional password) with three store operations: [`Credential::load`],
//! [`Credential::save`], and [`Credential::delete`]. Each operation is a
//! single blocking call into the backing store.
//!
//! ## Architecture
//!
//! The library is organized into modular components:
//!
//! - **core**: The `Credential` domain type and its operations
//! - **adapters**: The `CredentialStore` boundary and its backing
//!   implementations (native Windows store, in-memory test double)
//! - **errors**: Unified error handling with `CredentialError`
//! - **infra**: Infrastructure concerns (logging)
//!
//! ## Platform Abstraction
//!
//! All Windows API calls are isolated behind the [`CredentialStore`] trait.
//! The crate ships one native implementation (Windows Credential Manager,
//! compiled only on Windows) plus an in-memory store so the contract tests
//! and examples run anywhere. Other platforms (keyring on Linux, Keychain on
//! macOS) would slot in as further trait implementations.
//!
//! ## Security Considerations
//!
//! - Passwords are stored encrypted by the OS in the Windows Credential
//!   Manager, with local-machine persistence
//! - Passwords are never logged; trace output carries lengths only
//! - Native record handles and secret buffers are released on every exit
//!   path, including failures
//!
//! ## Example
//!
//! ```
//! use credstore::{Credential, CredentialError, MemoryCredentialStore};
//!
//! fn main() -> Result<(), CredentialError> {
//!     let store = MemoryCredentialStore::new();
//!
//!     let credential = Credential::with_password("app/login", "alice", "s3cr3t");
//!     credential.save(&store)?;
//!
//!     let mut fetched = Credential::new("app/login");
//!     fetched.load(&store)?;
//!     assert_eq!(fetched.username(), Some("alice"));
//!     assert_eq!(fetched.password(), Some("s3cr3t"));
//!
//!     credential.delete(&store)?;
//!     Ok(())
//! }
//! ```
//!
//! On Windows, pass `system_store()` instead of the in-memory store to
//! operate on the real Credential Manager.

mod adapters;
mod core;
mod errors;
mod infra;

// Re-export commonly used types
pub use crate::core::Credential;
pub use adapters::{CredentialRecord, CredentialStore, MemoryCredentialStore};
pub use errors::CredentialError;
pub use infra::init_tracing;

// Platform-specific adapters
#[cfg(windows)]
pub use adapters::{system_store, WindowsCredentialStore};
