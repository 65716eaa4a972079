//! Credential store abstraction
//!
//! Defines the boundary between the in-memory credential representation and
//! a backing store. The native Windows implementation lives in
//! `adapters::windows`; an in-memory double for tests and examples lives in
//! `adapters::memory`.

use crate::errors::CredentialError;

/// A record fetched from a backing store
///
/// The secret payload is carried as raw bytes; interpreting it (this crate
/// always writes UTF-8 text) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    /// Username field of the record, absent when the stored record carries
    /// no username
    pub username: Option<String>,
    /// Raw secret payload; empty when the stored record carries no blob
    pub secret: Vec<u8>,
}

/// Trait for credential storage operations
///
/// This trait abstracts credential storage to enable:
/// - Testing with an in-memory implementation
/// - Future support for other platforms (keyring on Linux, Keychain on macOS)
/// - Easier reasoning about credential operations
///
/// Only generic name/username/secret records with local-machine persistence
/// are supported. Each method is a single blocking round-trip to the backing
/// store; any native resources acquired during a call are released before it
/// returns, on success and failure alike.
pub trait CredentialStore: Send + Sync {
    /// Upserts a generic record under `name`
    ///
    /// # Arguments
    /// * `name` - Unique identifier for the record (e.g., "app/login")
    /// * `username` - Username to store alongside the secret, if any
    /// * `secret` - Raw secret payload; its length is the stored payload size
    ///
    /// An existing record under the same name is overwritten in full.
    fn write(
        &self,
        name: &str,
        username: Option<&str>,
        secret: &[u8],
    ) -> Result<(), CredentialError>;

    /// Fetches the generic record stored under `name`
    ///
    /// # Returns
    /// * `Ok(record)` - If a record exists and could be read
    /// * `Err(CredentialError::Load)` - If the record is missing, access was
    ///   denied, or the record could not be decoded; the causes are not
    ///   distinguished
    fn read(&self, name: &str) -> Result<CredentialRecord, CredentialError>;

    /// Removes the generic record stored under `name`
    ///
    /// Deleting a name with no record fails like any other store failure.
    fn delete(&self, name: &str) -> Result<(), CredentialError>;
}
