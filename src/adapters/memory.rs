//! In-memory credential store
//!
//! A [`CredentialStore`] backed by a plain `HashMap`, used by the test suite
//! and documentation examples. It mimics the native store's failure contract:
//! reading or deleting an absent name fails, writing is an upsert.
//!
//! This is a test double, not a secure store; records live in process memory
//! with no encryption.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::adapters::store::{CredentialRecord, CredentialStore};
use crate::errors::CredentialError;

/// Credential store backed by process memory
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    records: Mutex<HashMap<String, CredentialRecord>>,
}

impl MemoryCredentialStore {
    /// Creates a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> std::sync::MutexGuard<'_, HashMap<String, CredentialRecord>> {
        // A panic while holding the lock leaves the map intact
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn write(
        &self,
        name: &str,
        username: Option<&str>,
        secret: &[u8],
    ) -> Result<(), CredentialError> {
        let record = CredentialRecord {
            username: username.map(str::to_string),
            secret: secret.to_vec(),
        };
        self.records().insert(name.to_string(), record);
        Ok(())
    }

    fn read(&self, name: &str) -> Result<CredentialRecord, CredentialError> {
        self.records()
            .get(name)
            .cloned()
            .ok_or_else(|| CredentialError::Load {
                name: name.to_string(),
            })
    }

    fn delete(&self, name: &str) -> Result<(), CredentialError> {
        match self.records().remove(name) {
            Some(_) => Ok(()),
            None => Err(CredentialError::Delete {
                name: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_absent_name_fails() {
        let store = MemoryCredentialStore::new();
        assert!(matches!(
            store.read("missing/entry"),
            Err(CredentialError::Load { .. })
        ));
    }

    #[test]
    fn test_write_is_upsert() {
        let store = MemoryCredentialStore::new();
        store.write("app/login", Some("alice"), b"first").unwrap();
        store.write("app/login", None, b"second").unwrap();

        let record = store.read("app/login").unwrap();
        assert_eq!(record.username, None);
        assert_eq!(record.secret, b"second");
    }

    #[test]
    fn test_delete_removes_the_record() {
        let store = MemoryCredentialStore::new();
        store.write("app/login", Some("alice"), b"s3cr3t").unwrap();

        store.delete("app/login").unwrap();
        assert!(store.read("app/login").is_err());
        assert!(matches!(
            store.delete("app/login"),
            Err(CredentialError::Delete { .. })
        ));
    }
}
