//! Credential value object
//!
//! The in-memory representation of a generic credential and its three store
//! operations. A `Credential` holds no connection to a store and caches no
//! persistence state; every operation is a single blocking call against the
//! [`CredentialStore`] the caller passes in.

use tracing::{debug, error};

use crate::adapters::store::CredentialStore;
use crate::errors::CredentialError;

/// A generic credential: a name with an optional username and password
///
/// The name is the lookup key in the backing store and is fixed at
/// construction. Username and password are free to change, either through the
/// setters or by [`Credential::load`] overwriting them from the store.
///
/// # Security
/// The password is held as a plain `String`; it is never written to logs
/// (trace output records lengths and presence only).
#[derive(Debug, Clone)]
pub struct Credential {
    name: String,
    username: Option<String>,
    password: Option<String>,
}

impl Credential {
    /// Creates a credential with only a target name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            username: None,
            password: None,
        }
    }

    /// Creates a credential with a target name and username
    pub fn with_username(name: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            username: Some(username.into()),
            password: None,
        }
    }

    /// Creates a credential with a target name, username, and password
    pub fn with_password(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    /// The store lookup key this credential was constructed with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The username, if one is set
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// The password, if one is set
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Sets the username
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = Some(username.into());
    }

    /// Sets the password
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(password.into());
    }

    /// Loads this credential from the backing store
    ///
    /// Discards the current username and password, then fetches the record
    /// stored under this credential's name. The username is taken from the
    /// record as-is; the secret payload, when non-empty, is decoded as UTF-8
    /// text into the password.
    ///
    /// # Returns
    /// * `Ok(())` - Username and password now reflect the stored record
    /// * `Err(CredentialError::Load)` - The record is missing, unreadable, or
    ///   carries a payload that is not valid UTF-8; username and password are
    ///   left cleared
    pub fn load(&mut self, store: &dyn CredentialStore) -> Result<(), CredentialError> {
        debug!(target_name = %self.name, "Loading credential");

        // Cleared up front so a failed lookup never leaves stale values
        self.username = None;
        self.password = None;

        let record = store.read(&self.name)?;

        let password = if record.secret.is_empty() {
            None
        } else {
            match String::from_utf8(record.secret) {
                Ok(text) => Some(text),
                Err(_) => {
                    error!(
                        target_name = %self.name,
                        "Stored secret payload is not valid UTF-8"
                    );
                    return Err(CredentialError::Load {
                        name: self.name.clone(),
                    });
                }
            }
        };

        self.username = record.username;
        self.password = password;

        debug!(
            target_name = %self.name,
            has_username = self.username.is_some(),
            password_len = self.password.as_ref().map(String::len).unwrap_or(0),
            "Credential loaded"
        );
        Ok(())
    }

    /// Saves this credential to the backing store
    ///
    /// Writes a generic, local-machine-persisted record under this
    /// credential's name, overwriting any existing record. The password is
    /// required and is stored as its UTF-8 bytes; the username is written
    /// when set and omitted otherwise.
    ///
    /// # Returns
    /// * `Ok(())` - The record was written
    /// * `Err(CredentialError::MissingPassword)` - No password is set; the
    ///   store is not touched
    /// * `Err(CredentialError::Save)` - The store rejected the write
    pub fn save(&self, store: &dyn CredentialStore) -> Result<(), CredentialError> {
        let password = self.password.as_deref().ok_or_else(|| {
            error!(target_name = %self.name, "Save called with no password set");
            CredentialError::MissingPassword {
                name: self.name.clone(),
            }
        })?;

        debug!(
            target_name = %self.name,
            has_username = self.username.is_some(),
            password_len = password.len(),
            "Saving credential"
        );

        store.write(&self.name, self.username.as_deref(), password.as_bytes())
    }

    /// Deletes this credential's record from the backing store
    ///
    /// The in-memory object is left intact; only the persisted record is
    /// removed. Deleting a name with no record fails like any other store
    /// failure.
    pub fn delete(&self, store: &dyn CredentialStore) -> Result<(), CredentialError> {
        debug!(target_name = %self.name, "Deleting credential");
        store.delete(&self.name)
    }

    /// Returns true when a record for this credential's name is currently
    /// readable from the backing store
    pub fn exists(&self, store: &dyn CredentialStore) -> bool {
        store.read(&self.name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryCredentialStore;

    #[test]
    fn test_save_then_load_round_trip() {
        let store = MemoryCredentialStore::new();

        let saved = Credential::with_password("app/login", "alice", "s3cr3t");
        saved.save(&store).unwrap();

        let mut loaded = Credential::new("app/login");
        loaded.load(&store).unwrap();
        assert_eq!(loaded.username(), Some("alice"));
        assert_eq!(loaded.password(), Some("s3cr3t"));
    }

    #[test]
    fn test_load_missing_entry_fails_and_leaves_fields_unset() {
        let store = MemoryCredentialStore::new();

        let mut credential = Credential::new("missing/entry");
        let result = credential.load(&store);

        assert!(matches!(result, Err(CredentialError::Load { .. })));
        assert_eq!(credential.username(), None);
        assert_eq!(credential.password(), None);
    }

    #[test]
    fn test_load_failure_clears_previous_values() {
        let store = MemoryCredentialStore::new();

        let mut credential = Credential::with_password("missing/entry", "alice", "s3cr3t");
        assert!(credential.load(&store).is_err());

        assert_eq!(credential.username(), None);
        assert_eq!(credential.password(), None);
    }

    #[test]
    fn test_save_overwrites_existing_record() {
        let store = MemoryCredentialStore::new();

        Credential::with_password("app/login", "alice", "old-secret")
            .save(&store)
            .unwrap();
        Credential::with_password("app/login", "bob", "new-secret")
            .save(&store)
            .unwrap();

        let mut loaded = Credential::new("app/login");
        loaded.load(&store).unwrap();
        assert_eq!(loaded.username(), Some("bob"));
        assert_eq!(loaded.password(), Some("new-secret"));
    }

    #[test]
    fn test_delete_is_not_idempotent() {
        let store = MemoryCredentialStore::new();

        let credential = Credential::with_password("app/login", "alice", "s3cr3t");
        credential.save(&store).unwrap();

        assert!(credential.delete(&store).is_ok());
        assert!(matches!(
            credential.delete(&store),
            Err(CredentialError::Delete { .. })
        ));
    }

    #[test]
    fn test_load_after_delete_fails() {
        let store = MemoryCredentialStore::new();

        Credential::with_password("app/login", "alice", "s3cr3t")
            .save(&store)
            .unwrap();
        Credential::new("app/login").delete(&store).unwrap();

        let mut loaded = Credential::new("app/login");
        assert!(matches!(
            loaded.load(&store),
            Err(CredentialError::Load { .. })
        ));
    }

    #[test]
    fn test_save_without_password_fails_fast() {
        let store = MemoryCredentialStore::new();

        let credential = Credential::with_username("app/login", "alice");
        let result = credential.save(&store);

        assert!(matches!(
            result,
            Err(CredentialError::MissingPassword { .. })
        ));
        // Nothing was written
        assert!(!credential.exists(&store));
    }

    #[test]
    fn test_save_without_username_loads_back_none() {
        let store = MemoryCredentialStore::new();

        let mut credential = Credential::new("app/login");
        credential.set_password("s3cr3t");
        credential.save(&store).unwrap();

        let mut loaded = Credential::with_username("app/login", "stale");
        loaded.load(&store).unwrap();
        assert_eq!(loaded.username(), None);
        assert_eq!(loaded.password(), Some("s3cr3t"));
    }

    #[test]
    fn test_empty_password_round_trips_as_unset() {
        let store = MemoryCredentialStore::new();

        Credential::with_password("app/login", "alice", "")
            .save(&store)
            .unwrap();

        let mut loaded = Credential::new("app/login");
        loaded.load(&store).unwrap();
        assert_eq!(loaded.username(), Some("alice"));
        assert_eq!(loaded.password(), None);
    }

    #[test]
    fn test_non_utf8_secret_fails_load_and_clears_fields() {
        let store = MemoryCredentialStore::new();
        store
            .write("app/login", Some("alice"), &[0xff, 0xfe, 0x00, 0x01])
            .unwrap();

        let mut credential = Credential::with_password("app/login", "bob", "stale");
        let result = credential.load(&store);

        assert!(matches!(result, Err(CredentialError::Load { .. })));
        assert_eq!(credential.username(), None);
        assert_eq!(credential.password(), None);
    }

    #[test]
    fn test_exists_tracks_store_contents() {
        let store = MemoryCredentialStore::new();
        let credential = Credential::with_password("app/login", "alice", "s3cr3t");

        assert!(!credential.exists(&store));
        credential.save(&store).unwrap();
        assert!(credential.exists(&store));
        credential.delete(&store).unwrap();
        assert!(!credential.exists(&store));
    }

    #[test]
    fn test_setters_update_fields() {
        let mut credential = Credential::new("app/login");
        assert_eq!(credential.name(), "app/login");

        credential.set_username("alice");
        credential.set_password("s3cr3t");
        assert_eq!(credential.username(), Some("alice"));
        assert_eq!(credential.password(), Some("s3cr3t"));
    }
}
