//! Windows Credential Manager adapter
//!
//! Provides a safe Rust interface to the Windows Credential Manager API.
//! This module isolates all unsafe Windows API calls and provides the one
//! native [`CredentialStore`] implementation this crate ships.
//!
//! The ANSI entry points (`CredReadA`/`CredWriteA`/`CredDeleteA`) are used:
//! target names and usernames cross the boundary as single-byte NUL-terminated
//! strings, and the secret payload is written as raw bytes with no terminator.

use std::ffi::{c_void, CString};

use once_cell::sync::Lazy;
use tracing::{debug, error};
use windows::core::{PCSTR, PSTR};
use windows::Win32::Foundation::FILETIME;
use windows::Win32::Security::Credentials::{
    CredDeleteA, CredFree, CredReadA, CredWriteA, CREDENTIALA, CRED_FLAGS,
    CRED_PERSIST_LOCAL_MACHINE, CRED_TYPE_GENERIC,
};

use crate::adapters::store::{CredentialRecord, CredentialStore};
use crate::errors::CredentialError;

/// Process-wide credential store instance
///
/// Uses once_cell::Lazy for thread-safe lazy initialization. The
/// WindowsCredentialStore is created only once on first access and reused
/// for all subsequent credential operations.
static SYSTEM_STORE: Lazy<WindowsCredentialStore> = Lazy::new(WindowsCredentialStore::new);

/// Returns the process-wide [`WindowsCredentialStore`]
pub fn system_store() -> &'static WindowsCredentialStore {
    &SYSTEM_STORE
}

/// Windows implementation of [`CredentialStore`]
///
/// Uses Windows Credential Manager (CredRead/CredWrite/CredDelete APIs) to
/// store generic credentials encrypted by the OS, with local-machine
/// persistence (the record survives reboots but is not roamed).
pub struct WindowsCredentialStore;

impl WindowsCredentialStore {
    /// Creates a new Windows credential store instance
    pub fn new() -> Self {
        WindowsCredentialStore
    }
}

impl Default for WindowsCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns a record handle returned by CredReadA
///
/// The handle is released with CredFree exactly once when the guard drops,
/// on every path out of `read`.
struct RecordHandle(*mut CREDENTIALA);

impl RecordHandle {
    /// # Safety
    /// The pointer must be a live record returned by CredReadA.
    unsafe fn record(&self) -> &CREDENTIALA {
        &*self.0
    }
}

impl Drop for RecordHandle {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe { CredFree(self.0 as *const c_void) };
        }
    }
}

impl CredentialStore for WindowsCredentialStore {
    fn write(
        &self,
        name: &str,
        username: Option<&str>,
        secret: &[u8],
    ) -> Result<(), CredentialError> {
        let save_err = || CredentialError::Save {
            name: name.to_string(),
        };

        // Interior NUL bytes cannot be expressed in the native call
        let target_name = CString::new(name).map_err(|_| save_err())?;
        let username = match username {
            Some(value) => Some(CString::new(value).map_err(|_| save_err())?),
            None => None,
        };

        unsafe {
            let cred = CREDENTIALA {
                Flags: CRED_FLAGS(0),
                Type: CRED_TYPE_GENERIC,
                TargetName: PSTR(target_name.as_ptr() as *mut u8),
                Comment: PSTR::null(),
                LastWritten: FILETIME::default(),
                // Payload size is the raw byte length, no NUL terminator
                CredentialBlobSize: secret.len() as u32,
                CredentialBlob: secret.as_ptr() as *mut u8,
                Persist: CRED_PERSIST_LOCAL_MACHINE,
                AttributeCount: 0,
                Attributes: std::ptr::null_mut(),
                TargetAlias: PSTR::null(),
                UserName: username
                    .as_ref()
                    .map(|value| PSTR(value.as_ptr() as *mut u8))
                    .unwrap_or_else(PSTR::null),
            };

            CredWriteA(&cred, 0).map_err(|e| {
                error!(
                    target_name = %name,
                    error = %e,
                    "CredWrite failed"
                );
                save_err()
            })?;
        }

        debug!(target_name = %name, blob_len = secret.len(), "Credential record written");
        Ok(())
    }

    fn read(&self, name: &str) -> Result<CredentialRecord, CredentialError> {
        let load_err = || CredentialError::Load {
            name: name.to_string(),
        };

        let target_name = CString::new(name).map_err(|_| load_err())?;

        unsafe {
            let mut pcred: *mut CREDENTIALA = std::ptr::null_mut();

            if let Err(e) = CredReadA(
                PCSTR::from_raw(target_name.as_ptr() as *const u8),
                CRED_TYPE_GENERIC,
                0,
                &mut pcred,
            ) {
                // Covers both "no such record" and access failures; the
                // caller cannot tell them apart
                debug!(target_name = %name, error = %e, "CredRead failed");
                return Err(load_err());
            }

            // Freed via CredFree when the guard drops
            let handle = RecordHandle(pcred);
            let cred = handle.record();

            let username = if cred.UserName.is_null() {
                None
            } else {
                Some(cred.UserName.to_string().map_err(|_| {
                    error!(target_name = %name, "Stored username is not valid UTF-8");
                    load_err()
                })?)
            };

            let secret = if cred.CredentialBlob.is_null() || cred.CredentialBlobSize == 0 {
                Vec::new()
            } else {
                std::slice::from_raw_parts(cred.CredentialBlob, cred.CredentialBlobSize as usize)
                    .to_vec()
            };

            debug!(
                target_name = %name,
                has_username = username.is_some(),
                blob_len = secret.len(),
                "Credential record read"
            );
            Ok(CredentialRecord { username, secret })
        }
    }

    fn delete(&self, name: &str) -> Result<(), CredentialError> {
        let delete_err = || CredentialError::Delete {
            name: name.to_string(),
        };

        let target_name = CString::new(name).map_err(|_| delete_err())?;

        unsafe {
            CredDeleteA(
                PCSTR::from_raw(target_name.as_ptr() as *const u8),
                CRED_TYPE_GENERIC,
                0,
            )
            .map_err(|e| {
                debug!(target_name = %name, error = %e, "CredDelete failed");
                delete_err()
            })?;
        }

        debug!(target_name = %name, "Credential record deleted");
        Ok(())
    }
}
