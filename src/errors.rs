//! Error types for credstore
//!
//! This module defines the error type returned by every credential operation,
//! providing structured failures with fixed, user-presentable messages.

use thiserror::Error;

/// Error type for credential store operations
///
/// Each store operation fails with exactly one variant. The native facility
/// does not let callers distinguish "not found" from "access denied" without
/// inspecting platform error codes, so failures are deliberately flat: one
/// terminal kind per operation, no retry, no partial recovery.
///
/// # Architecture Notes
/// - Uses thiserror for automatic Display and Error trait implementations
/// - Variants carry the target name for context, never a native error code
/// - Native error details are visible in trace output only
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The read call reported failure (entry missing, access denied,
    /// corrupt record, or an undecodable secret payload)
    #[error("Failed to load credential '{name}' from the credential store")]
    Load {
        name: String,
    },

    /// The write call reported failure
    #[error("Failed to save credential '{name}' to the credential store")]
    Save {
        name: String,
    },

    /// The delete call reported failure
    #[error("Failed to delete credential '{name}' from the credential store")]
    Delete {
        name: String,
    },

    /// Save was called before a password was set
    ///
    /// This is a caller-side programming error, surfaced before any store
    /// call is made. No record is written.
    #[error("Credential '{name}' has no password set; set a password before saving")]
    MissingPassword {
        name: String,
    },
}

impl CredentialError {
    /// Returns a short operation tag for log correlation
    pub fn operation(&self) -> &'static str {
        match self {
            CredentialError::Load { .. } => "load",
            CredentialError::Save { .. } => "save",
            CredentialError::Delete { .. } => "delete",
            CredentialError::MissingPassword { .. } => "save",
        }
    }

    /// Returns the target name the failed operation was addressing
    pub fn name(&self) -> &str {
        match self {
            CredentialError::Load { name }
            | CredentialError::Save { name }
            | CredentialError::Delete { name }
            | CredentialError::MissingPassword { name } => name,
        }
    }
}
