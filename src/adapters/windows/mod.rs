//! Windows-specific adapters
//!
//! This module contains the platform-specific credential store implementation
//! for Windows. All Windows API calls are isolated here to enable future
//! cross-platform support.

pub mod credential_manager;

pub use credential_manager::{system_store, WindowsCredentialStore};
