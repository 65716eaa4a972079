//! Storage adapters
//!
//! This module contains the credential store abstraction and its backing
//! implementations. The native Windows implementation is compiled only on
//! Windows; the in-memory store is available everywhere for tests and
//! examples.

pub mod memory;
pub mod store;
#[cfg(windows)]
pub mod windows;

pub use memory::MemoryCredentialStore;
pub use store::{CredentialRecord, CredentialStore};
#[cfg(windows)]
pub use self::windows::{system_store, WindowsCredentialStore};
