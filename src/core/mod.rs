//! Core module - the credential domain type and its operations

pub mod credential;

pub use credential::Credential;
