//! Users module - session objects and the authentication seam.

mod users_auth;
mod users_model;

#[cfg(test)]
mod users_model_tests;

// Re-export the public interface
pub use users_auth::{CredentialVerifier, InMemoryVerifier};
pub use users_model::{NewUser, User};
