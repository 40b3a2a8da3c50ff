//! Authentication collaborator seam.
//!
//! The core never stores or compares credentials; it only consumes the
//! boolean answer from this trait.

/// External credential check.
pub trait CredentialVerifier {
    /// Returns true when `document`/`password` match the registered owner.
    fn verify(&self, document: &str, password: &str) -> bool;
}

/// In-memory verifier for single-session runs; holds at most one
/// credential pair.
#[derive(Debug, Default)]
pub struct InMemoryVerifier {
    credentials: Option<(String, String)>,
}

impl InMemoryVerifier {
    pub fn new() -> Self {
        InMemoryVerifier::default()
    }

    /// Registers the session owner's credentials, replacing any previous
    /// pair.
    pub fn enroll(&mut self, document: impl Into<String>, password: impl Into<String>) {
        self.credentials = Some((document.into(), password.into()));
    }
}

impl CredentialVerifier for InMemoryVerifier {
    fn verify(&self, document: &str, password: &str) -> bool {
        match &self.credentials {
            Some((enrolled_document, enrolled_password)) => {
                enrolled_document == document && enrolled_password == password
            }
            None => false,
        }
    }
}
