//! User session models.

use serde::{Deserialize, Serialize};

use crate::accounts::Account;
use crate::errors::{Error, Result, ValidationError};
use crate::portfolio::Portfolio;

/// Registration input. The password never reaches the `User` object; the
/// driver hands it to the credential verifier and drops it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    /// Brazilian tax id (CPF), used as the login identifier.
    pub document: String,
    pub password: String,
}

impl NewUser {
    /// Validates the registration data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.document.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "document".to_string(),
            )));
        }
        if self.password.is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "password".to_string(),
            )));
        }
        Ok(())
    }
}

/// One logged-in session: the user's identity, their two cash sub-accounts
/// and their portfolio.
///
/// Credentials live behind the [`CredentialVerifier`] collaborator, never
/// here. The whole object is dropped at process end; nothing persists.
///
/// [`CredentialVerifier`]: crate::users::CredentialVerifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub name: String,
    pub document: String,
    pub bank: Account,
    pub investment: Account,
    pub portfolio: Portfolio,
}

impl User {
    /// Creates a freshly registered user with zeroed balances and an empty
    /// portfolio.
    pub fn register(new_user: &NewUser) -> Result<User> {
        new_user.validate()?;
        Ok(User {
            name: new_user.name.trim().to_string(),
            document: new_user.document.trim().to_string(),
            bank: Account::new("Bank"),
            investment: Account::new("Investments"),
            portfolio: Portfolio::new(),
        })
    }
}
