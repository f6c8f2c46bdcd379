use std::collections::HashMap;

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::Argon2;
use async_trait::async_trait;
use rand::rngs::OsRng;

use super::domain::StoredCredential;
use super::errors::AuthError;

/// Lookup of accounts allowed to obtain tokens.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredCredential>, AuthError>;
}

/// Argon2 PHC string for `password` with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}

/// Fixed account table held in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCredentialRepository {
    accounts: HashMap<String, StoredCredential>,
}

impl InMemoryCredentialRepository {
    /// Add an account, hashing its password. A repeated email replaces the earlier entry.
    pub fn with_user(mut self, email: &str, password: &str, organization: &str, role: &str) -> Result<Self, AuthError> {
        let cred = StoredCredential {
            email: email.to_string(),
            password_hash: hash_password(password)?,
            organization: organization.to_string(),
            role: role.to_string(),
        };
        self.accounts.insert(cred.email.clone(), cred);
        Ok(self)
    }

    /// Demo accounts: `admin@orgN.com` / `admin123` and `user@orgN.com` / `user123` for N in 1..=3.
    pub fn demo() -> Result<Self, AuthError> {
        let mut repo = Self::default();
        for n in 1..=3 {
            let org = format!("org-{n}");
            repo = repo
                .with_user(&format!("admin@org{n}.com"), "admin123", &org, "admin")?
                .with_user(&format!("user@org{n}.com"), "user123", &org, "user")?;
        }
        Ok(repo)
    }

    pub fn len(&self) -> usize { self.accounts.len() }

    pub fn is_empty(&self) -> bool { self.accounts.is_empty() }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredCredential>, AuthError> {
        Ok(self.accounts.get(email).cloned())
    }
}
