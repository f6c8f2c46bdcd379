use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login input
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
    pub organization: String,
}

/// Issued session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutput {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user_id: String,
    pub email: String,
    pub organization: String,
    pub role: String,
}

/// Stored account (hashed password)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential {
    pub email: String,
    pub password_hash: String,
    pub organization: String,
    pub role: String,
}

/// Token claims. Registered claims sit next to the identity fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: String,
    pub email: String,
    pub organization: String,
    pub role: String,
    pub iss: String,
    pub sub: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

/// `user-` followed by the email minus its last four characters.
pub fn derive_user_id(email: &str) -> String {
    let keep = email.chars().count().saturating_sub(4);
    let head: String = email.chars().take(keep).collect();
    format!("user-{head}")
}
