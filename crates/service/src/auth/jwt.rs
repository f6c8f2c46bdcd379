use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use rand::RngCore;

use super::domain::Claims;
use super::errors::AuthError;

pub const ISSUER: &str = "catalog-service";

/// Signs and verifies HS256 tokens with a shared secret.
#[derive(Clone)]
pub struct JwtManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    token_duration: Duration,
}

impl std::fmt::Debug for JwtManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtManager").field("token_duration", &self.token_duration).finish_non_exhaustive()
    }
}

impl JwtManager {
    pub fn new(secret: &str, token_duration: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            token_duration,
        }
    }

    pub fn token_duration(&self) -> Duration { self.token_duration }

    pub fn generate_token(&self, user_id: &str, email: &str, organization: &str, role: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();
        let ttl = i64::try_from(self.token_duration.as_secs()).map_err(|e| AuthError::TokenError(e.to_string()))?;
        let claims = Claims {
            user_id: user_id.to_string(),
            email: email.to_string(),
            organization: organization.to_string(),
            role: role.to_string(),
            iss: ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now,
            nbf: now,
            exp: now.saturating_add(ttl),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding).map_err(|e| AuthError::TokenError(e.to_string()))
    }

    /// Verify signature, algorithm, issuer, `exp` and `nbf`.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[ISSUER]);
        validation.validate_nbf = true;
        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))
    }
}

/// Token from an `Authorization` value of exactly `Bearer <token>`.
pub fn extract_bearer_token(header: &str) -> Result<&str, AuthError> {
    if header.is_empty() {
        return Err(AuthError::InvalidToken("authorization header is required".into()));
    }
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::InvalidToken("invalid authorization header format".into())),
    }
}

/// `len` random bytes, base64 encoded.
pub fn generate_secret_key(len: usize) -> Result<String, AuthError> {
    if len == 0 {
        return Err(AuthError::Validation("length must be positive, got 0".into()));
    }
    let mut bytes = vec![0u8; len];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| AuthError::TokenError(format!("failed to generate secret key: {e}")))?;
    Ok(STANDARD.encode(bytes))
}
