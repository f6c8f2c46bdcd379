use std::sync::Arc;

use argon2::password_hash::{PasswordHash, PasswordVerifier};
use argon2::Argon2;
use chrono::Utc;
use tracing::{info, instrument, warn};

use super::domain::{derive_user_id, LoginInput, LoginOutput};
use super::errors::AuthError;
use super::jwt::JwtManager;
use super::repository::CredentialRepository;

/// Issues tokens for known accounts. Framework independent.
pub struct AuthService<R: CredentialRepository> {
    repo: Arc<R>,
    jwt: Arc<JwtManager>,
}

impl<R: CredentialRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, jwt: Arc<JwtManager>) -> Self { Self { repo, jwt } }

    pub fn jwt(&self) -> &JwtManager { &self.jwt }

    /// Authenticate an account within its organization and issue a token.
    #[instrument(skip(self, input), fields(email = %input.email, organization = %input.organization))]
    pub async fn login(&self, input: LoginInput) -> Result<LoginOutput, AuthError> {
        if input.email.is_empty() || input.password.is_empty() || input.organization.is_empty() {
            return Err(AuthError::Validation("email, password, and organization are required".into()));
        }

        let Some(cred) = self.repo.find_by_email(&input.email).await? else {
            warn!("unknown account");
            return Err(AuthError::Unauthorized);
        };

        let parsed = PasswordHash::new(&cred.password_hash).map_err(|e| AuthError::HashError(e.to_string()))?;
        if Argon2::default().verify_password(input.password.as_bytes(), &parsed).is_err()
            || cred.organization != input.organization
        {
            warn!("credential mismatch");
            return Err(AuthError::Unauthorized);
        }

        let user_id = derive_user_id(&cred.email);
        let token = self.jwt.generate_token(&user_id, &cred.email, &cred.organization, &cred.role)?;
        let ttl = chrono::Duration::from_std(self.jwt.token_duration()).map_err(|e| AuthError::TokenError(e.to_string()))?;
        info!(user_id = %user_id, role = %cred.role, "user_logged_in");
        Ok(LoginOutput {
            token,
            expires_at: Utc::now() + ttl,
            user_id,
            email: cred.email,
            organization: cred.organization,
            role: cred.role,
        })
    }
}
