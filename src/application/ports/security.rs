// src/application/ports/security.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser},
    error::TokenError,
};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Salted, deliberately slow hash. Fails only when hashing itself breaks.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// Succeeds only when `password` matches `expected_hash`. A corrupt or
    /// foreign hash is reported exactly like a wrong password.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}

/// Issues and checks stateless session tokens. Neither operation touches
/// storage.
pub trait TokenManager: Send + Sync {
    fn issue(&self, user_id: UserId) -> ApplicationResult<AuthTokenDto>;
    fn validate(&self, token: &str) -> Result<AuthenticatedUser, TokenError>;
}
