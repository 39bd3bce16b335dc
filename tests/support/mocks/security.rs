// tests/support/mocks/security.rs
use async_trait::async_trait;
use chrono::Duration;
use feedline::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser},
    error::{ApplicationError, TokenError},
    ports::security::{PasswordHasher, TokenManager},
};
use feedline::domain::user::UserId;

/// テスト用トークン定数（タイポ防止とIDE補完のため）
pub const TEST_TOKEN: &str = "test-token";
pub const OTHER_TOKEN: &str = "other-token";
pub const EXPIRED_TOKEN: &str = "expired-token";

/* -------------------------------- TokenManager -------------------------------- */

/// Maps a handful of fixed strings to users 1 and 2. Everything else is
/// malformed.
#[derive(Clone, Debug, Default)]
pub struct StaticTokenManager;

impl TokenManager for StaticTokenManager {
    fn issue(&self, user_id: UserId) -> ApplicationResult<AuthTokenDto> {
        let now = super::time::fixed_now();
        let token = match i64::from(user_id) {
            1 => TEST_TOKEN,
            2 => OTHER_TOKEN,
            _ => return Err(ApplicationError::infrastructure("no static token for user")),
        };
        Ok(AuthTokenDto {
            token: token.into(),
            issued_at: now,
            expires_at: now + Duration::hours(1),
            expires_in: 3600,
        })
    }

    fn validate(&self, token: &str) -> Result<AuthenticatedUser, TokenError> {
        let now = super::time::fixed_now();
        let id = match token {
            TEST_TOKEN => 1,
            OTHER_TOKEN => 2,
            EXPIRED_TOKEN => return Err(TokenError::Expired),
            _ => return Err(TokenError::Malformed),
        };
        Ok(AuthenticatedUser {
            id: UserId::new(id).expect("invalid user id"),
            issued_at: now,
            expires_at: now + Duration::hours(1),
        })
    }
}

/* -------------------------------- PasswordHasher -------------------------------- */

/// 厳密なパスワードハッシャー: `hash::<password>` 形式で保存し、完全一致のみ許可
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if expected_hash == format!("hash::{password}") {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("invalid credentials"))
        }
    }
}

/// ハッシュは成功するが検証は常にインフラ障害を返す
#[derive(Clone, Debug, Default)]
pub struct FailingVerifyHasher;

#[async_trait]
impl PasswordHasher for FailingVerifyHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<()> {
        Err(ApplicationError::infrastructure("verifier task panicked"))
    }
}
