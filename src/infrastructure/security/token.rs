// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser},
    error::{ApplicationError, ApplicationResult, TokenError},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::UserId;
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::{sync::Arc, time::Duration};

type HmacSha256 = Hmac<Sha256>;

/// Shortest signing secret accepted, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: i64,
    iat: i64,
    exp: i64,
}

/// Stateless session tokens of the form `payload.signature`, both segments
/// base64url without padding. The payload is the JSON claim set and the
/// signature is HMAC-SHA256 over the encoded payload segment.
#[derive(Clone)]
pub struct HmacTokenManager {
    mac: HmacSha256,
    ttl: ChronoDuration,
    clock: Arc<dyn Clock>,
}

impl HmacTokenManager {
    pub fn new(secret: &[u8], ttl: Duration, clock: Arc<dyn Clock>) -> ApplicationResult<Self> {
        if secret.len() < MIN_SECRET_LEN {
            return Err(ApplicationError::infrastructure(format!(
                "token secret must be at least {MIN_SECRET_LEN} bytes"
            )));
        }
        let mac = HmacSha256::new_from_slice(secret)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let ttl = ChronoDuration::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { mac, ttl, clock })
    }

    fn sign(&self, payload_segment: &str) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(payload_segment.as_bytes());
        mac.finalize().into_bytes().to_vec()
    }

    fn split(token: &str) -> Result<(&str, &str), TokenError> {
        let mut parts = token.split('.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(payload), Some(signature), None)
                if !payload.is_empty() && !signature.is_empty() =>
            {
                Ok((payload, signature))
            }
            _ => Err(TokenError::Malformed),
        }
    }
}

fn timestamp(seconds: i64) -> Result<DateTime<Utc>, TokenError> {
    DateTime::from_timestamp(seconds, 0).ok_or(TokenError::Malformed)
}

impl TokenManager for HmacTokenManager {
    fn issue(&self, user_id: UserId) -> ApplicationResult<AuthTokenDto> {
        // Claims carry whole seconds; keep the reported times consistent with them.
        let issued_at = DateTime::from_timestamp(self.clock.now().timestamp(), 0)
            .ok_or_else(|| ApplicationError::infrastructure("clock out of range"))?;
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let claims = Claims {
            sub: i64::from(user_id),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let payload = serde_json::to_vec(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let payload_segment = URL_SAFE_NO_PAD.encode(payload);
        let signature_segment = URL_SAFE_NO_PAD.encode(self.sign(&payload_segment));

        Ok(AuthTokenDto {
            token: format!("{payload_segment}.{signature_segment}"),
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds().max(0),
        })
    }

    fn validate(&self, token: &str) -> Result<AuthenticatedUser, TokenError> {
        let (payload_segment, signature_segment) = Self::split(token)?;
        let payload = URL_SAFE_NO_PAD
            .decode(payload_segment)
            .map_err(|_| TokenError::Malformed)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_segment)
            .map_err(|_| TokenError::Malformed)?;

        let mut mac = self.mac.clone();
        mac.update(payload_segment.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| TokenError::SignatureMismatch)?;

        let claims: Claims = serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)?;
        let id = UserId::new(claims.sub).map_err(|_| TokenError::Malformed)?;
        let issued_at = timestamp(claims.iat)?;
        let expires_at = timestamp(claims.exp)?;

        if self.clock.now() > expires_at {
            return Err(TokenError::Expired);
        }

        Ok(AuthenticatedUser {
            id,
            issued_at,
            expires_at,
        })
    }
}
