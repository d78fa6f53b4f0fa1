//! Signed identity tokens
//!
//! Tokens are HS256 JWTs carrying the user id, role and an absolute
//! expiration. The signing secret belongs to the [`TokenService`] instance:
//! it is set once at construction and never changes afterwards.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{Role, UserClaims},
};

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    default_ttl: Duration,
}

impl TokenService {
    /// Create a token service. An empty secret is refused.
    pub fn new(secret: &str, default_ttl: Duration) -> AppResult<Self> {
        if secret.trim().is_empty() {
            return Err(AppError::Config(
                "Token signing secret must not be empty".to_string(),
            ));
        }

        // Only HS256 is accepted and expiry is enforced to the second.
        let mut validation = Validation::new(ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            default_ttl,
        })
    }

    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        let secret = config.jwt_secret.as_deref().ok_or_else(|| {
            AppError::Config(
                "No token signing secret configured (set JWT_SECRET)".to_string(),
            )
        })?;

        if config.token_ttl_hours <= 0 {
            return Err(AppError::Config(format!(
                "Token lifetime must be positive, got {} hours",
                config.token_ttl_hours
            )));
        }
        let ttl = Duration::try_hours(config.token_ttl_hours).ok_or_else(|| {
            AppError::Config(format!(
                "Token lifetime of {} hours is out of range",
                config.token_ttl_hours
            ))
        })?;

        Self::new(secret, ttl)
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Issue a token for `user_id` expiring `ttl` from now
    pub fn issue(&self, user_id: i32, role: Role, ttl: Duration) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::SigningFailed("Token lifetime out of range".to_string()))?;

        let claims = UserClaims {
            user_id,
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| AppError::SigningFailed(e.to_string()))
    }

    /// Issue a token with the configured lifetime
    pub fn issue_default(&self, user_id: i32, role: Role) -> AppResult<String> {
        self.issue(user_id, role, self.default_ttl)
    }

    /// Verify signature, algorithm and expiry, and return the claims
    pub fn verify(&self, token: &str) -> AppResult<UserClaims> {
        decode::<UserClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AppError::InvalidToken(e.to_string())
            })
    }
}
