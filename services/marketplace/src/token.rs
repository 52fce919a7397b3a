//! Session token issuance and verification
//!
//! Tokens are stateless JWTs signed with HS256 and a server-held secret.
//! The subject claim carries the user id. Expiry is the only termination:
//! there is no refresh flow and no server-side revocation, re-login is the
//! only renewal path.

use anyhow::Result;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use uuid::Uuid;

/// Token configuration
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Secret used for signing and verifying tokens
    pub secret: String,
    /// Token time-to-live in seconds (default: 4 hours)
    pub ttl_secs: u64,
}

impl TokenConfig {
    /// Create a new TokenConfig from environment variables
    ///
    /// # Environment Variables
    /// - `TOKEN_SECRET`: signing secret (required)
    /// - `TOKEN_TTL_SECS`: token lifetime in seconds (default: 14400)
    pub fn from_env() -> Result<Self> {
        let secret = std::env::var("TOKEN_SECRET")
            .map_err(|_| anyhow::anyhow!("TOKEN_SECRET environment variable not set"))?;

        let ttl_secs = std::env::var("TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "14400".to_string())
            .parse()
            .unwrap_or(14400);

        Ok(TokenConfig { secret, ttl_secs })
    }
}

/// Token verification failure.
///
/// All four variants answer 401 on the wire, but they stay distinguishable
/// here so the auth gate can log which one occurred.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// No bearer token presented
    #[error("missing bearer token")]
    Missing,

    /// Token could not be parsed or decoded
    #[error("malformed token")]
    Malformed,

    /// Signature does not match the server secret
    #[error("invalid token signature")]
    BadSignature,

    /// Current time is past the token's expiry
    #[error("token expired")]
    Expired,
}

/// JWT claims structure
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: Uuid,
    /// Issued at time (unix seconds)
    pub iat: u64,
    /// Expiration time (unix seconds)
    pub exp: u64,
}

/// Token issuer/verifier
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: u64,
}

impl TokenService {
    /// Initialize a new token service
    pub fn new(config: &TokenConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        let mut validation = Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.validate_exp = true;
        // Exact expiry: a token is invalid the second its TTL elapses.
        validation.leeway = 0;

        TokenService {
            encoding_key,
            decoding_key,
            validation,
            ttl_secs: config.ttl_secs,
        }
    }

    /// Issue a signed token with the user id as subject
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| anyhow::anyhow!("Failed to get current time: {}", e))?
            .as_secs();

        self.issue_at(user_id, now)
    }

    fn issue_at(&self, user_id: Uuid, now: u64) -> Result<String> {
        let claims = Claims {
            sub: user_id,
            iat: now,
            exp: now + self.ttl_secs,
        };

        let token = encode(
            &Header::new(jsonwebtoken::Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?;
        Ok(token)
    }

    /// Verify a token and return the claims
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::BadSignature,
                    _ => AuthError::Malformed,
                }
            })?;
        Ok(token_data.claims)
    }

    /// Token lifetime in seconds
    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn test_service(secret: &str) -> TokenService {
        TokenService::new(&TokenConfig {
            secret: secret.to_string(),
            ttl_secs: 3600,
        })
    }

    #[test]
    fn test_verify_returns_issued_subject() {
        let service = test_service("test-secret");
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = test_service("test-secret");
        let user_id = Uuid::new_v4();

        // Issued two hours ago with a one hour TTL.
        let past = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs()
            - 7200;
        let token = service.issue_at(user_id, past).unwrap();

        assert_eq!(service.verify(&token), Err(AuthError::Expired));
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let issuer = test_service("one-secret");
        let verifier = test_service("another-secret");

        let token = issuer.issue(Uuid::new_v4()).unwrap();

        assert_eq!(verifier.verify(&token), Err(AuthError::BadSignature));
    }

    #[test]
    fn test_garbage_token_is_malformed() {
        let service = test_service("test-secret");

        assert_eq!(service.verify("not-a-token"), Err(AuthError::Malformed));
        assert_eq!(service.verify(""), Err(AuthError::Malformed));
    }

    #[test]
    #[serial]
    fn test_token_config_from_env() {
        unsafe {
            std::env::set_var("TOKEN_SECRET", "env-secret");
        }

        let config = TokenConfig::from_env().unwrap();
        assert_eq!(config.secret, "env-secret");
        assert_eq!(config.ttl_secs, 14400);

        unsafe {
            std::env::remove_var("TOKEN_SECRET");
        }
    }

    #[test]
    #[serial]
    fn test_token_config_from_env_with_custom_ttl() {
        unsafe {
            std::env::set_var("TOKEN_SECRET", "env-secret");
            std::env::set_var("TOKEN_TTL_SECS", "60");
        }

        let config = TokenConfig::from_env().unwrap();
        assert_eq!(config.ttl_secs, 60);

        unsafe {
            std::env::remove_var("TOKEN_SECRET");
            std::env::remove_var("TOKEN_TTL_SECS");
        }
    }
}
