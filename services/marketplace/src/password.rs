//! Password hashing and verification
//!
//! Argon2id with a per-password random salt. Verification goes through the
//! `password_hash` machinery rather than comparing hash strings, and it
//! returns false on any failure instead of erroring so a bad hash in the
//! store cannot change the shape of a login response.
//!
//! Hashing is deliberately slow, so the async wrappers run it on the
//! blocking thread pool to keep it off the request dispatcher.

use anyhow::Result;
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};

/// Hash a plaintext password
pub fn hash(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against a stored hash
pub fn verify(plaintext: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed_hash)
        .is_ok()
}

/// Hash a password on the blocking thread pool
pub async fn hash_password(plaintext: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash(&plaintext)).await?
}

/// Verify a password on the blocking thread pool
pub async fn verify_password(plaintext: String, hash: String) -> Result<bool> {
    let verified = tokio::task::spawn_blocking(move || verify(&plaintext, &hash)).await?;
    Ok(verified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_differs_from_plaintext() {
        let hashed = hash("secret1").unwrap();
        assert_ne!(hashed, "secret1");
        assert!(hashed.starts_with("$argon2"));
    }

    #[test]
    fn test_verify_round_trip() {
        let hashed = hash("secret1").unwrap();
        assert!(verify("secret1", &hashed));
        assert!(!verify("secret2", &hashed));
    }

    #[test]
    fn test_same_password_hashes_differently() {
        // Random salt per hash.
        let a = hash("secret1").unwrap();
        let b = hash("secret1").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_verify_never_errors_on_garbage_hash() {
        assert!(!verify("secret1", "not-a-phc-string"));
        assert!(!verify("secret1", ""));
    }

    #[tokio::test]
    async fn test_blocking_wrappers() {
        let hashed = hash_password("secret1".to_string()).await.unwrap();
        assert!(
            verify_password("secret1".to_string(), hashed.clone())
                .await
                .unwrap()
        );
        assert!(
            !verify_password("wrong".to_string(), hashed)
                .await
                .unwrap()
        );
    }
}
