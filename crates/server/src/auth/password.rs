//! Salted PBKDF2 password hashing.
//!
//! Stored form is `hex(salt)$hex(derived_key)` with PBKDF2-HMAC-SHA256.

use std::num::NonZeroU32;

use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};

const ITERATIONS: NonZeroU32 = NonZeroU32::new(100_000).unwrap();
const SALT_LEN: usize = 16;
const KEY_LEN: usize = 32;

/// Hash a password under a fresh random salt.
pub fn hash(password: &str) -> Result<String, ring::error::Unspecified> {
    let rng = SystemRandom::new();
    let mut salt = [0u8; SALT_LEN];
    rng.fill(&mut salt)?;

    let mut key = [0u8; KEY_LEN];
    pbkdf2::derive(
        pbkdf2::PBKDF2_HMAC_SHA256,
        ITERATIONS,
        &salt,
        password.as_bytes(),
        &mut key,
    );

    Ok(format!("{}${}", hex::encode(salt), hex::encode(key)))
}

/// Check a password against a stored `salt$key` hash. Comparison of the
/// derived key is constant-time; malformed stored hashes never verify.
pub fn verify(password: &str, stored: &str) -> bool {
    let Some((salt_hex, key_hex)) = stored.split_once('$') else {
        return false;
    };
    let (Ok(salt), Ok(key)) = (hex::decode(salt_hex), hex::decode(key_hex)) else {
        return false;
    };

    pbkdf2::verify(
        pbkdf2::PBKDF2_HMAC_SHA256,
        ITERATIONS,
        &salt,
        password.as_bytes(),
        &key,
    )
    .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let stored = hash("my_secret_password").unwrap();
        assert!(verify("my_secret_password", &stored));
        assert!(!verify("wrong_password", &stored));
    }

    #[test]
    fn salts_are_unique_per_hash() {
        let a = hash("same").unwrap();
        let b = hash("same").unwrap();
        assert_ne!(a, b);
        assert!(verify("same", &a));
        assert!(verify("same", &b));
    }

    #[test]
    fn malformed_stored_hash_never_verifies() {
        assert!(!verify("anything", ""));
        assert!(!verify("anything", "no-separator"));
        assert!(!verify("anything", "nothex$nothex"));
    }
}
