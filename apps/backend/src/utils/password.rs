//! Password digest handling.
//!
//! Stored format: `blake3$<salt_hex>$<hash_hex>` where the hash is
//! blake3(salt || password). Verification re-derives from the stored salt
//! and compares in constant time via blake3's `Hash` equality.

use rand::Rng;

use crate::error::AppError;

const SALT_LEN: usize = 16;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill(&mut salt);

    let digest = digest(&salt, password);
    format!("blake3${}${}", hex(&salt), digest.to_hex())
}

/// Verify a password against a stored digest string.
///
/// A malformed stored digest is a data error, not a wrong password.
pub fn verify_password(password: &str, stored: &str) -> Result<bool, AppError> {
    let mut parts = stored.split('$');
    let (scheme, salt_hex, hash_hex) = match (parts.next(), parts.next(), parts.next(), parts.next())
    {
        (Some(scheme), Some(salt), Some(hash), None) => (scheme, salt, hash),
        _ => return Err(AppError::internal("malformed password digest")),
    };

    if scheme != "blake3" {
        return Err(AppError::internal(format!(
            "unsupported password digest scheme: {scheme}"
        )));
    }

    let salt = unhex(salt_hex).ok_or_else(|| AppError::internal("malformed password salt"))?;
    let expected: blake3::Hash = hash_hex
        .parse()
        .map_err(|_| AppError::internal("malformed password hash"))?;

    // blake3::Hash equality is constant-time.
    Ok(digest(&salt, password) == expected)
}

fn digest(salt: &[u8], password: &str) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize()
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn unhex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{hash_password, verify_password};

    #[test]
    fn roundtrip_accepts_correct_password() {
        let stored = hash_password("Admin8*");
        assert!(verify_password("Admin8*", &stored).unwrap());
    }

    #[test]
    fn wrong_password_is_rejected() {
        let stored = hash_password("Admin8*");
        assert!(!verify_password("admin8*", &stored).unwrap());
    }

    #[test]
    fn salts_differ_between_hashes() {
        let a = hash_password("same");
        let b = hash_password("same");
        assert_ne!(a, b);
        assert!(verify_password("same", &a).unwrap());
        assert!(verify_password("same", &b).unwrap());
    }

    #[test]
    fn malformed_digest_is_an_error() {
        assert!(verify_password("x", "not-a-digest").is_err());
        assert!(verify_password("x", "md5$00$00").is_err());
    }
}
