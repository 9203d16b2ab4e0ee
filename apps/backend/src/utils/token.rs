//! Opaque auth token generation.
//!
//! Tokens are 40-character strings using Crockford's Base32 alphabet,
//! drawn from the thread-local CSPRNG. They carry no structure; validity
//! lives entirely in the auth_tokens table.

use rand::Rng;

const CROCKFORD: &[u8] = b"0123456789ABCDEFGHJKMNPQRSTVWXYZ"; // no I, L, O, U

const TOKEN_LEN: usize = 40;

/// Generate a fresh opaque token.
pub fn generate_token() -> String {
    let mut rng = rand::rng();

    let mut s = String::with_capacity(TOKEN_LEN);
    for _ in 0..TOKEN_LEN {
        s.push(CROCKFORD[rng.random_range(0..CROCKFORD.len())] as char);
    }
    s
}

#[cfg(test)]
mod tests {
    use super::{generate_token, CROCKFORD, TOKEN_LEN};

    #[test]
    fn tokens_differ_between_calls() {
        assert_ne!(generate_token(), generate_token());
    }

    #[test]
    fn token_has_correct_length_and_alphabet() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token.bytes().all(|b| CROCKFORD.contains(&b)));
    }
}
