//! Test helpers for generating unique test data
//!
//! ULID-based generators so parallel tests never collide on unique columns.

use ulid::Ulid;

/// Generate a unique string with the given prefix, `{prefix}-{ulid}`.
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique username with the given prefix.
///
/// Usernames have a unique index, so tests that register accounts against a
/// shared database must not reuse fixed names.
pub fn unique_username(prefix: &str) -> String {
    format!("{}_{}", prefix, Ulid::new().to_string().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::{unique_str, unique_username};

    #[test]
    fn unique_str_differs_between_calls() {
        let a = unique_str("user");
        let b = unique_str("user");
        assert_ne!(a, b);
        assert!(a.starts_with("user-"));
    }

    #[test]
    fn unique_username_is_lowercase() {
        let name = unique_username("steve");
        assert!(name.starts_with("steve_"));
        assert_eq!(name, name.to_lowercase());
    }
}
