//! Stable cache keys for comparisons.
//!
//! Results are a pure function of the two inputs, so callers may memoise
//! them. The key hashes both texts with length prefixes so that moving a
//! boundary between A and B changes the key.

use sha2::{Digest, Sha256};

const DOMAIN_TAG: &[u8] = b"docdelta/comparison/v1\0";

/// Hex-encoded SHA-256 key for the ordered pair `(text_a, text_b)`.
///
/// # Example
///
/// ```
/// use docdelta_core::fingerprint::comparison_key;
///
/// let key = comparison_key("A B", "A C");
/// assert_eq!(key.len(), 64);
/// assert_ne!(key, comparison_key("A C", "A B"));
/// ```
pub fn comparison_key(text_a: &str, text_b: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_TAG);
    for text in [text_a, text_b] {
        hasher.update((text.len() as u64).to_be_bytes());
        hasher.update(text.as_bytes());
    }
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_deterministic() {
        assert_eq!(comparison_key("x", "y"), comparison_key("x", "y"));
    }

    #[test]
    fn test_boundary_shift_changes_key() {
        assert_ne!(comparison_key("ab", "c"), comparison_key("a", "bc"));
    }

    #[test]
    fn test_empty_pair_has_a_key() {
        let key = comparison_key("", "");
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
