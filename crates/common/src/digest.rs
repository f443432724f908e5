//! Content digests for generated files.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of a byte slice.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Short fingerprint (first 12 hex chars) used in human-readable output.
pub fn short_fingerprint(content: &str) -> String {
    let mut full = sha256_hex(content.as_bytes());
    full.truncate(12);
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_hex() {
        assert_eq!(
            sha256_hex(b"hello world"),
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_short_fingerprint() {
        assert_eq!(short_fingerprint("hello world"), "b94d27b9934d");
    }

    #[test]
    fn test_identical_content_identical_digest() {
        let a = "{\n  \"id\": \"cool-bot\"\n}";
        let b = String::from(a);
        assert_eq!(sha256_hex(a.as_bytes()), sha256_hex(b.as_bytes()));
    }
}
