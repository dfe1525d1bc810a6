use sha2::{Digest, Sha256};

/// Length of a SHA-256 digest rendered as hexadecimal characters
pub const HASH_HEX_LEN: usize = 64;

/// SHA-256 digest of the input bytes as a lowercase hexadecimal string
///
/// Deterministic for a given input; the output is always exactly
/// [`HASH_HEX_LEN`] characters.
pub fn sha256_hex(input: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_ref());
    hex::encode(hasher.finalize())
}

/// Shorten a hash for display: first 8 characters plus an ellipsis
pub fn short_hash(hash: &str) -> String {
    if hash.len() < 8 {
        return hash.to_string();
    }
    format!("{}...", &hash[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_digest() {
        // Published SHA-256 digest of the empty input
        assert_eq!(
            sha256_hex(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_known_digest() {
        // Published SHA-256 digest of "abc"
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_deterministic() {
        let first = sha256_hex("Hello, Blockchain!");
        let second = sha256_hex("Hello, Blockchain!");
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_shape() {
        for input in ["", "a", "Hello, Blockchain!", "0123456789"] {
            let digest = sha256_hex(input);
            assert_eq!(digest.len(), HASH_HEX_LEN);
            assert!(digest
                .chars()
                .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_distinct_inputs_distinct_digests() {
        let inputs = ["tx1", "tx2", "tx3", "tx4", "tx5"];
        for (i, a) in inputs.iter().enumerate() {
            for b in &inputs[i + 1..] {
                assert_ne!(sha256_hex(a), sha256_hex(b));
            }
        }
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(short_hash("709b55bd3da0f5a8"), "709b55bd...");
        assert_eq!(short_hash("abc"), "abc");
    }
}
