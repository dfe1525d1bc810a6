use crate::error::{HashlabError, Result};

/// Count of index positions where two equal-length strings differ
///
/// Mismatched lengths are invalid input and fail with
/// [`HashlabError::LengthMismatch`] rather than returning a sentinel value.
pub fn hamming_distance(left: &str, right: &str) -> Result<usize> {
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    if left_len != right_len {
        return Err(HashlabError::LengthMismatch {
            left: left_len,
            right: right_len,
        });
    }

    Ok(left
        .chars()
        .zip(right.chars())
        .filter(|(a, b)| a != b)
        .count())
}

/// Fraction of positions that match, as a percentage
pub fn similarity_percent(distance: usize, len: usize) -> f64 {
    if len == 0 {
        return 100.0;
    }
    len.saturating_sub(distance) as f64 * 100.0 / len as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digest::sha256_hex;

    #[test]
    fn test_identical_strings() {
        let hash = sha256_hex("tx1");
        assert_eq!(hamming_distance(&hash, &hash).unwrap(), 0);
    }

    #[test]
    fn test_exact_difference_count() {
        assert_eq!(hamming_distance("aaaa", "aaab").unwrap(), 1);

        // 64-character strings differing in exactly 3 known positions
        let base: String = "0".repeat(64);
        let mut modified: Vec<char> = base.chars().collect();
        modified[0] = '1';
        modified[31] = '1';
        modified[63] = '1';
        let modified: String = modified.into_iter().collect();
        assert_eq!(hamming_distance(&base, &modified).unwrap(), 3);
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let err = hamming_distance("abc", "abcd").unwrap_err();
        assert_eq!(err, HashlabError::LengthMismatch { left: 3, right: 4 });
    }

    #[test]
    fn test_avalanche_scenario() {
        // A single case change rewrites most of the digest. The exact
        // distance (58) is not pinned, only that it is large.
        let original = sha256_hex("Hello, Blockchain!");
        let modified = sha256_hex("hello, Blockchain!");
        let distance = hamming_distance(&original, &modified).unwrap();
        assert!(distance > 20, "distance was only {distance}");
    }

    #[test]
    fn test_similarity_percent() {
        assert_eq!(similarity_percent(0, 64), 100.0);
        assert_eq!(similarity_percent(64, 64), 0.0);
        assert_eq!(similarity_percent(16, 64), 75.0);
        assert_eq!(similarity_percent(0, 0), 100.0);
    }
}
