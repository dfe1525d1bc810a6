//! Candidate-string generators for the search demonstrations
//!
//! Two sources: uniform random alphanumeric strings for the stochastic
//! pre-image demo, and a shortlex enumeration of printable ASCII for the
//! resistance suite.

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Number of symbols in the random alphabet (26 lowercase + 26 uppercase + 10 digits)
pub const ALPHABET_SIZE: usize = 62;

const PRINTABLE_START: u8 = b' ';
const PRINTABLE_RANGE: u64 = 95;

/// Random string of `len` alphanumeric characters
///
/// Characters are drawn independently and uniformly from the 62-symbol
/// alphabet using the thread-local PRNG. The source is not cryptographic
/// and there is no uniqueness guarantee across calls.
pub fn random_string(len: usize) -> String {
    random_string_with(&mut thread_rng(), len)
}

/// Random alphanumeric string from a caller-supplied generator
pub fn random_string_with<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

/// The `index`-th printable-ASCII string in shortlex order
///
/// Strings are ordered by length, then lexicographically over the 95
/// printable characters (codes 32..=126): " ", "!", ..., "~", "  ", " !",
/// and so on. Every index maps to a distinct string.
pub fn sequential_string(index: u64) -> String {
    if index < PRINTABLE_RANGE {
        return char::from(PRINTABLE_START + index as u8).to_string();
    }

    // Walk past the shorter lengths, then write base-95 digits.
    let mut remaining = (index - PRINTABLE_RANGE) as u128;
    let mut len = 2usize;
    let mut range = (PRINTABLE_RANGE as u128) * (PRINTABLE_RANGE as u128);
    while remaining >= range {
        remaining -= range;
        len += 1;
        range *= PRINTABLE_RANGE as u128;
    }

    let mut digits = Vec::with_capacity(len);
    for _ in 0..len {
        digits.push(char::from(
            PRINTABLE_START + (remaining % PRINTABLE_RANGE as u128) as u8,
        ));
        remaining /= PRINTABLE_RANGE as u128;
    }
    digits.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_random_string_length() {
        for len in [0, 1, 9, 64] {
            assert_eq!(random_string(len).len(), len);
        }
    }

    #[test]
    fn test_random_string_alphabet() {
        let s = random_string(256);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_seeded_generator_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(random_string_with(&mut a, 32), random_string_with(&mut b, 32));
    }

    #[test]
    fn test_sequential_single_characters() {
        assert_eq!(sequential_string(0), " ");
        assert_eq!(sequential_string(1), "!");
        assert_eq!(sequential_string(94), "~");
    }

    #[test]
    fn test_sequential_length_rollover() {
        assert_eq!(sequential_string(95), "  ");
        assert_eq!(sequential_string(96), " !");
        assert_eq!(sequential_string(95 + 95 * 95), "   ");
    }

    #[test]
    fn test_sequential_strings_are_distinct() {
        let seen: HashSet<String> = (0..2000).map(sequential_string).collect();
        assert_eq!(seen.len(), 2000);
    }
}
