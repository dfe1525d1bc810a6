//! # hashlab
//!
//! Educational demonstrations of cryptographic hash-function properties,
//! built on SHA-256.
//!
//! This library provides:
//! - A SHA-256 hex digest wrapper
//! - Hamming distance and similarity helpers for comparing digests
//! - Random and sequential candidate-string generators
//! - Bounded, interruptible pre-image and collision searches
//! - A Merkle tree with proof generation and verification
//!
//! ## Example
//!
//! ```rust
//! use hashlab::{hamming_distance, sha256_hex};
//!
//! let original = sha256_hex("Hello, Blockchain!");
//! let modified = sha256_hex("hello, Blockchain!");
//!
//! // One changed character rewrites most of the digest.
//! let distance = hamming_distance(&original, &modified).unwrap();
//! assert!(distance > 20);
//! ```

// Module declarations
pub mod candidates;
pub mod digest;
pub mod distance;
pub mod error;
pub mod merkle;
pub mod search;

// Re-export commonly used types and functions
pub use candidates::{random_string, random_string_with, sequential_string, ALPHABET_SIZE};
pub use digest::{sha256_hex, short_hash, HASH_HEX_LEN};
pub use distance::{hamming_distance, similarity_percent};
pub use error::{HashlabError, Result};
pub use merkle::{verify_proof, MerkleProof, MerkleTree, ProofStep, Side};
pub use search::{
    collision_search, preimage_search, BestMatch, CollisionOutcome, CollisionProgress,
    CollisionReport, SearchLimits, SearchOutcome, SearchProgress, SearchReport,
};
