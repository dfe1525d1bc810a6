//! Merkle trees over SHA-256 hex digests
//!
//! Parent nodes hash the concatenation of their children's hex digest
//! strings; an odd node at the end of a level is paired with itself.

use serde::{Deserialize, Serialize};

use crate::digest::sha256_hex;
use crate::error::{HashlabError, Result};

/// Which side a proof sibling sits on when re-hashing towards the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A single sibling hash on the path from a leaf to the root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofStep {
    pub hash: String,
    pub side: Side,
}

/// Sibling path proving one leaf's membership in a tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    pub steps: Vec<ProofStep>,
}

/// A Merkle tree keeping every level of node hashes
#[derive(Debug, Clone)]
pub struct MerkleTree {
    levels: Vec<Vec<String>>,
}

impl MerkleTree {
    /// Build a tree by hashing every item into a leaf, then pairing and
    /// hashing level by level until a single root remains
    pub fn build<S: AsRef<str>>(items: &[S]) -> Result<Self> {
        if items.is_empty() {
            return Err(HashlabError::EmptyInput);
        }

        let mut level: Vec<String> = items
            .iter()
            .map(|item| sha256_hex(item.as_ref()))
            .collect();
        let mut levels = vec![level.clone()];

        while level.len() > 1 {
            level = next_level(&level);
            levels.push(level.clone());
        }

        Ok(MerkleTree { levels })
    }

    /// The root hash
    pub fn root(&self) -> &str {
        // build() guarantees a topmost level holding exactly one node
        &self.levels[self.levels.len() - 1][0]
    }

    /// All levels, leaves first, root last
    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Sibling path from the given leaf up to the root
    pub fn proof(&self, leaf_index: usize) -> Result<MerkleProof> {
        if leaf_index >= self.leaf_count() {
            return Err(HashlabError::LeafIndexOutOfRange { index: leaf_index });
        }

        let mut steps = Vec::new();
        let mut index = leaf_index;
        for level in &self.levels[..self.levels.len() - 1] {
            let step = if index % 2 == 0 {
                // An odd tail node is its own sibling.
                let sibling = if index + 1 < level.len() { index + 1 } else { index };
                ProofStep {
                    hash: level[sibling].clone(),
                    side: Side::Right,
                }
            } else {
                ProofStep {
                    hash: level[index - 1].clone(),
                    side: Side::Left,
                }
            };
            steps.push(step);
            index /= 2;
        }

        Ok(MerkleProof { steps })
    }
}

fn next_level(level: &[String]) -> Vec<String> {
    level
        .chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            sha256_hex(format!("{left}{right}"))
        })
        .collect()
}

/// Re-derive the root from an item and its proof and compare with the
/// expected root
pub fn verify_proof(item: &str, proof: &MerkleProof, expected_root: &str) -> bool {
    let mut current = sha256_hex(item);
    for step in &proof.steps {
        current = match step.side {
            Side::Left => sha256_hex(format!("{}{}", step.hash, current)),
            Side::Right => sha256_hex(format!("{}{}", current, step.hash)),
        };
    }
    current == expected_root
}
