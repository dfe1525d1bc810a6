//! Merkle tree example for hashlab
//!
//! Run with: cargo run --example merkle_tree

use hashlab::{short_hash, verify_proof, MerkleTree, Side};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Merkle Tree Example\n");
    println!("{}", "=".repeat(60));

    // 1. Trees of different sizes
    println!("\n1. Building Trees of Different Sizes");
    println!("{}", "-".repeat(60));
    let inputs: [&[&str]; 3] = [
        &["single"],
        &["tx1", "tx2"],
        &["tx1", "tx2", "tx3", "tx4", "tx5"],
    ];
    for items in inputs {
        let tree = MerkleTree::build(items)?;
        println!("\nInput: {items:?}");
        println!("Merkle Root: {}", tree.root());
        render_tree(&tree, items);
    }

    // 2. Proof generation and verification
    println!("\n2. Merkle Proof");
    println!("{}", "-".repeat(60));
    let items = ["tx1", "tx2", "tx3", "tx4", "tx5"];
    let tree = MerkleTree::build(&items)?;
    let proof = tree.proof(2)?;

    println!("Proof for '{}' ({} steps):", items[2], proof.steps.len());
    for (i, step) in proof.steps.iter().enumerate() {
        let position = match step.side {
            Side::Left => "LEFT",
            Side::Right => "RIGHT",
        };
        println!("  Step {}: {} ({position})", i + 1, short_hash(&step.hash));
    }
    println!("\nProof as JSON:\n{}", serde_json::to_string_pretty(&proof)?);

    let valid = verify_proof(items[2], &proof, tree.root());
    println!("\nVerification: {}", if valid { "VALID" } else { "INVALID" });

    // 3. Tampering is detected
    println!("\n3. Tampering Detection");
    println!("{}", "-".repeat(60));
    let tampered = verify_proof("tx9", &proof, tree.root());
    println!(
        "Verifying 'tx9' against the proof for 'tx3': {}",
        if tampered { "VALID" } else { "INVALID" }
    );

    println!("\n{}", "=".repeat(60));
    println!("Example completed!");
    Ok(())
}

/// Print the tree in a folder-like structure, root first
fn render_tree(tree: &MerkleTree, items: &[&str]) {
    let levels = tree.levels();
    let root_level = levels.len() - 1;
    if root_level == 0 {
        return;
    }
    render_node(levels, items, root_level, 0, "");
}

fn render_node(levels: &[Vec<String>], items: &[&str], level: usize, node: usize, prefix: &str) {
    if level == 0 {
        return;
    }

    let children = &levels[level - 1];
    let left = node * 2;
    let right = left + 1;
    let has_right = right < children.len();

    if left < children.len() {
        let label = if level == 1 {
            items[left].to_string()
        } else {
            format!("Node{left}")
        };
        let branch = if has_right { "├────" } else { "└────" };
        println!("{prefix}{branch} {label} ({})", short_hash(&children[left]));
        if level > 1 {
            let next = format!("{prefix}{}", if has_right { "│     " } else { "      " });
            render_node(levels, items, level - 1, left, &next);
        }
    }

    if has_right {
        let duplicated = children[right] == children[left];
        let dup = if duplicated { " (dup)" } else { "" };
        let label = if level == 1 {
            items[right].to_string()
        } else {
            format!("Node{right}")
        };
        println!("{prefix}└──── {label}{dup} ({})", short_hash(&children[right]));
        if level > 1 {
            render_node(levels, items, level - 1, right, &format!("{prefix}      "));
        }
    }
}
