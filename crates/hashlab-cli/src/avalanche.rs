//! Avalanche-effect demonstration: near-identical inputs, wildly
//! different digests

use anyhow::Result;
use colored::Colorize;
use hashlab::{hamming_distance, sha256_hex, HASH_HEX_LEN};

const ORIGINAL: &str = "Hello, Blockchain!";

const TEST_CASES: [(&str, &str); 5] = [
    ("Hello, Blockchain.", "Changed exclamation to period"),
    ("hello, Blockchain!", "Changed 'H' to lowercase 'h'"),
    ("Hello, Blockchain! ", "Added one space at the end"),
    ("Hello, Blockchain!a", "Added character 'a'"),
    ("Hallo, Blockchain!", "Changed 'e' to 'a'"),
];

pub fn run() -> Result<()> {
    println!("=== AVALANCHE EFFECT DEMONSTRATION ===\n");

    let original_hash = sha256_hex(ORIGINAL);

    println!("Original string: '{ORIGINAL}'");
    println!("Original hash:   {original_hash}");
    println!("{}", "=".repeat(80));

    for (modified, description) in TEST_CASES {
        let modified_hash = sha256_hex(modified);
        let distance = hamming_distance(&original_hash, &modified_hash)?;
        let percent = distance as f64 * 100.0 / original_hash.len() as f64;

        println!("\nModification: {description}");
        println!("Modified string: '{modified}'");
        println!("Modified hash:   {modified_hash}");
        println!(
            "Hamming distance: {distance} out of {} characters",
            original_hash.len()
        );
        println!("Percentage different: {percent:.1}%");

        println!("Visual comparison:");
        print!("Original: ");
        for (a, b) in original_hash.chars().zip(modified_hash.chars()) {
            if a != b {
                print!("{}", a.to_string().red());
            } else {
                print!("{a}");
            }
        }
        println!();
        print!("Modified: ");
        for (a, b) in original_hash.chars().zip(modified_hash.chars()) {
            if a != b {
                print!("{}", b.to_string().green());
            } else {
                print!("{b}");
            }
        }
        println!();
        println!("{}", "-".repeat(80));
    }

    bit_position_analysis(ORIGINAL)
}

/// Flip each input bit in turn and table how far the digest moves
fn bit_position_analysis(input: &str) -> Result<()> {
    let original_hash = sha256_hex(input);
    let max_bit = (input.len() * 8 - 1).min(103);

    println!("\n=== BIT POSITION ANALYSIS (0-{max_bit}) ===");
    println!("Testing bit flips from position 0 to {max_bit}...");
    println!("Bit Pos | Differences | Percentage | Sample Modified String");
    println!("--------|-------------|------------|----------------------");

    let mut total_differences = 0usize;
    let mut tests = 0usize;

    for bit in 0..=max_bit {
        let mutated = flip_bit(input, bit);
        let mutated_hash = sha256_hex(&mutated);
        let differences = hamming_distance(&original_hash, &mutated_hash)?;
        total_differences += differences;
        tests += 1;

        if bit % 10 == 0 || bit == max_bit {
            let percent = differences as f64 * 100.0 / HASH_HEX_LEN as f64;
            let sample = sample_text(&mutated);
            println!("{bit:>7} | {differences:>11} | {percent:>9.1}% | {sample}");
        }
    }

    let average = total_differences as f64 / tests as f64;
    let average_percent = average * 100.0 / HASH_HEX_LEN as f64;
    println!("--------|-------------|------------|----------------------");
    println!("Average | {average:>11.1} | {average_percent:>9.1}% | (across {tests} tests)");

    println!("\n=== ANALYSIS SUMMARY ===");
    println!(
        "Input string length: {} characters ({} bits)",
        input.len(),
        input.len() * 8
    );
    println!("Hash output length: {HASH_HEX_LEN} hex characters (256 bits)");
    println!("Tests performed: {tests} bit flips");
    println!("Average differences: {average:.1} out of {HASH_HEX_LEN}");
    println!("Average change percentage: {average_percent:.1}%");
    if average_percent > 45.0 {
        println!("Excellent avalanche effect - small changes cause large hash differences");
    } else {
        println!("Avalanche effect: {average_percent:.1}% (ideal is ~50% per bit)");
    }

    Ok(())
}

/// The input bytes with one bit flipped; position counts from the low bit
/// of the first byte
fn flip_bit(input: &str, bit_position: usize) -> Vec<u8> {
    let mut bytes = input.as_bytes().to_vec();
    let byte_index = bit_position / 8;
    let bit_index = bit_position % 8;
    if byte_index < bytes.len() {
        bytes[byte_index] ^= 1 << bit_index;
    }
    bytes
}

/// Printable preview of mutated input bytes, truncated to 20 characters
fn sample_text(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    if text.chars().count() > 20 {
        let truncated: String = text.chars().take(20).collect();
        format!("{truncated}...")
    } else {
        text.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_bit_changes_one_bit() {
        let original = "Hello".as_bytes();
        let mutated = flip_bit("Hello", 9);
        assert_eq!(mutated.len(), original.len());
        assert_eq!(mutated[1], original[1] ^ 0b10);
        assert_eq!(mutated[0], original[0]);
    }

    #[test]
    fn test_flip_bit_out_of_range_is_identity() {
        assert_eq!(flip_bit("ab", 100), "ab".as_bytes());
    }

    #[test]
    fn test_sample_text_truncates() {
        let long = "x".repeat(30);
        assert_eq!(sample_text(long.as_bytes()), format!("{}...", "x".repeat(20)));
        assert_eq!(sample_text(b"short"), "short");
    }
}
