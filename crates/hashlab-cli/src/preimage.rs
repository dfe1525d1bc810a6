//! Pre-image search demonstration: bounded brute force against a
//! SHA-256 digest

use std::sync::atomic::AtomicBool;

use anyhow::Result;
use hashlab::{
    preimage_search, random_string, sha256_hex, similarity_percent, SearchLimits, SearchOutcome,
    HASH_HEX_LEN,
};

use crate::console::group_digits;

const TARGET: &str = "Secret123";
const PROGRESS_EVERY: u64 = 100_000;

pub fn run(stop: &AtomicBool) -> Result<()> {
    println!("=== PRE-IMAGE ATTACK DEMONSTRATION ===\n");

    let target_hash = sha256_hex(TARGET);

    println!("Target string: '{TARGET}' (this is what we're trying to find)");
    println!("Target hash:   {target_hash}");
    println!("\nAttempting to find a pre-image (input that produces this hash)...");
    println!("This demonstrates why hash functions are considered one-way functions.\n");

    println!("Starting brute force search...");
    println!("Press Ctrl+C to stop early if needed.\n");

    log::debug!("pre-image search starting against {target_hash}");

    let report = preimage_search(
        &target_hash,
        SearchLimits::DEMO,
        PROGRESS_EVERY,
        stop,
        || random_string(TARGET.len()),
        |progress| {
            let best = progress
                .best
                .map_or_else(|| "-".to_string(), |b| b.distance.to_string());
            println!(
                "Attempts: {} | Rate: {:.0} hashes/sec | Best match: {best} differences",
                group_digits(progress.attempts),
                progress.rate
            );
        },
    )?;

    log::debug!(
        "pre-image search finished after {} attempts in {:.2}s",
        report.attempts,
        report.elapsed.as_secs_f64()
    );

    match &report.outcome {
        SearchOutcome::Found { candidate } => {
            println!(
                "INCREDIBLE! Pre-image found after {} attempts!",
                group_digits(report.attempts)
            );
            println!("Found string: '{candidate}'");
            println!("Time taken: {:.2} seconds", report.elapsed.as_secs_f64());
        }
        SearchOutcome::Interrupted => println!("\nStopped by user."),
        _ => {}
    }

    println!("\n{}", "=".repeat(70));
    println!("RESULTS:");
    println!("{}", "=".repeat(70));

    if report.found() {
        println!("Pre-image FOUND! (This is extremely unlikely!)");
    } else {
        println!("Pre-image NOT found (as expected)");
    }

    println!("Total attempts made: {}", group_digits(report.attempts));
    println!("Time elapsed: {:.2} seconds", report.elapsed.as_secs_f64());
    println!("Hash rate: {:.0} hashes per second", report.hash_rate());
    println!("Probability of success: {:.2e}", report.success_probability());

    if let Some(best) = &report.best {
        println!("\nBest match found:");
        println!("  String: '{}'", best.candidate);
        println!("  Hash:   {}", best.hash);
        println!(
            "  Hamming distance: {} out of {HASH_HEX_LEN} characters",
            best.distance
        );
        println!(
            "  Similarity: {:.1}%",
            similarity_percent(best.distance, HASH_HEX_LEN)
        );
    }

    educational_notes(report.hash_rate());
    Ok(())
}

fn educational_notes(hash_rate: f64) {
    println!("\n{}", "=".repeat(70));
    println!("EDUCATIONAL NOTES:");
    println!("{}", "=".repeat(70));
    println!("- SHA-256 has 2^256 (about 1.16 x 10^77) possible outputs");
    println!("- Finding a specific pre-image requires on average 2^255 attempts");
    if hash_rate > 0.0 {
        let years = 2f64.powi(255) / hash_rate / (365.25 * 24.0 * 3600.0);
        println!("- At {hash_rate:.0} hashes/sec, it would take approximately:");
        println!("  {years:.2e} years to find a pre-image");
    }
    println!("- This demonstrates why hash functions are considered 'one-way'");
}
