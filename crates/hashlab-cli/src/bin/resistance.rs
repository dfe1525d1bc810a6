//! Hash-function resistance suite: pre-image, second pre-image, and
//! collision searches over sequential printable-ASCII candidates
//!
//! Run with: cargo run --bin resistance

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use hashlab::{
    collision_search, preimage_search, sequential_string, sha256_hex, CollisionOutcome,
    SearchLimits, SearchOutcome, SearchReport,
};
use hashlab_cli::console::group_digits;

const INPUT: &str = "Secret123";
const PROGRESS_EVERY: u64 = 50_000;

fn main() -> Result<()> {
    env_logger::init();

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        if let Err(err) = ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst)) {
            log::warn!("could not register Ctrl-C handler: {err}");
        }
    }

    println!("=== Hash Function Security Demonstration ===\n");

    println!("1. PRE-IMAGE RESISTANCE TEST");
    println!("Finding input that produces a specific hash output");
    preimage_test(INPUT, &stop)?;

    println!("\n{}\n", "=".repeat(60));
    println!("2. SECOND PRE-IMAGE RESISTANCE TEST");
    println!("Finding different input that produces same hash as known input");
    second_preimage_test(INPUT, &stop)?;

    println!("\n{}\n", "=".repeat(60));
    println!("3. COLLISION RESISTANCE TEST");
    println!("Finding any two different inputs that produce the same hash");
    collision_test(&stop);

    Ok(())
}

fn sequential_source() -> impl FnMut() -> String {
    let mut index: u64 = 0;
    move || {
        let candidate = sequential_string(index);
        index += 1;
        candidate
    }
}

fn print_progress(attempts: u64, rate: f64) {
    println!(
        "  Attempt {}: {:.0} hashes/sec",
        group_digits(attempts),
        rate
    );
}

fn preimage_test(input: &str, stop: &AtomicBool) -> Result<()> {
    let target_hash = sha256_hex(input);

    println!("Target hash (hash of \"{input}\"):");
    println!("{target_hash}\n");
    println!("Attempting to find pre-image...");
    println!("Testing sequential strings to find input that produces this hash:");

    let report = preimage_search(
        &target_hash,
        SearchLimits::DEMO,
        PROGRESS_EVERY,
        stop,
        sequential_source(),
        |p| print_progress(p.attempts, p.rate),
    )?;

    println!("\n--- PRE-IMAGE RESISTANCE RESULTS ---");
    print_search_counters(&report);
    match &report.outcome {
        SearchOutcome::Found { candidate } => {
            println!("PRE-IMAGE FOUND: \"{candidate}\"");
            println!("   This is extremely unlikely and suggests a problem!");
        }
        SearchOutcome::Interrupted => println!("Stopped by user."),
        _ => {
            println!("NO PRE-IMAGE FOUND");
            println!("   This demonstrates strong pre-image resistance");
        }
    }
    Ok(())
}

fn second_preimage_test(input: &str, stop: &AtomicBool) -> Result<()> {
    let target_hash = sha256_hex(input);

    println!("Original input: \"{input}\"");
    println!("Target hash: {target_hash}\n");
    println!("Attempting to find second pre-image...");
    println!("Looking for different input that produces the same hash:");

    // Same enumeration, but the original input itself is not a second
    // pre-image and must be skipped.
    let mut source = sequential_source();
    let report = preimage_search(
        &target_hash,
        SearchLimits::DEMO,
        PROGRESS_EVERY,
        stop,
        move || loop {
            let candidate = source();
            if candidate != input {
                break candidate;
            }
        },
        |p| print_progress(p.attempts, p.rate),
    )?;

    println!("\n--- SECOND PRE-IMAGE RESISTANCE RESULTS ---");
    println!("Original input: \"{input}\"");
    print_search_counters(&report);
    match &report.outcome {
        SearchOutcome::Found { candidate } => {
            println!("SECOND PRE-IMAGE FOUND: \"{candidate}\"");
            println!("   Both \"{input}\" and \"{candidate}\" hash to:");
            println!("   {target_hash}");
        }
        SearchOutcome::Interrupted => println!("Stopped by user."),
        _ => {
            println!("NO SECOND PRE-IMAGE FOUND");
            println!("   This demonstrates strong second pre-image resistance");
        }
    }
    Ok(())
}

fn collision_test(stop: &AtomicBool) {
    println!("Using birthday paradox approach to find collisions...");
    println!("Storing hashes and looking for duplicates:");

    let report = collision_search(
        SearchLimits::DEMO,
        PROGRESS_EVERY,
        stop,
        sequential_source(),
        |p| print_progress(p.attempts, p.rate),
    );

    println!("\n--- COLLISION RESISTANCE RESULTS ---");
    println!("Attempts made: {}", group_digits(report.attempts));
    println!(
        "Unique hashes stored: {}",
        group_digits(report.unique_hashes as u64)
    );
    println!("Time elapsed: {:.2} seconds", report.elapsed.as_secs_f64());
    println!("Rate: {:.0} hashes/second", report.hash_rate());

    match &report.outcome {
        CollisionOutcome::Found {
            first,
            second,
            hash,
        } => {
            println!("COLLISION FOUND!");
            println!("   Input 1: \"{first}\"");
            println!("   Input 2: \"{second}\"");
            println!("   Same hash: {hash}");
            println!("   This is extremely unlikely for SHA-256!");
        }
        CollisionOutcome::Interrupted => println!("Stopped by user."),
        _ => {
            println!("NO COLLISIONS FOUND");
            println!("   This demonstrates strong collision resistance");
        }
    }

    println!("\nBirthday Paradox Analysis:");
    println!("For SHA-256 (256-bit output):");
    println!("Expected attempts for 50% collision probability: 2^128 (about 3.4 x 10^38)");
    println!("Our attempts: {}", group_digits(report.attempts));
    println!("Probability of finding collision: ~0% (negligible)");
}

fn print_search_counters(report: &SearchReport) {
    println!("Attempts made: {}", group_digits(report.attempts));
    println!("Time elapsed: {:.2} seconds", report.elapsed.as_secs_f64());
    println!("Rate: {:.0} hashes/second", report.hash_rate());
}
