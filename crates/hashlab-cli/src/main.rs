//! Interactive demonstrations of SHA-256 hash-function properties
//!
//! Run with: cargo run --bin hashlab

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use hashlab_cli::{avalanche, preimage};

fn main() -> Result<()> {
    env_logger::init();

    let stop = Arc::new(AtomicBool::new(false));
    {
        let stop = Arc::clone(&stop);
        if let Err(err) = ctrlc::set_handler(move || stop.store(true, Ordering::SeqCst)) {
            log::warn!("could not register Ctrl-C handler: {err}");
        }
    }

    println!("Choose demonstration:");
    println!("1. Avalanche Effect");
    println!("2. Pre-image Attack");
    println!("3. Both");

    print!("\nEnter your choice (1-3): ");
    io::stdout().flush()?;

    let mut choice = String::new();
    io::stdin().read_line(&mut choice)?;

    match choice.trim() {
        "1" => avalanche::run()?,
        "2" => preimage::run(&stop)?,
        "3" => run_both(&stop)?,
        other => {
            log::debug!("unrecognized menu input: {other:?}");
            println!("Invalid choice. Running both demonstrations...");
            run_both(&stop)?;
        }
    }

    Ok(())
}

fn run_both(stop: &AtomicBool) -> Result<()> {
    avalanche::run()?;
    println!("\n{}\n", "=".repeat(100));
    preimage::run(stop)
}
