//! Bounded brute-force searches against SHA-256 digests
//!
//! The searches here are demonstrations of why such attacks are infeasible,
//! not security tools. Candidate strings come from a caller-supplied source,
//! so the console binaries can plug in random or sequential generators and
//! the tests can inject deterministic ones. Every loop is bounded by an
//! attempt ceiling, a wall-clock ceiling, and an external stop flag checked
//! once per iteration.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::digest::sha256_hex;
use crate::distance::hamming_distance;
use crate::error::Result;

/// Attempt and wall-clock ceilings for one search invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_attempts: u64,
    pub max_duration: Duration,
}

impl SearchLimits {
    /// The ceilings used by the console demonstrations
    pub const DEMO: SearchLimits = SearchLimits {
        max_attempts: 1_000_000,
        max_duration: Duration::from_secs(30),
    };
}

/// Why a pre-image search stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A candidate hashed exactly to the target
    Found { candidate: String },
    /// The attempt ceiling was reached first
    AttemptLimit,
    /// The wall-clock ceiling was reached first
    TimeLimit,
    /// The stop flag was raised externally
    Interrupted,
}

/// The candidate closest to the target seen so far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestMatch {
    pub candidate: String,
    pub hash: String,
    pub distance: usize,
}

/// Counters accumulated by one pre-image search, valid whichever way it ended
#[derive(Debug, Clone)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub attempts: u64,
    pub elapsed: Duration,
    pub best: Option<BestMatch>,
}

impl SearchReport {
    pub fn found(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Found { .. })
    }

    /// Observed attempts per second
    pub fn hash_rate(&self) -> f64 {
        attempts_per_sec(self.attempts, self.elapsed)
    }

    /// Fraction of the 2^256 output space covered by the attempts made
    pub fn success_probability(&self) -> f64 {
        self.attempts as f64 / 2f64.powi(256)
    }
}

/// Progress snapshot handed to the caller's callback
#[derive(Debug, Clone, Copy)]
pub struct SearchProgress<'a> {
    pub attempts: u64,
    pub elapsed: Duration,
    pub rate: f64,
    pub best: Option<&'a BestMatch>,
}

/// Why a collision search stopped
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// Two distinct inputs hashed to the same digest
    Found {
        first: String,
        second: String,
        hash: String,
    },
    /// The attempt ceiling was reached first
    AttemptLimit,
    /// The wall-clock ceiling was reached first
    TimeLimit,
    /// The stop flag was raised externally
    Interrupted,
}

/// Counters accumulated by one collision search
#[derive(Debug, Clone)]
pub struct CollisionReport {
    pub outcome: CollisionOutcome,
    pub attempts: u64,
    pub unique_hashes: usize,
    pub elapsed: Duration,
}

impl CollisionReport {
    pub fn found(&self) -> bool {
        matches!(self.outcome, CollisionOutcome::Found { .. })
    }

    /// Observed attempts per second
    pub fn hash_rate(&self) -> f64 {
        attempts_per_sec(self.attempts, self.elapsed)
    }
}

/// Progress snapshot for a collision search
#[derive(Debug, Clone, Copy)]
pub struct CollisionProgress {
    pub attempts: u64,
    pub elapsed: Duration,
    pub rate: f64,
    pub unique_hashes: usize,
}

fn attempts_per_sec(attempts: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs > 0.0 {
        attempts as f64 / secs
    } else {
        0.0
    }
}

/// Search for an input whose SHA-256 digest equals `target_hash`
///
/// Candidates come from `next_candidate`; the search keeps the candidate
/// with the smallest Hamming distance to the target seen so far (ties keep
/// the earlier one). `on_progress` fires every `progress_every` attempts
/// (0 disables it). Termination, first to trigger wins: exact match, the
/// attempt ceiling, the wall-clock ceiling, or the stop flag.
pub fn preimage_search<C, P>(
    target_hash: &str,
    limits: SearchLimits,
    progress_every: u64,
    stop: &AtomicBool,
    mut next_candidate: C,
    mut on_progress: P,
) -> Result<SearchReport>
where
    C: FnMut() -> String,
    P: FnMut(SearchProgress<'_>),
{
    let started = Instant::now();
    let mut attempts: u64 = 0;
    let mut best: Option<BestMatch> = None;

    let outcome = loop {
        if stop.load(Ordering::SeqCst) {
            break SearchOutcome::Interrupted;
        }
        if attempts >= limits.max_attempts {
            break SearchOutcome::AttemptLimit;
        }
        if started.elapsed() >= limits.max_duration {
            break SearchOutcome::TimeLimit;
        }

        let candidate = next_candidate();
        let candidate_hash = sha256_hex(&candidate);
        attempts += 1;

        if candidate_hash == target_hash {
            break SearchOutcome::Found { candidate };
        }

        let distance = hamming_distance(target_hash, &candidate_hash)?;
        if best.as_ref().map_or(true, |b| distance < b.distance) {
            best = Some(BestMatch {
                candidate,
                hash: candidate_hash,
                distance,
            });
        }

        if progress_every > 0 && attempts % progress_every == 0 {
            let elapsed = started.elapsed();
            on_progress(SearchProgress {
                attempts,
                elapsed,
                rate: attempts_per_sec(attempts, elapsed),
                best: best.as_ref(),
            });
        }
    };

    Ok(SearchReport {
        outcome,
        attempts,
        elapsed: started.elapsed(),
        best,
    })
}

/// Search for two distinct inputs with the same SHA-256 digest
///
/// Stores every digest seen in a map (the birthday-paradox approach) and
/// stops on the first duplicate coming from a different input. Bounded the
/// same way as [`preimage_search`].
pub fn collision_search<C, P>(
    limits: SearchLimits,
    progress_every: u64,
    stop: &AtomicBool,
    mut next_candidate: C,
    mut on_progress: P,
) -> CollisionReport
where
    C: FnMut() -> String,
    P: FnMut(CollisionProgress),
{
    let started = Instant::now();
    let mut attempts: u64 = 0;
    let mut seen: HashMap<String, String> = HashMap::new();

    let outcome = loop {
        if stop.load(Ordering::SeqCst) {
            break CollisionOutcome::Interrupted;
        }
        if attempts >= limits.max_attempts {
            break CollisionOutcome::AttemptLimit;
        }
        if started.elapsed() >= limits.max_duration {
            break CollisionOutcome::TimeLimit;
        }

        let candidate = next_candidate();
        let candidate_hash = sha256_hex(&candidate);
        attempts += 1;

        match seen.get(&candidate_hash) {
            // A repeated input is not a collision, only a repeated candidate.
            Some(previous) if *previous != candidate => {
                break CollisionOutcome::Found {
                    first: previous.clone(),
                    second: candidate,
                    hash: candidate_hash,
                };
            }
            Some(_) => {}
            None => {
                seen.insert(candidate_hash, candidate);
            }
        }

        if progress_every > 0 && attempts % progress_every == 0 {
            let elapsed = started.elapsed();
            on_progress(CollisionProgress {
                attempts,
                elapsed,
                rate: attempts_per_sec(attempts, elapsed),
                unique_hashes: seen.len(),
            });
        }
    };

    CollisionReport {
        outcome,
        attempts,
        unique_hashes: seen.len(),
        elapsed: started.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_source() -> impl FnMut() -> String {
        let mut n = 0u64;
        move || {
            let candidate = format!("candidate-{n}");
            n += 1;
            candidate
        }
    }

    fn limits(max_attempts: u64) -> SearchLimits {
        SearchLimits {
            max_attempts,
            max_duration: Duration::from_secs(60),
        }
    }

    #[test]
    fn test_attempt_ceiling_is_exact() {
        let target = sha256_hex("no candidate hashes to this");
        let stop = AtomicBool::new(false);
        let report =
            preimage_search(&target, limits(500), 0, &stop, counting_source(), |_| {}).unwrap();

        assert_eq!(report.outcome, SearchOutcome::AttemptLimit);
        assert_eq!(report.attempts, 500);
        assert!(!report.found());
    }

    #[test]
    fn test_stops_on_exact_match() {
        let target = sha256_hex("candidate-3");
        let stop = AtomicBool::new(false);
        let report =
            preimage_search(&target, limits(1_000), 0, &stop, counting_source(), |_| {}).unwrap();

        assert_eq!(
            report.outcome,
            SearchOutcome::Found {
                candidate: "candidate-3".to_string()
            }
        );
        assert_eq!(report.attempts, 4);
        assert!(report.found());
    }

    #[test]
    fn test_preset_stop_flag_interrupts_before_any_attempt() {
        let target = sha256_hex("whatever");
        let stop = AtomicBool::new(true);
        let report =
            preimage_search(&target, limits(1_000), 0, &stop, counting_source(), |_| {}).unwrap();

        assert_eq!(report.outcome, SearchOutcome::Interrupted);
        assert_eq!(report.attempts, 0);
        assert!(report.best.is_none());
    }

    #[test]
    fn test_zero_time_ceiling_wins_immediately() {
        let target = sha256_hex("whatever");
        let stop = AtomicBool::new(false);
        let zero_time = SearchLimits {
            max_attempts: 1_000,
            max_duration: Duration::ZERO,
        };
        let report =
            preimage_search(&target, zero_time, 0, &stop, counting_source(), |_| {}).unwrap();

        assert_eq!(report.outcome, SearchOutcome::TimeLimit);
        assert_eq!(report.attempts, 0);
    }

    #[test]
    fn test_tracks_smallest_distance_seen() {
        let target = sha256_hex("target");
        let expected_min = (0..50)
            .map(|n| {
                let hash = sha256_hex(format!("candidate-{n}"));
                hamming_distance(&target, &hash).unwrap()
            })
            .min()
            .unwrap();

        let stop = AtomicBool::new(false);
        let report =
            preimage_search(&target, limits(50), 0, &stop, counting_source(), |_| {}).unwrap();

        let best = report.best.unwrap();
        assert_eq!(best.distance, expected_min);
        assert_eq!(best.hash, sha256_hex(&best.candidate));
    }

    #[test]
    fn test_progress_fires_every_interval() {
        let target = sha256_hex("no candidate hashes to this");
        let stop = AtomicBool::new(false);
        let mut ticks = Vec::new();
        preimage_search(&target, limits(35), 10, &stop, counting_source(), |p| {
            ticks.push(p.attempts)
        })
        .unwrap();

        assert_eq!(ticks, vec![10, 20, 30]);
    }

    #[test]
    fn test_collision_search_reaches_attempt_ceiling() {
        let stop = AtomicBool::new(false);
        let report = collision_search(limits(200), 0, &stop, counting_source(), |_| {});

        assert_eq!(report.outcome, CollisionOutcome::AttemptLimit);
        assert_eq!(report.attempts, 200);
        assert_eq!(report.unique_hashes, 200);
        assert!(!report.found());
    }

    #[test]
    fn test_repeated_input_is_not_a_collision() {
        let stop = AtomicBool::new(false);
        let report = collision_search(limits(50), 0, &stop, || "same".to_string(), |_| {});

        assert_eq!(report.outcome, CollisionOutcome::AttemptLimit);
        assert_eq!(report.unique_hashes, 1);
    }

    #[test]
    fn test_collision_search_interrupts() {
        let stop = AtomicBool::new(true);
        let report = collision_search(limits(50), 0, &stop, counting_source(), |_| {});

        assert_eq!(report.outcome, CollisionOutcome::Interrupted);
        assert_eq!(report.attempts, 0);
    }

    #[test]
    fn test_report_rates() {
        let report = SearchReport {
            outcome: SearchOutcome::AttemptLimit,
            attempts: 1_000,
            elapsed: Duration::from_secs(2),
            best: None,
        };
        assert_eq!(report.hash_rate(), 500.0);
        assert!(report.success_probability() > 0.0);
        assert!(report.success_probability() < 1e-70);
    }
}
