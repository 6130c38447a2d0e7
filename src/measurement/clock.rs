//! Startup verification of the monotonic wall clock.
//!
//! `Instant` is monotonic by construction and unaffected by wall-clock
//! adjustments; what can vary by platform is its effective resolution. The
//! check below confirms the clock actually advances and estimates the
//! smallest observable tick, failing fatally if no distinct readings can be
//! obtained.

use std::time::Instant;

use crate::error::BenchError;

/// Number of back-to-back read pairs sampled when estimating resolution.
const RESOLUTION_PROBES: usize = 1_000;

/// Result of the startup clock check.
#[derive(Debug, Clone, Copy)]
pub struct ClockInfo {
    /// Smallest non-zero delta observed between consecutive reads, in ns.
    pub resolution_ns: u64,
}

/// Verify the monotonic clock is usable and estimate its resolution.
///
/// # Errors
///
/// `BenchError::ClockUnavailable` if no pair of consecutive reads ever
/// produced distinct values, meaning elapsed times would all be zero.
pub fn check() -> Result<ClockInfo, BenchError> {
    let mut min_delta_ns = u64::MAX;

    for _ in 0..RESOLUTION_PROBES {
        let t0 = Instant::now();
        let delta = t0.elapsed().as_nanos() as u64;
        if delta > 0 && delta < min_delta_ns {
            min_delta_ns = delta;
        }
    }

    if min_delta_ns == u64::MAX {
        // Spin on a single origin until the reading moves, then give up.
        let origin = Instant::now();
        for _ in 0..RESOLUTION_PROBES {
            let delta = origin.elapsed().as_nanos() as u64;
            if delta > 0 {
                return Ok(ClockInfo {
                    resolution_ns: delta,
                });
            }
        }
        return Err(BenchError::ClockUnavailable(
            "Instant never produced distinct consecutive readings".to_string(),
        ));
    }

    Ok(ClockInfo {
        resolution_ns: min_delta_ns,
    })
}
