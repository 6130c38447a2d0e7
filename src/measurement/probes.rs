//! The three workload probes.
//!
//! Each probe allocates and fills its input array outside the timed region,
//! times exactly one execution of the workload, and returns elapsed
//! nanoseconds. Inputs never escape the probe; consumed values pass through
//! `black_box` so the optimizer cannot delete the measured work.

use std::hint::black_box;
use std::time::Instant;

use rand::Rng;

use crate::error::ProbeError;

/// Time one binary search over a sorted sequence of 0..n.
///
/// The target is n/2, the exact middle, so the search walks the full
/// logarithmic probe chain. Setup (building the sorted array) is excluded
/// from the timed span.
pub fn logn_probe(n: usize) -> Result<u64, ProbeError> {
    let mut sorted = try_alloc::<i64>(n)?;
    sorted.extend(0..n as i64);
    let target = (n / 2) as i64;

    let t0 = Instant::now();
    let found = black_box(&sorted).binary_search(black_box(&target));
    let elapsed_ns = t0.elapsed().as_nanos() as u64;

    black_box(found.is_ok());
    Ok(elapsed_ns)
}

/// Time one summation of n uniformly random integers.
///
/// Only the summation loop is timed; filling the array from `rng` happens
/// before the clock starts. The accumulator is routed through `black_box`
/// so dead-store elimination cannot remove the loop.
pub fn linear_probe<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<u64, ProbeError> {
    let values = random_values(n, rng)?;

    let t0 = Instant::now();
    let mut sum: i64 = 0;
    for &v in black_box(values.as_slice()) {
        sum = sum.wrapping_add(v as i64);
    }
    let elapsed_ns = t0.elapsed().as_nanos() as u64;

    black_box(sum);
    Ok(elapsed_ns)
}

/// Time one in-place ascending sort of n uniformly random integers.
///
/// The array is freshly allocated per invocation, so every call sorts
/// random data rather than the previous call's sorted leftovers.
/// `sort_unstable` is the runtime's default comparison sort for primitive
/// slices (pattern-defeating quicksort, linearithmic average case).
pub fn nlogn_probe<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<u64, ProbeError> {
    let mut values = random_values(n, rng)?;

    let t0 = Instant::now();
    black_box(values.as_mut_slice()).sort_unstable();
    let elapsed_ns = t0.elapsed().as_nanos() as u64;

    black_box(values.first().copied());
    Ok(elapsed_ns)
}

/// Allocate an empty Vec with capacity for exactly n elements, surfacing
/// memory exhaustion as a probe error instead of aborting the process.
fn try_alloc<T>(n: usize) -> Result<Vec<T>, ProbeError> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(n)
        .map_err(|_| ProbeError::Allocation { requested: n })?;
    Ok(values)
}

/// Build an n-element array of uniformly random integers.
fn random_values<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Result<Vec<i32>, ProbeError> {
    let mut values = try_alloc::<i32>(n)?;
    for _ in 0..n {
        values.push(rng.random());
    }
    Ok(values)
}
