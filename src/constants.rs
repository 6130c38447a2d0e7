//! Shared constants for schedules and measurement profiles.

/// Default size schedule: geometric doubling from 1k to ~4M elements.
pub const DEFAULT_SCHEDULE: [usize; 13] = [
    1_000, 2_000, 4_000, 8_000, 16_000, 32_000, 64_000, 128_000, 256_000, 512_000, 1_024_000,
    2_048_000, 4_096_000,
];

/// Default number of retained readings per (class, size).
pub const DEFAULT_REPEATS: usize = 15;

/// Leading readings dropped per (class, size) in the stabilized profile.
pub const STABILIZED_DISCARD: usize = 3;

/// Pre-measurement sweeps per size in the stabilized profile.
pub const STABILIZED_WARMUP_PASSES: usize = 5;

/// Default output directory for rendered charts.
pub const DEFAULT_OUT_DIR: &str = "./plots";
