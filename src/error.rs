//! Error taxonomy and process exit-code mapping.
//!
//! Errors detected before measurement are fatal; errors during measurement
//! degrade the affected (size, class) cell only; errors after measurement
//! (chart rendering) are warnings and never change the exit code.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal, pre-measurement failures.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Invalid configuration (schedule, repeats, profile, environment).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The monotonic high-resolution clock is unusable on this platform.
    #[error("monotonic clock unavailable: {0}")]
    ClockUnavailable(String),

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        /// Directory we attempted to create.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// Writing a reporter row to the output stream failed.
    #[error("failed to write report: {0}")]
    ReportIo(#[from] io::Error),
}

impl BenchError {
    /// Distinct exit code per taxonomy entry, in the 1..4 range.
    pub fn exit_code(&self) -> i32 {
        match self {
            BenchError::Config(_) => 1,
            BenchError::ClockUnavailable(_) => 2,
            BenchError::OutputDir { .. } | BenchError::ReportIo(_) => 3,
        }
    }

    /// Stderr prefix identifying the taxonomy entry.
    pub fn prefix(&self) -> &'static str {
        match self {
            BenchError::Config(_) => "config error:",
            BenchError::ClockUnavailable(_) => "clock error:",
            BenchError::OutputDir { .. } | BenchError::ReportIo(_) => "io error:",
        }
    }
}

/// Configuration validation failures. All fatal before measurement.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The size schedule has no entries.
    #[error("size schedule is empty")]
    EmptySchedule,

    /// A schedule entry is zero; probes require n >= 1.
    #[error("schedule entry {index} is 0; sizes must be >= 1")]
    ZeroSize {
        /// Index of the offending entry.
        index: usize,
    },

    /// The schedule is not strictly increasing.
    #[error("schedule must be strictly increasing: entry {index} is {value} after {previous}")]
    NonIncreasingSchedule {
        /// Index of the offending entry.
        index: usize,
        /// The offending value.
        value: usize,
        /// The preceding value.
        previous: usize,
    },

    /// Fewer than one retained reading per (class, size).
    #[error("REPEATS must be >= 1, got {0}")]
    InvalidRepeats(usize),

    /// Profile string is neither BASIC nor STABILIZED.
    #[error("unknown PROFILE {0:?} (expected BASIC or STABILIZED)")]
    UnknownProfile(String),

    /// A required environment variable is unset.
    #[error("required environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// An environment variable failed to parse.
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv {
        /// Variable name.
        var: &'static str,
        /// The unparseable value.
        value: String,
    },
}

/// Failures inside a single probe invocation.
///
/// Never fatal: the driver records a NaN sentinel Aggregate for the affected
/// (size, class) cell and moves on.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProbeError {
    /// The n-element work array could not be allocated.
    #[error("failed to allocate a {requested}-element work array")]
    Allocation {
        /// Requested element count.
        requested: usize,
    },
}

/// Chart rendering failures, surfaced as warnings after the report is out.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawing backend rejected the chart.
    #[error("chart backend: {0}")]
    Backend(String),

    /// Writing the image file failed.
    #[error("image io: {0}")]
    Io(#[from] io::Error),
}
