//! # complexity-bench
//!
//! Empirically characterize the wall-clock cost of three canonical
//! complexity classes — binary search (O(log n)), linear sum (O(n)) and
//! comparison sort (O(n log n)) — as input size grows geometrically.
//!
//! Each workload runs repeatedly at every scheduled size; per-size mean,
//! median and population standard deviation (in milliseconds) feed a
//! deterministic textual report and PNG line charts stamped with the host
//! device label.
//!
//! The interesting part is not the plotting but the measurement pipeline:
//! warm-up sweeps, a leading-reading discard policy, collector-hint
//! placement, a monotonic wall clock, and input arrays prepared outside
//! every timed region. Two profiles are provided:
//!
//! - **Basic**: measure immediately, keep every reading. Noisy.
//! - **Stabilized**: warm-up sweeps across the schedule, the first three
//!   readings of every (size, class) dropped, a collector hint before each
//!   size. Use this for numbers you intend to compare.
//!
//! ## Quick Start
//!
//! ```no_run
//! use complexity_bench::{Config, Driver, StdWorkloads};
//!
//! let mut config = Config::stabilized("my-laptop");
//! config.schedule = vec![1_000, 10_000, 100_000];
//!
//! let mut driver = Driver::new(config, StdWorkloads::new()).unwrap();
//! let report = driver.run(&mut std::io::stdout()).unwrap();
//!
//! for row in &report.rows {
//!     assert!(row.nlogn.mean_ms >= 0.0);
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod constants;
mod error;
mod result;
mod types;

// Functional modules
pub mod measurement;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use config::{Config, Profile};
pub use constants::{
    DEFAULT_OUT_DIR, DEFAULT_REPEATS, DEFAULT_SCHEDULE, STABILIZED_DISCARD,
    STABILIZED_WARMUP_PASSES,
};
pub use error::{BenchError, ConfigError, ProbeError, RenderError};
pub use measurement::{check_clock, ClockInfo, Driver, StdWorkloads, Workloads};
pub use output::{
    chart_path, format_row, render_report, ChartRenderer, ChartSpec, PlottersRenderer,
    RenderSummary, Series,
};
pub use result::{Aggregate, Report, SizeRow};
pub use types::ComplexityClass;
