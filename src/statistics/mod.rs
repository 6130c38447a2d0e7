//! Descriptive statistics over elapsed-time readings.
//!
//! - Time-unit conversions (nanoseconds to the millisecond reporting unit)
//! - Mean, median and population standard deviation for a SampleSet

mod summary;
mod units;

pub use summary::{aggregate_ns, mean, median, population_stddev};
pub use units::{ms_to_us, to_ms, to_us};
