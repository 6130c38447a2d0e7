//! Measurement infrastructure: the wall clock, the three probes, and the
//! driver that turns a schedule into a Report.
//!
//! Timing uses `std::time::Instant`, the platform's monotonic
//! high-resolution clock. Cycle-accurate counting is explicitly out of
//! scope; the warm-up/discard/stddev policy exists to characterize the
//! noise a wall clock sees.

mod clock;
mod driver;
pub mod probes;

pub use clock::{check as check_clock, ClockInfo};
pub use driver::{Driver, StdWorkloads, Workloads};
