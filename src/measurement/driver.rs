//! The measurement driver: schedule in, Report out.
//!
//! Single-threaded and strictly sequential by design. Parallel execution
//! would contaminate timings through CPU contention, and the fixed probe
//! order (LINEAR, LOGN, NLOGN) within every round is part of the contract
//! so runs on different hosts remain comparable.

use std::io::Write;

use colored::Colorize;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::config::{Config, Profile};
use crate::error::{BenchError, ProbeError};
use crate::measurement::probes;
use crate::output::terminal::format_row;
use crate::result::{Aggregate, Report, SizeRow};
use crate::statistics::aggregate_ns;
use crate::types::ComplexityClass;

/// The three probes behind one seam.
///
/// The production implementation is [`StdWorkloads`]; tests substitute
/// recording or fault-injecting mocks to pin down driver behavior without
/// real timing noise.
pub trait Workloads {
    /// One timed linear-sum execution at size n.
    fn linear(&mut self, n: usize) -> Result<u64, ProbeError>;
    /// One timed binary-search execution at size n.
    fn logn(&mut self, n: usize) -> Result<u64, ProbeError>;
    /// One timed sort execution at size n.
    fn nlogn(&mut self, n: usize) -> Result<u64, ProbeError>;

    /// Dispatch by class tag, preserving the per-round order.
    fn probe(&mut self, class: ComplexityClass, n: usize) -> Result<u64, ProbeError> {
        match class {
            ComplexityClass::Linear => self.linear(n),
            ComplexityClass::LogN => self.logn(n),
            ComplexityClass::NLogN => self.nlogn(n),
        }
    }
}

/// Production workloads backed by the real probes.
///
/// Input fill uses the thread-local RNG unless a deterministic seed was
/// configured, in which case a Xoshiro256++ stream is used instead.
/// Determinism of the resulting numbers is statistical either way.
#[derive(Debug, Default)]
pub struct StdWorkloads {
    seeded: Option<Xoshiro256PlusPlus>,
}

impl StdWorkloads {
    /// Thread-local RNG workloads.
    pub fn new() -> Self {
        Self { seeded: None }
    }

    /// Workloads with a deterministic input-generation stream.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded: Some(Xoshiro256PlusPlus::seed_from_u64(seed)),
        }
    }

    /// Build workloads matching a config's seed setting.
    pub fn from_config(config: &Config) -> Self {
        match config.measurement_seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Workloads for StdWorkloads {
    fn linear(&mut self, n: usize) -> Result<u64, ProbeError> {
        match &mut self.seeded {
            Some(rng) => probes::linear_probe(n, rng),
            None => probes::linear_probe(n, &mut rand::rng()),
        }
    }

    fn logn(&mut self, n: usize) -> Result<u64, ProbeError> {
        probes::logn_probe(n)
    }

    fn nlogn(&mut self, n: usize) -> Result<u64, ProbeError> {
        match &mut self.seeded {
            Some(rng) => probes::nlogn_probe(n, rng),
            None => probes::nlogn_probe(n, &mut rand::rng()),
        }
    }
}

/// Best-effort collector hint issued before each size's measurement.
///
/// On a managed runtime this is where a GC pass would be requested so any
/// stop-the-world pause lands before the clock starts. Rust has no
/// collector and the probes release their arrays on drop, so the hook is a
/// no-op; it stays in the per-size sequence to keep the protocol identical
/// across implementations.
#[inline]
pub(crate) fn gc_hint() {}

/// Drives the workloads across the schedule and aggregates per-size
/// statistics.
pub struct Driver<W> {
    config: Config,
    workloads: W,
}

impl<W: Workloads> Driver<W> {
    /// Create a driver over a validated configuration.
    ///
    /// # Errors
    ///
    /// `BenchError::Config` for an empty, unordered or zero-containing
    /// schedule, or repeats < 1.
    pub fn new(config: Config, workloads: W) -> Result<Self, BenchError> {
        config.validate()?;
        Ok(Self { config, workloads })
    }

    /// The configuration the driver runs with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full measurement, emitting one reporter row per size to
    /// `out` as it completes.
    ///
    /// Stabilized runs perform the warm-up sweep first; none of its
    /// readings reach the report. `out` is flushed before returning so the
    /// textual report is complete before any chart rendering starts.
    ///
    /// # Errors
    ///
    /// Only IO errors from writing rows to `out`. Probe allocation
    /// failures degrade the affected (size, class) cell to the NaN
    /// sentinel and the run continues.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<Report, std::io::Error> {
        if self.config.warmup_passes > 0 {
            self.warmup();
        }

        let mut rows = Vec::with_capacity(self.config.schedule.len());
        let include_stddev = self.config.profile == Profile::Stabilized;
        let schedule = self.config.schedule.clone();

        for n in schedule {
            let row = self.measure_size(n);
            writeln!(out, "{}", format_row(&row, include_stddev))?;
            rows.push(row);
        }
        out.flush()?;

        Ok(Report {
            device: self.config.device.clone(),
            rows,
        })
    }

    /// Pre-measurement sweep: for every size, `warmup_passes` rounds of all
    /// three probes in the contract order, readings discarded.
    ///
    /// Probe errors are ignored here; if a size cannot allocate, the
    /// measurement phase will surface it as a degraded cell.
    fn warmup(&mut self) {
        let schedule = self.config.schedule.clone();
        for &n in &schedule {
            for _ in 0..self.config.warmup_passes {
                for class in ComplexityClass::EXECUTION_ORDER {
                    let _ = self.workloads.probe(class, n);
                }
            }
        }
    }

    /// Measure one size: GC hint, repeats + discard sequential rounds in
    /// the fixed class order, then aggregation.
    ///
    /// An allocation failure latches the failing class for the rest of the
    /// size; the other classes keep measuring and still retain their full
    /// set of readings.
    fn measure_size(&mut self, n: usize) -> SizeRow {
        gc_hint();

        let repeats = self.config.repeats;
        let discard = self.config.discard;
        let mut readings: [Vec<u64>; 3] = [
            Vec::with_capacity(repeats),
            Vec::with_capacity(repeats),
            Vec::with_capacity(repeats),
        ];
        let mut failed = [false; 3];

        for round in 0..self.config.rounds_per_size() {
            for (slot, class) in ComplexityClass::EXECUTION_ORDER.into_iter().enumerate() {
                if failed[slot] {
                    continue;
                }
                match self.workloads.probe(class, n) {
                    Ok(elapsed_ns) => {
                        if round >= discard {
                            readings[slot].push(elapsed_ns);
                        }
                    }
                    Err(err) => {
                        failed[slot] = true;
                        eprintln!(
                            "{} {} at n={}: {}",
                            "probe error:".yellow().bold(),
                            class.label(),
                            n,
                            err
                        );
                    }
                }
            }
        }

        let mut cells = [Aggregate::failed(); 3];
        for slot in 0..3 {
            // A latched class may hold partial readings; they are dropped
            // with the sentinel, never aggregated.
            if !failed[slot] && !readings[slot].is_empty() {
                cells[slot] = aggregate_ns(&readings[slot]);
            }
        }

        // EXECUTION_ORDER slots are [Linear, LogN, NLogN].
        SizeRow {
            n,
            logn: cells[1],
            linear: cells[0],
            nlogn: cells[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantWorkloads {
        elapsed_ns: u64,
    }

    impl Workloads for ConstantWorkloads {
        fn linear(&mut self, _n: usize) -> Result<u64, ProbeError> {
            Ok(self.elapsed_ns)
        }
        fn logn(&mut self, _n: usize) -> Result<u64, ProbeError> {
            Ok(self.elapsed_ns)
        }
        fn nlogn(&mut self, _n: usize) -> Result<u64, ProbeError> {
            Ok(self.elapsed_ns)
        }
    }

    fn tiny_config() -> Config {
        let mut config = Config::basic("test-box");
        config.schedule = vec![1000, 2000];
        config.repeats = 3;
        config
    }

    #[test]
    fn constant_readings_aggregate_exactly() {
        let workloads = ConstantWorkloads {
            elapsed_ns: 1_000_000,
        };
        let mut driver = Driver::new(tiny_config(), workloads).unwrap();
        let mut sink = Vec::new();
        let report = driver.run(&mut sink).unwrap();

        assert_eq!(report.rows.len(), 2);
        for row in &report.rows {
            for class in ComplexityClass::EXECUTION_ORDER {
                let cell = row.class(class);
                assert_eq!(cell.mean_ms, 1.0);
                assert_eq!(cell.median_ms, 1.0);
                assert_eq!(cell.stddev_ms, 0.0);
            }
        }
    }

    #[test]
    fn invalid_config_rejected_at_construction() {
        let mut config = tiny_config();
        config.schedule = vec![2000, 1000];
        let result = Driver::new(config, ConstantWorkloads { elapsed_ns: 1 });
        assert!(matches!(result, Err(BenchError::Config(_))));
    }

    #[test]
    fn gc_hint_is_callable() {
        gc_hint();
    }
}
