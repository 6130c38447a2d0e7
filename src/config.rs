//! Harness configuration: profiles, schedule, environment loading.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_OUT_DIR, DEFAULT_REPEATS, DEFAULT_SCHEDULE, STABILIZED_DISCARD,
    STABILIZED_WARMUP_PASSES,
};
use crate::error::ConfigError;

/// Measurement profile presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// No warm-up, no discard. Reports noisy numbers; σ fields are omitted
    /// from reporter rows.
    Basic,
    /// Warm-up sweeps, leading-reading discard and a pre-size GC hint.
    Stabilized,
}

impl Profile {
    /// Parse a `PROFILE` environment value.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "BASIC" => Ok(Profile::Basic),
            "STABILIZED" => Ok(Profile::Stabilized),
            _ => Err(ConfigError::UnknownProfile(value.to_string())),
        }
    }
}

/// Configuration for a harness run.
///
/// Build one with [`Config::basic`], [`Config::stabilized`] or
/// [`Config::from_env`], then hand it to `Driver::new`, which validates it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Ascending sequence of input sizes.
    pub schedule: Vec<usize>,
    /// Retained readings per (class, size).
    pub repeats: usize,
    /// Leading readings dropped per (class, size).
    pub discard: usize,
    /// Pre-measurement sweeps per size across all three probes.
    pub warmup_passes: usize,
    /// Profile the run was derived from (controls σ reporting).
    pub profile: Profile,
    /// Opaque host device label stamped into chart file names and titles.
    pub device: String,
    /// Directory for rendered charts, created recursively before measurement.
    pub out_dir: PathBuf,
    /// Optional deterministic seed for probe input generation.
    ///
    /// Unset means the thread-local RNG; numeric determinism is not a
    /// contract either way.
    pub measurement_seed: Option<u64>,
    /// Optional path for a JSON copy of the report.
    pub report_json: Option<PathBuf>,
}

impl Config {
    /// BASIC profile with the default schedule: REPEATS retained readings,
    /// no warm-up, no discard.
    pub fn basic(device: impl Into<String>) -> Self {
        Self {
            schedule: DEFAULT_SCHEDULE.to_vec(),
            repeats: DEFAULT_REPEATS,
            discard: 0,
            warmup_passes: 0,
            profile: Profile::Basic,
            device: device.into(),
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            measurement_seed: None,
            report_json: None,
        }
    }

    /// STABILIZED profile with the default schedule: warm-up on, first three
    /// readings per (class, size) discarded, GC hint before each size.
    pub fn stabilized(device: impl Into<String>) -> Self {
        Self {
            discard: STABILIZED_DISCARD,
            warmup_passes: STABILIZED_WARMUP_PASSES,
            profile: Profile::Stabilized,
            ..Self::basic(device)
        }
    }

    /// Load configuration from the environment.
    ///
    /// Recognized variables: `DEVICE` (required), `PROFILE` (default
    /// STABILIZED), `REPEATS`, `OUT_DIR`, `SEED`, `REPORT_JSON`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let device = env::var("DEVICE").map_err(|_| ConfigError::MissingEnv("DEVICE"))?;

        let profile = match env::var("PROFILE") {
            Ok(raw) => Profile::parse(&raw)?,
            Err(_) => Profile::Stabilized,
        };

        let mut config = match profile {
            Profile::Basic => Config::basic(device),
            Profile::Stabilized => Config::stabilized(device),
        };

        if let Some(repeats) = parse_env_usize("REPEATS")? {
            config.repeats = repeats;
        }
        if let Ok(dir) = env::var("OUT_DIR") {
            config.out_dir = PathBuf::from(dir);
        }
        if let Some(seed) = parse_env_u64("SEED")? {
            config.measurement_seed = Some(seed);
        }
        if let Ok(path) = env::var("REPORT_JSON") {
            config.report_json = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Check the invariants the driver depends on.
    ///
    /// A schedule that is not strictly increasing is rejected rather than
    /// processed in the given order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.schedule.is_empty() {
            return Err(ConfigError::EmptySchedule);
        }
        for (index, &n) in self.schedule.iter().enumerate() {
            if n == 0 {
                return Err(ConfigError::ZeroSize { index });
            }
            if index > 0 && n <= self.schedule[index - 1] {
                return Err(ConfigError::NonIncreasingSchedule {
                    index,
                    value: n,
                    previous: self.schedule[index - 1],
                });
            }
        }
        if self.repeats < 1 {
            return Err(ConfigError::InvalidRepeats(self.repeats));
        }
        Ok(())
    }

    /// Total rounds executed per size, including discarded ones.
    pub fn rounds_per_size(&self) -> usize {
        self.repeats + self.discard
    }
}

fn parse_env_usize(var: &'static str) -> Result<Option<usize>, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
        Err(_) => Ok(None),
    }
}

fn parse_env_u64(var: &'static str) -> Result<Option<u64>, ConfigError> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { var, value: raw }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_profile_has_no_warmup_or_discard() {
        let config = Config::basic("test-box");
        assert_eq!(config.discard, 0);
        assert_eq!(config.warmup_passes, 0);
        assert_eq!(config.repeats, DEFAULT_REPEATS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn stabilized_profile_discards_three_and_warms_five() {
        let config = Config::stabilized("test-box");
        assert_eq!(config.discard, 3);
        assert_eq!(config.warmup_passes, 5);
        assert_eq!(config.rounds_per_size(), DEFAULT_REPEATS + 3);
    }

    #[test]
    fn profile_parse_accepts_both_cases() {
        assert_eq!(Profile::parse("basic").unwrap(), Profile::Basic);
        assert_eq!(Profile::parse("STABILIZED").unwrap(), Profile::Stabilized);
        assert!(matches!(
            Profile::parse("turbo"),
            Err(ConfigError::UnknownProfile(_))
        ));
    }

    #[test]
    fn empty_schedule_rejected() {
        let mut config = Config::basic("test-box");
        config.schedule.clear();
        assert_eq!(config.validate(), Err(ConfigError::EmptySchedule));
    }

    #[test]
    fn out_of_order_schedule_rejected() {
        let mut config = Config::basic("test-box");
        config.schedule = vec![8000, 1000, 2000];
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonIncreasingSchedule {
                index: 1,
                value: 1000,
                previous: 8000,
            })
        );
    }

    #[test]
    fn zero_size_and_zero_repeats_rejected() {
        let mut config = Config::basic("test-box");
        config.schedule = vec![0, 1000];
        assert_eq!(config.validate(), Err(ConfigError::ZeroSize { index: 0 }));

        let mut config = Config::basic("test-box");
        config.repeats = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRepeats(0)));
    }

    #[test]
    fn default_schedule_is_valid() {
        assert!(Config::basic("x").validate().is_ok());
        assert_eq!(DEFAULT_SCHEDULE[0], 1_000);
        assert_eq!(*DEFAULT_SCHEDULE.last().unwrap(), 4_096_000);
    }
}
