//! Complexity-class tags shared across the crate.

use serde::{Deserialize, Serialize};

/// Complexity class of a workload.
///
/// Purely a reporting tag; the harness never verifies the asymptotic claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityClass {
    /// Binary search over a sorted sequence.
    LogN,
    /// Linear sum over a sequence.
    Linear,
    /// Comparison sort of a random sequence.
    NLogN,
}

impl ComplexityClass {
    /// All classes in their fixed per-round execution order.
    pub const EXECUTION_ORDER: [ComplexityClass; 3] = [
        ComplexityClass::Linear,
        ComplexityClass::LogN,
        ComplexityClass::NLogN,
    ];

    /// Human-readable label used in reporter rows and chart titles.
    pub fn label(self) -> &'static str {
        match self {
            ComplexityClass::LogN => "O(log n)",
            ComplexityClass::Linear => "O(n)",
            ComplexityClass::NLogN => "O(n log n)",
        }
    }

    /// Short stem used in chart file names.
    pub fn file_stem(self) -> &'static str {
        match self {
            ComplexityClass::LogN => "logn",
            ComplexityClass::Linear => "n",
            ComplexityClass::NLogN => "nlogn",
        }
    }
}
