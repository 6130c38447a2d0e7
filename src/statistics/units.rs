//! Time-unit conversions.

/// Convert elapsed nanoseconds to milliseconds.
///
/// Exactly `ns / 1_000_000.0` in IEEE-754 double precision; no rounding,
/// no clamping.
#[inline]
pub fn to_ms(ns: u64) -> f64 {
    ns as f64 / 1_000_000.0
}

/// Convert elapsed nanoseconds to microseconds. Rendering-only path.
#[inline]
pub fn to_us(ns: u64) -> f64 {
    ns as f64 / 1_000.0
}

/// Rescale a millisecond value to microseconds for per-class charts.
#[inline]
pub fn ms_to_us(ms: f64) -> f64 {
    ms * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_ms_is_exact_division() {
        assert_eq!(to_ms(1_000_000), 1.0);
        assert_eq!(to_ms(0), 0.0);
        assert_eq!(to_ms(500_000), 0.5);
        // Bit-exact for exactly representable inputs.
        assert_eq!(to_ms(20), 20.0 / 1_000_000.0);
        assert_eq!(to_ms(20), 2.0e-5);
    }

    #[test]
    fn us_paths_agree() {
        assert_eq!(to_us(1_000), 1.0);
        assert_eq!(ms_to_us(to_ms(1_000_000)), 1000.0);
    }
}
