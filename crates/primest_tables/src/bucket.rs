//! Snapping continuous cycle latencies to characterized operating points.

use std::fmt;

/// A discretized latency, one of 0.5, 1, 2, 3, 4, 5, 6 or 10 ns.
///
/// Values strictly between 6 and 10 ns are never produced: anything above
/// 6 ns and up to 10 ns inclusive collapses to 6 ns, anything above 10 ns to
/// 10 ns.
#[derive(Clone, Copy, PartialEq, PartialOrd)]
pub struct LatencyBucket {
    ns: f64,
}

impl LatencyBucket {
    /// Returns the bucket in nanoseconds.
    pub fn ns(&self) -> f64 {
        self.ns
    }

    /// Returns the bucket in seconds.
    pub fn seconds(&self) -> f64 {
        self.ns / 1e9
    }

    /// Returns the row key this bucket matches in a table file.
    ///
    /// Keys are compared as text, so the nanosecond value is rendered the
    /// way the table files write it (`"0.5"`, `"1"`, `"10"`).
    pub fn key(&self) -> String {
        format_general(self.ns)
    }
}

impl fmt::Debug for LatencyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatencyBucket({}ns)", self.key())
    }
}

impl fmt::Display for LatencyBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.key())
    }
}

/// Maps a clock period and an action duration to a latency bucket.
///
/// The latency is `cycle_seconds * action_cycles`. Above 0.75 ns it rounds
/// up to the next whole nanosecond, otherwise it snaps to 0.5 ns. The
/// result is then clamped to 10 ns if above 10 ns, or to 6 ns if above 6 ns.
pub fn bucket_latency(cycle_seconds: f64, action_cycles: f64) -> LatencyBucket {
    let latency = cycle_seconds * action_cycles;
    let ns = if latency > 0.75e-9 {
        (latency * 1e9).ceil()
    } else {
        0.5
    };
    let ns = if ns > 10.0 {
        10.0
    } else if ns > 6.0 {
        6.0
    } else {
        ns
    };
    LatencyBucket { ns }
}

/// Formats a number with six significant digits and no trailing zeros.
///
/// Matches C's `%g`: plain notation for decimal exponents in `-4..6`,
/// scientific notation (`1e+06`, `2.5e-05`) otherwise.
pub fn format_general(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return format!("{value}");
    }

    let sci = format!("{value:.5e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..6).contains(&exponent) {
        let mantissa = strip_fraction_zeros(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{mantissa}e{sign}{:02}", exponent.abs());
    }

    let decimals = (5 - exponent) as usize;
    strip_fraction_zeros(&format!("{value:.decimals$}")).to_string()
}

fn strip_fraction_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
