//! Scaling characterized values to non-characterized sizes.

/// How a characterized value scales with size.
///
/// Both kinds pass through the anchors (0, 0) and
/// (`reference_size`, `reference_value`).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Interpolation {
    /// `y = (v / r) · t`; used for adders.
    Linear,
    /// `y = a·t² + c` fitted through both anchors; used for multipliers.
    Quadratic,
}

impl Interpolation {
    /// Estimates the value at `target` from the value at `reference_size`.
    ///
    /// Returns `reference_value` unchanged when `target == reference_size`.
    /// A zero `reference_size` has no slope to extrapolate from and yields
    /// the reference value for any target.
    pub fn apply(self, target: f64, reference_size: f64, reference_value: f64) -> f64 {
        if target == reference_size || reference_size == 0.0 {
            return reference_value;
        }
        match self {
            Interpolation::Linear => {
                let slope = reference_value / reference_size;
                slope * target
            }
            Interpolation::Quadratic => {
                let a = reference_value / (reference_size * reference_size);
                let c = reference_value - a * reference_size * reference_size;
                a * target * target + c
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * b.abs().max(1.0)
    }

    #[test]
    fn reference_size_is_exact() {
        for v in [0.21, 4.2, 1234.5678, 1e-7] {
            assert_eq!(Interpolation::Linear.apply(32.0, 32.0, v), v);
            assert_eq!(Interpolation::Quadratic.apply(32.0, 32.0, v), v);
        }
    }

    #[test]
    fn half_size() {
        assert!(close(Interpolation::Linear.apply(16.0, 32.0, 8.0), 4.0));
        assert!(close(Interpolation::Quadratic.apply(16.0, 32.0, 8.0), 2.0));
    }

    #[test]
    fn extrapolates_above_reference() {
        assert!(close(Interpolation::Linear.apply(64.0, 32.0, 0.21), 0.42));
        assert!(close(Interpolation::Quadratic.apply(64.0, 32.0, 4.2), 16.8));
    }

    #[test]
    fn zero_size_is_zero() {
        assert!(close(Interpolation::Linear.apply(0.0, 32.0, 3.0), 0.0));
        assert!(close(Interpolation::Quadratic.apply(0.0, 64.0, 3.0), 0.0));
    }

    #[test]
    fn degenerate_reference() {
        assert_eq!(Interpolation::Linear.apply(8.0, 0.0, 3.0), 3.0);
    }
}
