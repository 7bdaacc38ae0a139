use std::fmt;

/// Simulated time and time spans, in milliseconds.
///
/// The kernel keeps every timer in whole milliseconds so that runs are
/// reproducible bit for bit. Fractional values produced by scaling formulas
/// are rounded to the nearest millisecond by [`Millis::scale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub u64);

impl Millis {
    pub const ZERO: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn saturating_sub(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_sub(rhs.0))
    }

    #[inline]
    pub const fn saturating_add(self, rhs: Millis) -> Millis {
        Millis(self.0.saturating_add(rhs.0))
    }

    /// `self + step * k`, or `None` on overflow.
    pub fn checked_add_mul(self, step: Millis, k: u64) -> Option<Millis> {
        step.0
            .checked_mul(k)
            .and_then(|offset| self.0.checked_add(offset))
            .map(Millis)
    }

    /// Multiplies the span by `factor`, rounding to the nearest millisecond.
    ///
    /// Negative and non-finite results collapse to zero.
    pub fn scale(self, factor: f64) -> Millis {
        let scaled = (self.0 as f64 * factor).round();
        if scaled.is_finite() && scaled > 0.0 {
            Millis(scaled as u64)
        } else {
            Millis::ZERO
        }
    }

    /// Converts a resolved formula value into a span.
    ///
    /// Returns `None` for negative or non-finite input.
    pub fn from_f64(value: f64) -> Option<Millis> {
        if value.is_finite() && value >= 0.0 {
            Some(Millis(value.round() as u64))
        } else {
            None
        }
    }
}

impl std::ops::Add for Millis {
    type Output = Millis;
    fn add(self, rhs: Millis) -> Millis {
        Millis(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Millis {
    fn add_assign(&mut self, rhs: Millis) {
        self.0 += rhs.0;
    }
}

impl std::ops::Sub for Millis {
    type Output = Millis;
    fn sub(self, rhs: Millis) -> Millis {
        Millis(self.0 - rhs.0)
    }
}

impl std::ops::Mul<u64> for Millis {
    type Output = Millis;
    fn mul(self, rhs: u64) -> Millis {
        Millis(self.0 * rhs)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_add_mul_reports_overflow() {
        assert_eq!(Millis(100).checked_add_mul(Millis(50), 3), Some(Millis(250)));
        assert_eq!(Millis(100).checked_add_mul(Millis(u64::MAX / 2 + 1), 2), None);
        assert_eq!(Millis(1).checked_add_mul(Millis(u64::MAX), 1), None);
        assert_eq!(Millis(7).checked_add_mul(Millis(u64::MAX), 0), Some(Millis(7)));
    }

    #[test]
    fn scale_rounds_to_nearest() {
        assert_eq!(Millis(1000).scale(1.2), Millis(1200));
        assert_eq!(Millis(333).scale(0.5), Millis(167));
        assert_eq!(Millis(1000).scale(-1.0), Millis::ZERO);
        assert_eq!(Millis(1000).scale(f64::NAN), Millis::ZERO);
    }

    #[test]
    fn from_f64_rejects_negative() {
        assert_eq!(Millis::from_f64(600.4), Some(Millis(600)));
        assert_eq!(Millis::from_f64(-1.0), None);
        assert_eq!(Millis::from_f64(f64::INFINITY), None);
    }
}
