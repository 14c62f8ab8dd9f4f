//! # LogValue
//!
//! A signed real number stored as the natural logarithm of its magnitude plus
//! a sign bit. Products and quotients become sums and differences of
//! logarithms, so values far below `f64::MIN_POSITIVE` or above `f64::MAX`
//! stay representable.
//!
//! ## Representation
//!
//! ```text
//! x = (-1)^negative * exp(log_mag),   log_mag in [-inf, +inf]
//! ```
//!
//! Zero is `log_mag = -inf` and is always stored with a positive sign, so
//! there is exactly one zero. `NaN` never appears in either field.
//!
//! ## Examples
//!
//! ```rust
//! use numprim::LogValue;
//!
//! let tiny = LogValue::from(1e-300);
//! let product = tiny * tiny;
//! assert_eq!(product.to_f64(), 0.0);
//! assert_eq!(product, LogValue::from_log(1e-300_f64.ln() * 2.0, false));
//! ```

pub mod arithmetic;
pub mod cmp;
pub mod converter;

use crate::error::LogValueError;

#[derive(Debug, Clone, Copy)]
pub struct LogValue {
    log_mag: f64,
    negative: bool,
}

impl LogValue {
    /// Builds a value from its log-magnitude and sign.
    ///
    /// A log-magnitude of `-inf` is zero and drops the sign.
    ///
    /// # Panics
    ///
    /// Panics if `log_mag` is `NaN`. Use [`LogValue::try_from_log`] to get an
    /// error instead.
    pub fn from_log(log_mag: f64, negative: bool) -> Self {
        match Self::try_from_log(log_mag, negative) {
            Ok(value) => value,
            Err(err) => panic!("invalid log-magnitude {log_mag}: {err}"),
        }
    }

    pub fn try_from_log(log_mag: f64, negative: bool) -> Result<Self, LogValueError> {
        if log_mag.is_nan() {
            return Err(LogValueError::NotANumber);
        }
        Ok(Self::new_unchecked(log_mag, negative))
    }

    /// Normalizes the pair without checking for `NaN`. Callers guarantee
    /// `log_mag` is not `NaN`.
    pub(crate) fn new_unchecked(log_mag: f64, negative: bool) -> Self {
        debug_assert!(!log_mag.is_nan());
        if log_mag == f64::NEG_INFINITY {
            return Self::zero();
        }
        Self {
            // Folds -0.0 into +0.0 so bitwise hashing agrees with equality.
            log_mag: log_mag + 0.0,
            negative,
        }
    }

    pub const fn zero() -> Self {
        Self {
            log_mag: f64::NEG_INFINITY,
            negative: false,
        }
    }

    pub const fn one() -> Self {
        Self {
            log_mag: 0.0,
            negative: false,
        }
    }

    /// Natural logarithm of the magnitude.
    pub fn ln(&self) -> f64 {
        self.log_mag
    }

    pub fn is_zero(&self) -> bool {
        self.log_mag == f64::NEG_INFINITY
    }

    /// True when the magnitude itself is infinite, e.g. built from `f64::INFINITY`.
    pub fn is_infinite(&self) -> bool {
        self.log_mag == f64::INFINITY
    }

    pub fn is_sign_negative(&self) -> bool {
        self.negative
    }

    pub fn is_sign_positive(&self) -> bool {
        !self.negative
    }
}

impl Default for LogValue {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_canonical() {
        let a = LogValue::from_log(f64::NEG_INFINITY, true);
        assert!(a.is_zero());
        assert!(a.is_sign_positive());
        assert_eq!(a, LogValue::from_log(f64::NEG_INFINITY, false));
        assert_eq!(a, LogValue::zero());
        assert_eq!(LogValue::default(), LogValue::zero());
    }

    #[test]
    fn test_negative_zero_log_is_folded() {
        let a = LogValue::from_log(-0.0, false);
        assert!(a.ln().is_sign_positive());
        assert_eq!(a, LogValue::one());
    }

    #[test]
    fn test_try_from_log_rejects_nan() {
        assert_eq!(
            LogValue::try_from_log(f64::NAN, false),
            Err(LogValueError::NotANumber)
        );
        assert!(LogValue::try_from_log(f64::INFINITY, true).is_ok());
    }

    #[test]
    #[should_panic(expected = "invalid log-magnitude")]
    fn test_from_log_panics_on_nan() {
        LogValue::from_log(f64::NAN, false);
    }

    #[test]
    fn test_predicates() {
        let v = LogValue::from_log(2.0, true);
        assert!(v.is_sign_negative());
        assert!(!v.is_zero());
        assert!(!v.is_infinite());
        assert_eq!(v.ln(), 2.0);
        assert!(LogValue::from_log(f64::INFINITY, false).is_infinite());
    }
}
