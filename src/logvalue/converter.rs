//! # Conversion Utilities
//!
//! Moves values between `f64` and the log domain.
//!
//! - `x > 0` maps to `(ln x, +)`
//! - `x < 0` maps to `(ln -x, -)`
//! - `0.0` and `-0.0` both map to the canonical zero
//!
//! Projecting back computes `sign * exp(log_mag)`. Magnitudes outside the
//! `f64` range project to `0.0` or `±inf`; that is not an error.

use std::fmt::{self, Display};

use crate::error::LogValueError;
use crate::logvalue::LogValue;

impl LogValue {
    /// Creates a LogValue from an IEEE 754 double.
    ///
    /// # Panics
    ///
    /// Panics if `value` is `NaN`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numprim::LogValue;
    ///
    /// let v = LogValue::from_f64(-2.0);
    /// assert!(v.is_sign_negative());
    /// assert_eq!(v.ln(), 2.0_f64.ln());
    /// ```
    pub fn from_f64(value: f64) -> Self {
        match Self::try_from_f64(value) {
            Ok(v) => v,
            Err(err) => panic!("cannot convert {value} to LogValue: {err}"),
        }
    }

    pub fn try_from_f64(value: f64) -> Result<Self, LogValueError> {
        if value.is_nan() {
            return Err(LogValueError::NotANumber);
        }
        if value == 0.0 {
            return Ok(Self::zero());
        }
        Ok(Self::new_unchecked(value.abs().ln(), value < 0.0))
    }

    /// Projects the value back onto `f64`.
    ///
    /// Underflows to `±0.0` and overflows to `±inf` when the magnitude is
    /// outside the `f64` range.
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let magnitude = self.log_mag.exp();
        if self.negative { -magnitude } else { magnitude }
    }
}

impl From<f64> for LogValue {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<f32> for LogValue {
    fn from(value: f32) -> Self {
        Self::from_f64(f64::from(value))
    }
}

impl From<i32> for LogValue {
    fn from(value: i32) -> Self {
        Self::from_f64(f64::from(value))
    }
}

impl From<LogValue> for f64 {
    fn from(value: LogValue) -> Self {
        value.to_f64()
    }
}

impl Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let projected = self.to_f64();
        if self.is_zero() || (projected.is_finite() && projected != 0.0) {
            return Display::fmt(&projected, f);
        }
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "exp({})", self.log_mag)
    }
}
