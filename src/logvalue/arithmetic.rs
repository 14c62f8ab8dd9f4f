//! # Arithmetic
//!
//! Field operations in the log domain.
//!
//! Multiplication and division add or subtract log-magnitudes. Addition uses
//! the log-sum-exp identity around the larger operand `m = max(a, b)` with
//! `d = |a - b|`:
//!
//! ```text
//! same sign:      m + ln(1 + exp(-d))
//! opposite sign:  m + ln(1 - exp(-d))   (sign of the larger magnitude)
//! ```
//!
//! `ln(1 - exp(-d))` loses every digit to cancellation when `d` is small, so
//! it switches to `ln(-expm1(-d))` below `ln 2`.

use std::f64::consts::LN_2;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use log::debug;

use crate::error::LogValueError;
use crate::logvalue::LogValue;

/// `ln(1 + exp(-d))` for `d >= 0`.
fn log1p_exp_neg(d: f64) -> f64 {
    (-d).exp().ln_1p()
}

/// `ln(1 - exp(-d))` for `d > 0`.
fn log1m_exp_neg(d: f64) -> f64 {
    if d <= LN_2 {
        (-(-d).exp_m1()).ln()
    } else {
        (-(-d).exp()).ln_1p()
    }
}

fn add(lhs: LogValue, rhs: LogValue) -> LogValue {
    if lhs.is_zero() {
        return rhs;
    }
    if rhs.is_zero() {
        return lhs;
    }

    let (hi, lo) = if lhs.log_mag >= rhs.log_mag {
        (lhs, rhs)
    } else {
        (rhs, lhs)
    };

    if hi.negative == lo.negative {
        if hi.is_infinite() {
            return hi;
        }
        let d = hi.log_mag - lo.log_mag;
        return LogValue::new_unchecked(hi.log_mag + log1p_exp_neg(d), hi.negative);
    }

    // Equal magnitudes of opposite sign cancel exactly, infinite ones included.
    if hi.log_mag == lo.log_mag {
        return LogValue::zero();
    }
    if hi.is_infinite() {
        return hi;
    }
    let d = hi.log_mag - lo.log_mag;
    LogValue::new_unchecked(hi.log_mag + log1m_exp_neg(d), hi.negative)
}

fn mul(lhs: LogValue, rhs: LogValue) -> LogValue {
    if lhs.is_zero() || rhs.is_zero() {
        return LogValue::zero();
    }
    LogValue::new_unchecked(lhs.log_mag + rhs.log_mag, lhs.negative != rhs.negative)
}

impl LogValue {
    /// Divides `self` by `rhs`.
    ///
    /// # Errors
    ///
    /// - [`LogValueError::DivisionByZero`] when `rhs` is zero
    /// - [`LogValueError::NotANumber`] when both magnitudes are infinite
    ///
    /// # Examples
    ///
    /// ```rust
    /// use numprim::{LogValue, LogValueError};
    ///
    /// let six = LogValue::from(6.0);
    /// let q = six.checked_div(LogValue::from(-3.0)).unwrap();
    /// assert!((q.to_f64() + 2.0).abs() < 1e-12);
    /// assert_eq!(six.checked_div(LogValue::zero()), Err(LogValueError::DivisionByZero));
    /// ```
    pub fn checked_div(self, rhs: Self) -> Result<Self, LogValueError> {
        if rhs.is_zero() {
            debug!("rejected division of {self:?} by zero");
            return Err(LogValueError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        if self.is_infinite() && rhs.is_infinite() {
            debug!("rejected division of two infinite magnitudes");
            return Err(LogValueError::NotANumber);
        }
        Ok(Self::new_unchecked(
            self.log_mag - rhs.log_mag,
            self.negative != rhs.negative,
        ))
    }

    pub fn checked_recip(self) -> Result<Self, LogValueError> {
        Self::one().checked_div(self)
    }

    pub fn abs(self) -> Self {
        Self {
            log_mag: self.log_mag,
            negative: false,
        }
    }

    /// Raises the value to an integer power. `x^0` is one for every `x`,
    /// zero included.
    ///
    /// # Errors
    ///
    /// [`LogValueError::DivisionByZero`] for zero raised to a negative power.
    pub fn checked_powi(self, n: i32) -> Result<Self, LogValueError> {
        if n == 0 {
            return Ok(Self::one());
        }
        if self.is_zero() && n < 0 {
            debug!("rejected zero raised to {n}");
            return Err(LogValueError::DivisionByZero);
        }
        let negative = self.negative && n % 2 != 0;
        Ok(Self::new_unchecked(self.log_mag * f64::from(n), negative))
    }

    /// # Panics
    ///
    /// Panics for zero raised to a negative power. Use
    /// [`LogValue::checked_powi`] to handle that case.
    pub fn powi(self, n: i32) -> Self {
        match self.checked_powi(n) {
            Ok(v) => v,
            Err(err) => panic!("cannot raise {self} to {n}: {err}"),
        }
    }

    /// Raises a non-negative value to a real power.
    ///
    /// # Errors
    ///
    /// - [`LogValueError::NotANumber`] for a negative base or a `NaN` exponent
    /// - [`LogValueError::DivisionByZero`] for zero raised to a negative power
    pub fn powf(self, exponent: f64) -> Result<Self, LogValueError> {
        if exponent.is_nan() || (self.negative && !self.is_zero()) {
            return Err(LogValueError::NotANumber);
        }
        if exponent == 0.0 {
            return Ok(Self::one());
        }
        if self.is_zero() && exponent < 0.0 {
            debug!("rejected zero raised to {exponent}");
            return Err(LogValueError::DivisionByZero);
        }
        let log_mag = self.log_mag * exponent;
        if log_mag.is_nan() {
            // One raised to an infinite power.
            return Err(LogValueError::NotANumber);
        }
        Ok(Self::new_unchecked(log_mag, false))
    }

    pub fn sqrt(self) -> Result<Self, LogValueError> {
        self.powf(0.5)
    }

    /// The value plus one.
    pub fn succ(self) -> Self {
        self + Self::one()
    }

    /// The value minus one.
    pub fn pred(self) -> Self {
        self - Self::one()
    }
}

impl Neg for LogValue {
    type Output = Self;

    fn neg(self) -> Self::Output {
        if self.is_zero() {
            return self;
        }
        Self {
            log_mag: self.log_mag,
            negative: !self.negative,
        }
    }
}

impl Neg for &LogValue {
    type Output = LogValue;

    fn neg(self) -> Self::Output {
        -*self
    }
}

impl Add for LogValue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl Sub for LogValue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        add(self, -rhs)
    }
}

impl Mul for LogValue {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        mul(self, rhs)
    }
}

/// # Panics
///
/// Panics when dividing by zero, or when both magnitudes are infinite. Use
/// [`LogValue::checked_div`] to handle those cases.
impl Div for LogValue {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Ok(v) => v,
            Err(err) => panic!("cannot divide {self} by {rhs}: {err}"),
        }
    }
}

macro_rules! impl_ref_ops {
    ($($op:ident::$method:ident, $op_assign:ident::$method_assign:ident);* $(;)?) => {
        $(
            impl $op<&LogValue> for LogValue {
                type Output = LogValue;

                fn $method(self, rhs: &LogValue) -> Self::Output {
                    $op::$method(self, *rhs)
                }
            }

            impl $op<LogValue> for &LogValue {
                type Output = LogValue;

                fn $method(self, rhs: LogValue) -> Self::Output {
                    $op::$method(*self, rhs)
                }
            }

            impl $op<&LogValue> for &LogValue {
                type Output = LogValue;

                fn $method(self, rhs: &LogValue) -> Self::Output {
                    $op::$method(*self, *rhs)
                }
            }

            impl $op_assign for LogValue {
                fn $method_assign(&mut self, rhs: LogValue) {
                    *self = $op::$method(*self, rhs);
                }
            }

            impl $op_assign<&LogValue> for LogValue {
                fn $method_assign(&mut self, rhs: &LogValue) {
                    *self = $op::$method(*self, *rhs);
                }
            }
        )*
    };
}

impl_ref_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

impl Sum for LogValue {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), add)
    }
}

impl<'a> Sum<&'a LogValue> for LogValue {
    fn sum<I: Iterator<Item = &'a LogValue>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Product for LogValue {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), mul)
    }
}

impl<'a> Product<&'a LogValue> for LogValue {
    fn product<I: Iterator<Item = &'a LogValue>>(iter: I) -> Self {
        iter.copied().product()
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rstest::rstest;

    use super::*;
    use crate::tests::*;

    fn random_pair(rng: &mut impl Rng) -> (f64, f64) {
        (rng.random_range(-1e4..1e4), rng.random_range(-1e4..1e4))
    }

    #[rstest]
    fn test_add_sub(mut rng: impl Rng, n_experiments: usize) {
        for _ in 0..n_experiments {
            let (x, y) = random_pair(&mut rng);
            let (lx, ly) = (LogValue::from(x), LogValue::from(y));

            // Near-total cancellation amplifies the rounding of ln(x) itself.
            if (x + y).abs() > 1e-6 * x.abs().max(y.abs()) {
                assert_rel_close((lx + ly).to_f64(), x + y, &format!("{x} + {y}"));
            }
            if (x - y).abs() > 1e-6 * x.abs().max(y.abs()) {
                assert_rel_close((lx - ly).to_f64(), x - y, &format!("{x} - {y}"));
            }
        }
    }

    #[rstest]
    fn test_mul_div(mut rng: impl Rng, n_experiments: usize) {
        for _ in 0..n_experiments {
            let (x, y) = random_pair(&mut rng);
            let (lx, ly) = (LogValue::from(x), LogValue::from(y));

            assert_rel_close((lx * ly).to_f64(), x * y, &format!("{x} * {y}"));
            if y != 0.0 {
                assert_rel_close((lx / ly).to_f64(), x / y, &format!("{x} / {y}"));
            }
        }
    }

    #[rstest]
    fn test_additive_identity(mut rng: impl Rng, n_experiments: usize) {
        for _ in 0..n_experiments {
            let x = LogValue::from(finite_f64(&mut rng));
            assert_eq!(LogValue::zero() + x, x);
            assert_eq!(x + LogValue::zero(), x);
            assert_eq!(x - LogValue::zero(), x);
        }
    }

    #[test]
    fn test_product_of_small_and_large() {
        let product = LogValue::from(2.0) * LogValue::from(3.0);
        assert_rel_close(product.to_f64(), 6.0, "2 * 3");

        let tiny = LogValue::from(1e-300);
        let underflowed = tiny * tiny;
        assert_eq!(underflowed.to_f64(), 0.0);
        assert!(!underflowed.is_zero());
        assert_eq!(underflowed, LogValue::from_log(1e-300_f64.ln() * 2.0, false));

        let huge = LogValue::from(1e300);
        assert_eq!((huge * huge).to_f64(), f64::INFINITY);
        assert_rel_close((huge * huge / huge).to_f64(), 1e300, "1e300^2 / 1e300");
    }

    #[test]
    fn test_equal_values_cancel() {
        let five = LogValue::from(5.0);
        let diff = five - five;
        assert!(diff.is_zero());
        assert!(diff.is_sign_positive());
        assert_eq!(diff, LogValue::zero());
        assert!((LogValue::from(-5.0) + five).is_zero());
    }

    #[test]
    fn test_cancellation_keeps_precision() {
        let a = LogValue::from(1.0 + 1e-6);
        let b = LogValue::from(1.0);
        let expected = (1.0 + 1e-6) - 1.0;
        let got = (a - b).to_f64();
        assert!((got - expected).abs() / expected < 1e-8, "{got} vs {expected}");

        let c = LogValue::from(-3.0) + LogValue::from(1.0);
        assert!(c.is_sign_negative());
        assert_rel_close(c.to_f64(), -2.0, "-3 + 1");
    }

    #[test]
    fn test_zero_absorbs_multiplication() {
        let zero = LogValue::zero();
        let x = LogValue::from(-7.5);
        assert!((zero * x).is_zero());
        assert!((x * zero).is_zero());
        assert!((zero * LogValue::from(f64::INFINITY)).is_zero());
        assert!((x * zero).is_sign_positive());
    }

    #[test]
    fn test_division() {
        let x = LogValue::from(-8.0);
        assert_eq!(
            x.checked_div(LogValue::zero()),
            Err(LogValueError::DivisionByZero)
        );
        assert_eq!(LogValue::zero().checked_div(x), Ok(LogValue::zero()));

        let inf = LogValue::from(f64::INFINITY);
        assert_eq!(inf.checked_div(inf), Err(LogValueError::NotANumber));

        let q = x.checked_div(LogValue::from(2.0)).unwrap();
        assert_rel_close(q.to_f64(), -4.0, "-8 / 2");
        assert_eq!(
            LogValue::zero().checked_recip(),
            Err(LogValueError::DivisionByZero)
        );
        assert_rel_close(x.checked_recip().unwrap().to_f64(), -0.125, "1 / -8");
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_div_operator_panics_on_zero() {
        let _ = LogValue::from(1.0) / LogValue::zero();
    }

    #[test]
    fn test_infinite_magnitudes() {
        let inf = LogValue::from(f64::INFINITY);
        let neg_inf = LogValue::from(f64::NEG_INFINITY);
        assert!((inf + inf).is_infinite());
        assert!((inf + LogValue::from(-3.0)).is_infinite());
        assert!((inf + neg_inf).is_zero());
        assert_eq!((neg_inf + LogValue::from(3.0)).to_f64(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_negation() {
        let x = LogValue::from(4.0);
        assert_eq!((-x).to_f64(), -x.to_f64());
        assert_eq!(-(-x), x);
        let z = -LogValue::zero();
        assert!(z.is_zero());
        assert!(z.is_sign_positive());
        assert_eq!(-&x, -x);
        assert_eq!(LogValue::from(-4.0).abs(), x);
    }

    #[test]
    fn test_assign_and_ref_ops() {
        let mut acc = LogValue::from(1.0);
        acc += LogValue::from(2.0);
        acc *= &LogValue::from(4.0);
        acc -= LogValue::from(2.0);
        acc /= LogValue::from(5.0);
        assert_rel_close(acc.to_f64(), 2.0, "((1 + 2) * 4 - 2) / 5");

        let a = LogValue::from(3.0);
        let b = LogValue::from(0.5);
        assert_eq!(&a * &b, a * b);
        assert_eq!(&a + b, a + b);
        assert_eq!(a - &b, a - b);
        assert_eq!(&a / &b, a / b);
    }

    #[test]
    fn test_succ_pred() {
        assert_rel_close(LogValue::from(2.0).succ().to_f64(), 3.0, "2 + 1");
        assert_rel_close(LogValue::from(2.0).pred().to_f64(), 1.0, "2 - 1");
        assert_rel_close(LogValue::from(-0.5).succ().to_f64(), 0.5, "-0.5 + 1");
        assert!(LogValue::one().pred().is_zero());
        assert_eq!(LogValue::zero().succ(), LogValue::one());
    }

    #[test]
    fn test_powers() {
        let x = LogValue::from(-2.0);
        assert_rel_close(x.powi(3).to_f64(), -8.0, "(-2)^3");
        assert_rel_close(x.powi(2).to_f64(), 4.0, "(-2)^2");
        assert_rel_close(x.powi(-1).to_f64(), -0.5, "(-2)^-1");
        assert_eq!(x.powi(0), LogValue::one());
        assert_eq!(LogValue::zero().powi(0), LogValue::one());
        assert!(LogValue::zero().powi(2).is_zero());
        assert_eq!(x.checked_powi(-3), Ok(x.powi(-3)));

        assert_eq!(x.powf(0.5), Err(LogValueError::NotANumber));
        assert_eq!(x.sqrt(), Err(LogValueError::NotANumber));
        assert_eq!(LogValue::from(2.0).powf(f64::NAN), Err(LogValueError::NotANumber));
        assert_rel_close(LogValue::from(9.0).sqrt().unwrap().to_f64(), 3.0, "sqrt(9)");
        assert_rel_close(
            LogValue::from(2.0).powf(10.0).unwrap().to_f64(),
            1024.0,
            "2^10",
        );
        assert_eq!(LogValue::zero().sqrt(), Ok(LogValue::zero()));
        assert_eq!(LogValue::from(f64::INFINITY).powf(0.0), Ok(LogValue::one()));
    }

    #[test]
    fn test_zero_to_negative_power_divides_by_zero() {
        let zero = LogValue::zero();
        assert_eq!(zero.checked_powi(-1), Err(LogValueError::DivisionByZero));
        assert_eq!(zero.checked_powi(i32::MIN), Err(LogValueError::DivisionByZero));
        assert_eq!(zero.powf(-0.5), Err(LogValueError::DivisionByZero));
        assert_eq!(zero.powf(f64::NEG_INFINITY), Err(LogValueError::DivisionByZero));
        assert_eq!(zero.checked_powi(-1), zero.checked_recip());
        assert!(zero.powf(0.5).unwrap().is_zero());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn test_powi_panics_on_zero_negative_power() {
        let _ = LogValue::zero().powi(-1);
    }

    #[rstest]
    fn test_sum_and_product(mut rng: impl Rng, n_experiments: usize) {
        let values: Vec<f64> = (0..n_experiments.min(1_000))
            .map(|_| rng.random_range(0.0..1e3))
            .collect();
        let logs: Vec<LogValue> = values.iter().copied().map(LogValue::from).collect();

        let sum: LogValue = logs.iter().sum();
        assert_rel_close(sum.to_f64(), values.iter().sum(), "sum");

        let small: Vec<LogValue> = [1.5_f64, -2.0, 4.0].into_iter().map(LogValue::from).collect();
        let product: LogValue = small.iter().product();
        assert_rel_close(product.to_f64(), -12.0, "1.5 * -2 * 4");
        let product: LogValue = small.into_iter().product();
        assert_rel_close(product.to_f64(), -12.0, "1.5 * -2 * 4");

        let empty: Vec<LogValue> = Vec::new();
        assert!(empty.iter().sum::<LogValue>().is_zero());
        assert_eq!(empty.into_iter().product::<LogValue>(), LogValue::one());
    }

    #[test]
    fn test_log1m_exp_neg_branches() {
        for d in [1e-12, 1e-3, 0.5, LN_2, 1.0, 10.0, 50.0] {
            let expected = (1.0 - (-d).exp()).ln();
            let got = log1m_exp_neg(d);
            if d >= 1e-3 {
                assert_rel_close(got, expected, &format!("log1m_exp_neg({d})"));
            } else {
                // Naive form loses digits here, compare against the series ln(d - d^2/2).
                assert_rel_close(got, (d - d * d / 2.0).ln(), &format!("log1m_exp_neg({d})"));
            }
        }
    }
}
