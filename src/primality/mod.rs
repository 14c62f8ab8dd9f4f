//! # Primality
//!
//! Deterministic Miller-Rabin for `u64`.
//!
//! Write `n - 1 = 2^r * d` with `d` odd. A base `a` proves `n` composite when
//! `a^d != 1` and none of `a^d, a^(2d), ..., a^(2^(r-1) d)` equals `n - 1`
//! modulo `n`. Below each bound in [`witness::WITNESS_TABLE`] a fixed set of
//! bases catches every composite, so the test is exact there.
//!
//! ## Domain policy
//!
//! Values at or above [`witness::MAX_TABULATED_BOUND`] are handled according
//! to [`DomainPolicy`]: the default extends the test with the first twelve
//! primes as bases (exact for the whole `u64` range), while
//! [`DomainPolicy::Strict`] makes [`PrimalityTester::check`] refuse every
//! one of them. [`PrimalityTester::is_prime`] has no way to report a refusal,
//! so it always answers exactly.
//!
//! ```rust
//! use numprim::{PrimalityError, PrimalityTester, is_prime};
//!
//! assert!(is_prime(1_048_573));
//! assert!(!is_prime(561));
//!
//! let strict = PrimalityTester::strict();
//! assert!(matches!(
//!     strict.check(u64::MAX),
//!     Err(PrimalityError::DomainExceeded { .. })
//! ));
//! ```

pub mod modular;
pub mod witness;

use log::{debug, trace};

use crate::error::PrimalityError;
use crate::primality::modular::{decompose, mul_mod, pow_mod};
use crate::primality::witness::{FULL_RANGE_WITNESSES, MAX_TABULATED_BOUND, witnesses_for};

const SMALL_PRIMES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// What to do with values beyond the tabulated witness sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
    /// Fall back to the twelve-prime witness set, exact for all of `u64`.
    #[default]
    Extended,
    /// Report [`PrimalityError::DomainExceeded`] from
    /// [`PrimalityTester::check`] for every value beyond the table.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrimalityTester {
    policy: DomainPolicy,
}

impl PrimalityTester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict() -> Self {
        Self::new().with_policy(DomainPolicy::Strict)
    }

    pub fn with_policy(mut self, policy: DomainPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> DomainPolicy {
        self.policy
    }

    /// Decides whether `n` is prime.
    ///
    /// # Errors
    ///
    /// [`PrimalityError::DomainExceeded`] when the policy is
    /// [`DomainPolicy::Strict`] and `n` is at or above the largest tabulated
    /// bound, whether or not a small factor would settle it.
    pub fn check(&self, n: u64) -> Result<bool, PrimalityError> {
        let witnesses = match witnesses_for(n) {
            Some(witnesses) => witnesses,
            None => match self.policy {
                DomainPolicy::Extended => {
                    debug!("{n} is beyond the witness table, using the full-range set");
                    FULL_RANGE_WITNESSES
                }
                DomainPolicy::Strict => {
                    return Err(PrimalityError::DomainExceeded {
                        n,
                        bound: MAX_TABULATED_BOUND,
                    });
                }
            },
        };
        Ok(decide(n, witnesses))
    }

    /// Decides whether `n` is prime. Always exact: the policy only shapes
    /// [`PrimalityTester::check`], and values beyond the table are answered
    /// with the full-range witness set here.
    pub fn is_prime(&self, n: u64) -> bool {
        decide(n, witnesses_for(n).unwrap_or(FULL_RANGE_WITNESSES))
    }

    /// Smallest prime strictly greater than `n`, if it fits in `u64`.
    pub fn next_prime(&self, n: u64) -> Option<u64> {
        let mut candidate = n.checked_add(1)?;
        loop {
            if self.check(candidate).ok()? {
                return Some(candidate);
            }
            candidate = candidate.checked_add(1)?;
        }
    }

    /// Largest prime strictly smaller than `n`.
    pub fn prev_prime(&self, n: u64) -> Option<u64> {
        let mut candidate = n.checked_sub(1)?;
        while candidate >= 2 {
            if self.check(candidate).ok()? {
                return Some(candidate);
            }
            candidate -= 1;
        }
        None
    }
}

/// Decides `n` by trial division when one of the small primes settles it.
fn small_prime_screen(n: u64) -> Option<bool> {
    if n < 2 {
        return Some(false);
    }
    for p in SMALL_PRIMES {
        if n == p {
            return Some(true);
        }
        if n % p == 0 {
            return Some(false);
        }
    }
    None
}

fn decide(n: u64, witnesses: &[u64]) -> bool {
    if let Some(verdict) = small_prime_screen(n) {
        return verdict;
    }
    trace!("testing {n} against witnesses {witnesses:?}");
    miller_rabin(n, witnesses)
}

/// Runs the witness loop for an odd `n > 2`.
fn miller_rabin(n: u64, witnesses: &[u64]) -> bool {
    let n_minus_one = n - 1;
    let (r, d) = decompose(n_minus_one);

    'witness: for &a in witnesses {
        let a = a % n;
        if a == 0 {
            continue;
        }

        let mut x = pow_mod(a, d, n);
        if x == 1 || x == n_minus_one {
            continue;
        }
        for _ in 1..r {
            x = mul_mod(x, x, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        trace!("{a} witnesses that {n} is composite");
        return false;
    }
    true
}

/// Decides whether `n` is prime with the default [`PrimalityTester`].
pub fn is_prime(n: u64) -> bool {
    PrimalityTester::new().is_prime(n)
}
