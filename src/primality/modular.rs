//! Exact 64-bit modular arithmetic.
//!
//! Products are formed in `u128`, so nothing is lost for any modulus up to
//! `u64::MAX`.

/// `(a * b) mod m`. `m` must be non-zero.
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((u128::from(a) * u128::from(b)) % u128::from(m)) as u64
}

/// `base^exp mod m` by square-and-multiply. `m` must be non-zero.
pub fn pow_mod(base: u64, mut exp: u64, m: u64) -> u64 {
    if m == 1 {
        return 0;
    }
    let mut result = 1;
    let mut base = base % m;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    result
}

/// Splits an even `n` into `(r, d)` with `n = 2^r * d` and `d` odd.
///
/// # Panics
///
/// Panics if `n` is zero.
pub fn decompose(n: u64) -> (u32, u64) {
    assert!(n != 0, "cannot decompose zero");
    let r = n.trailing_zeros();
    (r, n >> r)
}
