//! Residue arithmetic over a caller-supplied positive modulus. Every
//! function normalizes into `[0, p)` on entry and exit; `p <= 0` is
//! unsupported.

use crate::CurveError;

/// Reduce `x` into the canonical residue range `[0, p)`.
pub fn norm(x: i64, p: i64) -> i64 {
    x.rem_euclid(p)
}

pub fn add(a: i64, b: i64, p: i64) -> i64 {
    let sum = i128::from(norm(a, p)) + i128::from(norm(b, p));
    (sum % i128::from(p)) as i64
}

pub fn sub(a: i64, b: i64, p: i64) -> i64 {
    let diff = i128::from(norm(a, p)) - i128::from(norm(b, p));
    diff.rem_euclid(i128::from(p)) as i64
}

/// The product is formed in i128 so that operands near `p - 1` cannot
/// overflow even when `p` approaches the i64 range.
pub fn mul(a: i64, b: i64, p: i64) -> i64 {
    let prod = i128::from(norm(a, p)) * i128::from(norm(b, p));
    (prod % i128::from(p)) as i64
}

/// Modular inverse via the extended Euclidean algorithm. Fails whenever
/// `gcd(a, p) != 1`, notably for `a = 0` or a composite `p` sharing a
/// factor with `a`.
pub fn inv(a: i64, p: i64) -> Result<i64, CurveError> {
    let a = norm(a, p);
    let (g, x) = extended_gcd(a, p);
    if g != 1 {
        return Err(CurveError::NoInverse);
    }
    Ok(norm(x, p))
}

// returns (g, x) with a*x = g (mod b); the Bezout coefficient of b is not
// needed and is dropped
fn extended_gcd(a: i64, b: i64) -> (i64, i64) {
    let (mut r0, mut r1) = (a, b);
    let (mut s0, mut s1) = (1_i64, 0_i64);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (s0, s1) = (s1, s0 - q * s1);
    }
    (r0, s0)
}
