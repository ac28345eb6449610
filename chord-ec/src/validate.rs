//! Curve-validity checks for callers that want them before doing group
//! arithmetic. The engine itself never validates its inputs; running the
//! group law on a singular curve or composite modulus produces
//! mathematically meaningless results rather than faults.

use crate::group::REAL_CURVE_EPS;
use crate::{modular, Curve};
use chord_rational::Rational;

/// Whether 4a^3 + 27b^2 != 0 in the curve's domain, i.e. the cubic has no
/// repeated root and the curve no cusp or node.
pub fn nonsingular(curve: &Curve) -> bool {
    match curve {
        &Curve::FiniteField { a, b, p } => {
            let a3 = modular::mul(modular::mul(a, a, p), a, p);
            let b2 = modular::mul(b, b, p);
            modular::add(modular::mul(4, a3, p), modular::mul(27, b2, p), p) != 0
        }
        &Curve::Reals { a, b } => (4.0 * a * a * a + 27.0 * b * b).abs() >= REAL_CURVE_EPS,
        &Curve::Rationals { a, b } => {
            let four = Rational::from(4);
            let twenty_seven = Rational::from(27);
            !(four * a * a * a + twenty_seven * b * b).is_zero()
        }
    }
}

/// Deterministic trial-division primality test; intended for the moduli a
/// calculator session works with, not for cryptographic sizes.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut d = 5_i64;
    while d <= n / d {
        if n % d == 0 || n % (d + 2) == 0 {
            return false;
        }
        d += 6;
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn singular_curves_detected() {
        // y^2 = x^3 has a cusp at the origin
        assert!(!nonsingular(&Curve::finite_field(0, 0, 17)));
        assert!(!nonsingular(&Curve::reals(0.0, 0.0)));
        // 4 * (-3)^3 + 27 * 2^2 = 0: a node
        assert!(!nonsingular(&Curve::reals(-3.0, 2.0)));
        assert!(!nonsingular(&Curve::rationals(
            Rational::from(-3),
            Rational::from(2)
        )));
    }

    #[test]
    fn nonsingular_curves_accepted() {
        assert!(nonsingular(&Curve::finite_field(2, 2, 17)));
        assert!(nonsingular(&Curve::reals(-1.0, 0.0)));
        assert!(nonsingular(&Curve::rationals(
            Rational::ONE,
            Rational::ONE
        )));
    }

    #[test]
    fn discriminant_is_reduced_mod_p() {
        // 4 * 1 + 27 * 16 = 436 = 0 (mod 109)
        assert!(!nonsingular(&Curve::finite_field(1, 4, 109)));
        assert!(nonsingular(&Curve::finite_field(1, 4, 113)));
    }

    #[test]
    fn primality() {
        for p in [2, 3, 5, 17, 101, 7919, 9223372036854775783] {
            assert!(is_prime(p));
        }
        for n in [-7, 0, 1, 4, 9, 15, 7917, 9223372036854775781] {
            assert!(!is_prime(n));
        }
    }
}
