use chord_rational::Rational;
use serde::{Deserialize, Serialize};

use std::fmt;

/// Algebraic domain the curve coefficients and point coordinates live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    FiniteField,
    Reals,
    Rationals,
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::FiniteField => write!(f, "finite field"),
            Self::Reals => write!(f, "reals"),
            Self::Rationals => write!(f, "rationals"),
        }
    }
}

/// A short Weierstrass curve y^2 = x^3 + ax + b with coefficients in one of
/// the three supported domains.
///
/// The arithmetic in [`crate::group`] assumes a non-singular curve
/// (4a^3 + 27b^2 != 0) and, for the finite-field domain, a prime modulus
/// greater than 3. Neither is checked here; [`crate::validate`] offers both
/// checks to callers that want them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Curve {
    FiniteField { a: i64, b: i64, p: i64 },
    Reals { a: f64, b: f64 },
    Rationals { a: Rational, b: Rational },
}

impl Curve {
    pub fn finite_field(a: i64, b: i64, p: i64) -> Self {
        Self::FiniteField { a, b, p }
    }

    pub fn reals(a: f64, b: f64) -> Self {
        Self::Reals { a, b }
    }

    pub fn rationals(a: Rational, b: Rational) -> Self {
        Self::Rationals { a, b }
    }

    pub fn domain(&self) -> Domain {
        match self {
            Self::FiniteField { .. } => Domain::FiniteField,
            Self::Reals { .. } => Domain::Reals,
            Self::Rationals { .. } => Domain::Rationals,
        }
    }
}
