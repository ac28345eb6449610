use crate::Domain;
use chord_rational::Rational;
use serde::{Deserialize, Serialize};

use std::fmt;

/// A point on (or off) an elliptic curve: either the distinguished point at
/// infinity, the identity of the group, or an affine pair in one of the
/// three coordinate domains.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EcPoint {
    Infinity,
    FiniteField { x: i64, y: i64 },
    Reals { x: f64, y: f64 },
    Rationals { x: Rational, y: Rational },
}

impl EcPoint {
    pub fn finite_field(x: i64, y: i64) -> Self {
        Self::FiniteField { x, y }
    }

    pub fn reals(x: f64, y: f64) -> Self {
        Self::Reals { x, y }
    }

    pub fn rationals(x: Rational, y: Rational) -> Self {
        Self::Rationals { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Self::Infinity)
    }

    /// Domain of a finite point; `None` for the point at infinity, which
    /// belongs to every domain.
    pub fn domain(&self) -> Option<Domain> {
        match self {
            Self::Infinity => None,
            Self::FiniteField { .. } => Some(Domain::FiniteField),
            Self::Reals { .. } => Some(Domain::Reals),
            Self::Rationals { .. } => Some(Domain::Rationals),
        }
    }
}

impl fmt::Display for EcPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Infinity => write!(f, "O (point at infinity)"),
            Self::FiniteField { x, y } => write!(f, "({}, {})", x, y),
            Self::Reals { x, y } => write!(f, "({}, {})", x, y),
            Self::Rationals { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}
