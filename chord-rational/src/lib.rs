#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

mod rational;

pub use rational::Rational;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    #[error("rational denominator cannot be zero")]
    ZeroDenominator,
    #[error("division by zero rational")]
    DivisionByZero,
    #[error("invalid rational literal \"{0}\"")]
    InvalidLiteral(String),
}
