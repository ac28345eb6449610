use chord_rational::RationalError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurveError {
    #[error("curve and point domains do not match")]
    DomainMismatch,
    #[error("no modular inverse exists (not coprime)")]
    NoInverse,
    #[error("vertical line encountered unexpectedly")]
    VerticalLine,
    #[error(transparent)]
    Rational(#[from] RationalError),
}
