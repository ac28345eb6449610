#![deny(clippy::all)]
#![deny(clippy::dbg_macro)]

pub mod curve;
mod error;
pub mod group;
pub mod modular;
pub mod parse;
pub mod point;
pub mod validate;

pub use chord_rational::{Rational, RationalError};
pub use curve::{Curve, Domain};
pub use error::CurveError;
pub use point::EcPoint;
