//! Token parsing for the calculator driver. Errors are plain strings meant
//! to be shown to the user verbatim before re-prompting.

use crate::{Domain, EcPoint};
use chord_rational::Rational;

/// Parse a point entered as `O` (case-insensitive, the point at infinity)
/// or as two coordinates: `x y`, `x, y` or `(x, y)`.
pub fn parse_point(input: &str, domain: Domain) -> Result<EcPoint, String> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("o") {
        return Ok(EcPoint::Infinity);
    }

    let stripped = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed);
    let tokens: Vec<&str> = stripped
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.len() != 2 {
        return Err(format!(
            "expected `O` or two coordinates, got \"{}\"",
            trimmed
        ));
    }
    let (x, y) = (tokens[0], tokens[1]);

    match domain {
        Domain::FiniteField => Ok(EcPoint::FiniteField {
            x: parse_int(x)?,
            y: parse_int(y)?,
        }),
        Domain::Reals => Ok(EcPoint::Reals {
            x: parse_real(x)?,
            y: parse_real(y)?,
        }),
        Domain::Rationals => Ok(EcPoint::Rationals {
            x: parse_rational(x)?,
            y: parse_rational(y)?,
        }),
    }
}

pub fn parse_int(token: &str) -> Result<i64, String> {
    token
        .trim()
        .parse()
        .map_err(|_| format!("invalid integer \"{}\"", token.trim()))
}

pub fn parse_real(token: &str) -> Result<f64, String> {
    token
        .trim()
        .parse()
        .map_err(|_| format!("invalid number \"{}\"", token.trim()))
}

/// Accepts the `n` and `n/d` token forms.
pub fn parse_rational(token: &str) -> Result<Rational, String> {
    token
        .trim()
        .parse::<Rational>()
        .map_err(|e| e.to_string())
}
