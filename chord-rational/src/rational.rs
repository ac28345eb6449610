use crate::RationalError;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// An exact fraction of two `i64`s, always kept in lowest terms with a
/// positive denominator. Zero is represented as 0/1.
///
/// Arithmetic cross-multiplies the underlying integer pairs without overflow
/// protection, so operands are expected to stay well within the 64-bit
/// range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rational {
    num: i64,
    den: i64,
}

impl Rational {
    pub const ZERO: Self = Self { num: 0, den: 1 };
    pub const ONE: Self = Self { num: 1, den: 1 };

    pub fn new(num: i64, den: i64) -> Result<Self, RationalError> {
        if den == 0 {
            return Err(RationalError::ZeroDenominator);
        }
        Ok(Self::normalized(num, den))
    }

    // `den` must be nonzero
    fn normalized(mut num: i64, mut den: i64) -> Self {
        if den < 0 {
            num = -num;
            den = -den;
        }
        // gcd(0, den) = den, so zero normalizes to 0/1
        let g = num_integer::gcd(num, den);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    pub fn numerator(&self) -> i64 {
        self.num
    }

    pub fn denominator(&self) -> i64 {
        self.den
    }

    pub fn is_zero(&self) -> bool {
        self.num == 0
    }

    pub fn inverse(self) -> Result<Self, RationalError> {
        if self.num == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalized(self.den, self.num))
    }

    pub fn checked_div(self, rhs: Self) -> Result<Self, RationalError> {
        if rhs.num == 0 {
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self::normalized(self.num * rhs.den, self.den * rhs.num))
    }
}

impl From<i64> for Rational {
    fn from(num: i64) -> Self {
        Self { num, den: 1 }
    }
}

impl std::ops::Add for Rational {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self::normalized(self.num * rhs.den + rhs.num * self.den, self.den * rhs.den)
    }
}

impl std::ops::Sub for Rational {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self::normalized(self.num * rhs.den - rhs.num * self.den, self.den * rhs.den)
    }
}

impl std::ops::Mul for Rational {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        Self::normalized(self.num * rhs.num, self.den * rhs.den)
    }
}

impl std::ops::Neg for Rational {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self {
            num: -self.num,
            den: self.den,
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    /// Accepts the same two token forms `Display` produces: `n` and `n/d`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RationalError::InvalidLiteral(s.trim().to_string());
        match s.trim().split_once('/') {
            Some((num, den)) => Self::new(
                num.trim().parse().map_err(|_| invalid())?,
                den.trim().parse().map_err(|_| invalid())?,
            ),
            None => {
                let num = s.trim().parse().map_err(|_| invalid())?;
                Ok(Self { num, den: 1 })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn rat(num: i64, den: i64) -> Rational {
        Rational::new(num, den).unwrap()
    }

    // small operands keep every cross-multiplication far from overflow
    fn random_rational(rng: &mut StdRng) -> Rational {
        rat(rng.gen_range(-30..=30), rng.gen_range(1..=30))
    }

    #[test]
    fn normalization() {
        assert_eq!(rat(2, 4), rat(1, 2));
        assert_eq!(rat(-2, 4), rat(1, -2));
        assert_eq!(rat(1, -2).denominator(), 2);
        assert_eq!(rat(1, -2).numerator(), -1);
        assert_eq!(rat(0, -5), Rational::ZERO);
        assert_eq!(rat(0, 7).denominator(), 1);
        assert_eq!(rat(6, 6), Rational::ONE);
    }

    #[test]
    fn zero_denominator_rejected() {
        for num in [-3, 0, 1, i64::MAX] {
            assert_eq!(
                Rational::new(num, 0),
                Err(RationalError::ZeroDenominator)
            );
        }
    }

    #[test]
    fn arithmetic() {
        assert_eq!(rat(1, 2) + rat(1, 3), rat(5, 6));
        assert_eq!(rat(1, 2) - rat(1, 3), rat(1, 6));
        assert_eq!(rat(2, 3) * rat(3, 4), rat(1, 2));
        assert_eq!(rat(1, 2).checked_div(rat(1, 4)).unwrap(), rat(2, 1));
        assert_eq!(-rat(1, 2), rat(-1, 2));
        assert_eq!(rat(3, 7).inverse().unwrap(), rat(7, 3));
        assert_eq!(rat(-3, 7).inverse().unwrap(), rat(-7, 3));
    }

    #[test]
    fn division_by_zero_rejected() {
        assert_eq!(
            rat(1, 2).checked_div(Rational::ZERO),
            Err(RationalError::DivisionByZero)
        );
        assert_eq!(Rational::ZERO.inverse(), Err(RationalError::DivisionByZero));
    }

    #[test]
    fn ring_laws() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let a = random_rational(&mut rng);
            let b = random_rational(&mut rng);
            let c = random_rational(&mut rng);

            assert_eq!((a + b) + c, a + (b + c));
            assert_eq!(a + b, b + a);
            assert_eq!(a * b, b * a);
            assert_eq!(a * (b + c), a * b + a * c);
            assert_eq!(a + Rational::ZERO, a);
            assert_eq!(a * Rational::ONE, a);
            assert_eq!(a - a, Rational::ZERO);
        }
    }

    #[test]
    fn division_round_trip() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            let a = random_rational(&mut rng);
            let b = random_rational(&mut rng);
            if b.is_zero() {
                continue;
            }
            assert_eq!(a.checked_div(b).unwrap() * b, a);
        }
    }

    #[test]
    fn display() {
        assert_eq!(rat(3, 1).to_string(), "3");
        assert_eq!(rat(1, 2).to_string(), "1/2");
        assert_eq!(rat(-3, 4).to_string(), "-3/4");
        assert_eq!(rat(2, -4).to_string(), "-1/2");
        assert_eq!(Rational::ZERO.to_string(), "0");
    }

    #[test]
    fn parse() {
        assert_eq!("3".parse::<Rational>().unwrap(), rat(3, 1));
        assert_eq!(" -5/10 ".parse::<Rational>().unwrap(), rat(-1, 2));
        assert_eq!("7/ 3".parse::<Rational>().unwrap(), rat(7, 3));
        assert_eq!(
            "1/0".parse::<Rational>(),
            Err(RationalError::ZeroDenominator)
        );
        assert_eq!(
            "one".parse::<Rational>(),
            Err(RationalError::InvalidLiteral("one".to_string()))
        );
        assert_eq!(
            "1/2/3".parse::<Rational>(),
            Err(RationalError::InvalidLiteral("1/2/3".to_string()))
        );
    }
}
