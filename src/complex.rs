//! Complex numbers ordered by magnitude, used as a non-primitive tree payload.

use std::cmp::Ordering;
use std::fmt;
use std::num::ParseFloatError;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParseComplexError {
    #[error("empty complex literal")]
    Empty,

    #[error("invalid complex component '{component}': {source}")]
    Component {
        component: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn real(&self) -> f64 {
        self.re
    }

    pub fn imag(&self) -> f64 {
        self.im
    }

    /// Euclidean norm `sqrt(re² + im²)`.
    pub fn magnitude(&self) -> f64 {
        self.re.hypot(self.im)
    }
}

/// Ordered by magnitude; equal magnitudes fall back to `(re, im)` so that only equal
/// numbers compare as `Equal`.
impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.magnitude().partial_cmp(&other.magnitude())? {
            Ordering::Equal => match self.re.partial_cmp(&other.re)? {
                Ordering::Equal => self.im.partial_cmp(&other.im),
                ord => Some(ord),
            },
            ord => Some(ord),
        }
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl Div for Complex {
    type Output = Complex;

    /// Division by zero follows IEEE 754 and yields infinite or NaN components.
    fn div(self, rhs: Complex) -> Complex {
        let denominator = rhs.re * rhs.re + rhs.im * rhs.im;
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denominator,
            (self.im * rhs.re - self.re * rhs.im) / denominator,
        )
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::new(re, 0.0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{} - {}i", self.re, -self.im)
        } else {
            write!(f, "{} + {}i", self.re, self.im)
        }
    }
}

fn component(s: &str) -> Result<f64, ParseComplexError> {
    s.parse().map_err(|source| ParseComplexError::Component {
        component: s.to_string(),
        source,
    })
}

/// Accepts `re,im`, `re+imi`, `re-imi`, `imi` and plain `re`; whitespace is ignored.
impl FromStr for Complex {
    type Err = ParseComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            return Err(ParseComplexError::Empty);
        }
        if let Some((re, im)) = compact.split_once(',') {
            return Ok(Complex::new(component(re)?, component(im)?));
        }
        let Some(body) = compact.strip_suffix('i') else {
            return Ok(Complex::new(component(&compact)?, 0.0));
        };

        // Split at the first sign that is neither leading nor part of an exponent.
        let bytes = body.as_bytes();
        let split = (1..bytes.len())
            .find(|&i| matches!(bytes[i], b'+' | b'-') && !matches!(bytes[i - 1], b'e' | b'E'));
        match split {
            Some(i) => Ok(Complex::new(component(&body[..i])?, component(&body[i..])?)),
            None => Ok(Complex::new(0.0, component(body)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_magnitude() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn test_ordering_by_magnitude() {
        assert!(Complex::new(1.2, 3.4) < Complex::new(5.6, 1.1));
        assert!(Complex::new(0.0, 5.0) > Complex::new(4.0, 0.0));
        // same magnitude, different numbers: never Equal
        assert_ne!(
            Complex::new(3.0, 4.0).partial_cmp(&Complex::new(4.0, 3.0)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, -1.0);
        assert_eq!(a + b, Complex::new(4.0, 1.0));
        assert_eq!(a - b, Complex::new(-2.0, 3.0));
        assert_eq!(a * b, Complex::new(5.0, 5.0));
        assert_eq!((a * b) / b, a);
    }

    #[rstest]
    #[case("3.4+5.2i", Complex::new(3.4, 5.2))]
    #[case("3.4 - 5.2i", Complex::new(3.4, -5.2))]
    #[case("-1e-3+2i", Complex::new(-0.001, 2.0))]
    #[case("7.5", Complex::new(7.5, 0.0))]
    #[case("2i", Complex::new(0.0, 2.0))]
    #[case("1.5,-2", Complex::new(1.5, -2.0))]
    fn test_parse(#[case] input: &str, #[case] expected: Complex) {
        assert_eq!(input.parse::<Complex>().unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!("".parse::<Complex>(), Err(ParseComplexError::Empty));
        assert!("abc".parse::<Complex>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        let c = Complex::new(2.9, -4.1);
        assert_eq!(c.to_string(), "2.9 - 4.1i");
        assert_eq!(c.to_string().parse::<Complex>().unwrap(), c);
    }
}
