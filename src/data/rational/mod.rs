//! # Exact rational numbers
//!
//! The single number type of the drill engine. Values are kept in lowest
//! terms with a positive denominator, so every mathematical value has exactly
//! one representation and answer checking never touches floating point.
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use itertools::Itertools;
use num::integer::gcd;
use num::{One, Zero};

use crate::error::{Arithmetic, Parse};

/// An exact fraction of two machine integers.
///
/// Invariant: the denominator is positive and shares no factor with the
/// numerator. The sign is carried by the numerator. Construction and every
/// arithmetic operation re-establish this form, so `2/4` and `1/2` are the
/// same value in every sense, including structurally.
#[derive(Clone, Copy, Debug)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// Build a value from a numerator and denominator pair.
    ///
    /// The pair does not need to be in lowest terms; it is reduced here.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if the denominator is zero; `Overflow` if the reduced
    /// pair does not fit the machine integer range, which only `i64::MIN`
    /// magnitudes can trigger.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, Arithmetic> {
        Self::from_wide(numerator as i128, denominator as i128)
    }

    /// Reduce a widened numerator and denominator pair and narrow it back to
    /// machine integers.
    ///
    /// All intermediate cross products go through here, so they cannot wrap;
    /// a reduced value that genuinely exceeds the machine range surfaces as
    /// `Overflow`.
    fn from_wide(numerator: i128, denominator: i128) -> Result<Self, Arithmetic> {
        if denominator == 0 {
            return Err(Arithmetic::DivisionByZero);
        }

        let divisor = gcd(numerator, denominator);
        let mut numerator = numerator / divisor;
        let mut denominator = denominator / divisor;

        if denominator < 0 {
            numerator = -numerator;
            denominator = -denominator;
        }

        Ok(Self {
            numerator: i64::try_from(numerator).map_err(|_| Arithmetic::Overflow)?,
            denominator: i64::try_from(denominator).map_err(|_| Arithmetic::Overflow)?,
        })
    }

    /// Totalized variant backing the std operator impls, which are total like
    /// primitive arithmetic: a result whose reduced form does not fit the
    /// machine integer range panics. Operand components below `2^31` in
    /// magnitude can never reach that case. Fallible callers go through
    /// [`Self::from_wide`].
    fn from_wide_or_panic(numerator: i128, denominator: i128) -> Self {
        match Self::from_wide(numerator, denominator) {
            Ok(value) => value,
            Err(error) => panic!("rational arithmetic failed: {}", error),
        }
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Divide by another value.
    ///
    /// Division is the one operation that can fail on valid inputs, so there
    /// is no `Div` impl; callers handle the zero divisor case explicitly.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` if `rhs` is zero-valued; `Overflow` if the reduced
    /// quotient does not fit the machine integer range.
    pub fn checked_div(self, rhs: Self) -> Result<Self, Arithmetic> {
        if rhs.numerator == 0 {
            return Err(Arithmetic::DivisionByZero);
        }

        Self::from_wide(
            self.numerator as i128 * rhs.denominator as i128,
            self.denominator as i128 * rhs.numerator as i128,
        )
    }

    /// Floating point approximation, for display and sorting only. Equality
    /// and comparison of exact values never go through this.
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self { numerator: value, denominator: 1 }
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_wide_or_panic(
            self.numerator as i128 * rhs.denominator as i128
                + rhs.numerator as i128 * self.denominator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_wide_or_panic(
            self.numerator as i128 * rhs.denominator as i128
                - rhs.numerator as i128 * self.denominator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_wide_or_panic(
            self.numerator as i128 * rhs.numerator as i128,
            self.denominator as i128 * rhs.denominator as i128,
        )
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_wide_or_panic(-(self.numerator as i128), self.denominator as i128)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from(0)
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from(1)
    }
}

impl PartialEq for Rational {
    /// Cross-multiplication equality. Denominators are positive, so no sign
    /// correction is needed. Equivalent to structural equality because values
    /// are always reduced, but the contract doesn't depend on that.
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rational {}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Widened so that large cross products cannot wrap.
        let left = self.numerator as i128 * other.denominator as i128;
        let right = other.numerator as i128 * self.denominator as i128;

        left.cmp(&right)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = Parse;

    /// Read a value from the three accepted textual forms: an integer
    /// (`"-3"`), a fraction (`"4/6"`, reduced on construction), or a decimal
    /// literal (`"0.25"`, converted exactly).
    ///
    /// # Errors
    ///
    /// `Malformed` for anything else, including the empty string;
    /// `Arithmetic` for well-formed text denoting an invalid value, such as a
    /// zero denominator or a magnitude beyond the machine integer range.
    /// Never panics: answer checking feeds arbitrary learner input through
    /// here.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Parse::Malformed("empty input".to_string()));
        }

        if text.contains('/') {
            let (numerator, denominator) = text.split('/')
                .collect_tuple()
                .ok_or_else(|| Parse::Malformed(format!(
                    "expected a single \"/\" in \"{}\"", text,
                )))?;

            Ok(Self::new(parse_integer(numerator)?, parse_integer(denominator)?)?)
        } else if text.contains('.') {
            parse_decimal(text)
        } else {
            Ok(Self::from(parse_integer(text)?))
        }
    }
}

fn parse_integer(text: &str) -> Result<i64, Parse> {
    let text = text.trim();

    text.parse().map_err(|error| Parse::Malformed(format!(
        "could not read \"{}\" as an integer: {}", text, error,
    )))
}

/// Convert a decimal literal into an exact fraction over a power of ten.
///
/// `"-3.25"` becomes `-325/100` before reduction.
fn parse_decimal(text: &str) -> Result<Rational, Parse> {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text),
    };

    let (integer_part, mantissa_part) = unsigned.split('.')
        .collect_tuple()
        .ok_or_else(|| Parse::Malformed(format!(
            "expected a single \".\" in \"{}\"", text,
        )))?;

    let steps_from_right = mantissa_part.len() as u32;
    if steps_from_right > 18 {
        return Err(Parse::Malformed(format!(
            "too many decimal digits in \"{}\"", text,
        )));
    }

    // Both parts are read unsigned; the sign was stripped above and may not
    // reappear in the middle of the literal. Digits go straight into i128 so
    // an extreme literal becomes a value error instead of wrapping.
    let parse_digits = |part: &str, role| -> Result<i128, Parse> {
        part.parse::<u64>()
            .map_err(|error| Parse::Malformed(format!(
                "could not read {} \"{}\": {}", role, part, error,
            )))
            .map(i128::from)
    };

    let integer = parse_digits(integer_part, "integer part")?;
    let mantissa = parse_digits(mantissa_part, "decimal part")?;

    let denominator = 10_i128.pow(steps_from_right);
    let numerator = sign * (integer * denominator + mantissa);

    Ok(Rational::from_wide(numerator, denominator)?)
}
