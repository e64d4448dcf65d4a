//! Fixed-point monetary amount with 4 decimal places precision.
//!
//! Uses `rust_decimal` internally with scale enforcement so that summing
//! contributions in any order yields the same result.

use log::debug;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;
use thiserror::Error;

/// Reasons a raw string is not a valid contribution amount.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseAmountError {
    /// Not a decimal number at all
    #[error("invalid decimal: {0}")]
    Invalid(#[from] rust_decimal::Error),

    /// Contributions cannot be negative
    #[error("amount must not be negative")]
    Negative,

    /// Above [`Amount::MAX`]
    #[error("amount exceeds {}", Amount::MAX)]
    TooLarge,
}

/// A non-negative decimal amount kept at exactly 4 decimal places.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bill_splitter::Amount;
///
/// let amount = Amount::from_str("10.50").unwrap();
/// assert_eq!(amount.to_string(), "10.5");
/// assert_eq!(Amount::parse_lenient("abc"), Amount::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(Decimal);

impl Amount {
    /// The number of decimal places to maintain.
    pub const SCALE: u32 = 4;

    /// Zero value.
    pub const ZERO: Self = Amount(Decimal::ZERO);

    /// Largest amount accepted from input: 10^15.
    ///
    /// Sums of capped amounts stay far inside `Decimal`'s range.
    pub const MAX: Self = Amount(Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0));

    /// Creates a new `Amount` from a `Decimal`, normalizing to 4 decimal places.
    ///
    /// Callers are responsible for passing a non-negative value; use
    /// `FromStr` or [`Amount::parse_lenient`] for untrusted input.
    pub fn new(value: Decimal) -> Self {
        let mut normalized = value;
        normalized.rescale(Self::SCALE);
        Amount(normalized)
    }

    /// Parses user input, coercing anything unparsable to zero.
    ///
    /// Empty strings, non-numeric text, negative numbers and values above
    /// [`Amount::MAX`] all become [`Amount::ZERO`]. This never fails.
    ///
    /// The whole trimmed string must be a decimal: `"10abc"` is zero, not 10.
    pub fn parse_lenient(raw: &str) -> Self {
        match Amount::from_str(raw) {
            Ok(amount) => amount,
            Err(e) => {
                debug!("Coercing amount {:?} to zero: {}", raw, e);
                Amount::ZERO
            }
        }
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns the underlying decimal.
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Converts to a float for numeric spreadsheet cells.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let decimal = Decimal::from_str(s.trim())?;
        if decimal < Decimal::ZERO {
            return Err(ParseAmountError::Negative);
        }
        if decimal > Amount::MAX.0 {
            return Err(ParseAmountError::TooLarge);
        }
        Ok(Amount::new(decimal))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

// Saturates instead of panicking; unreachable for amounts built through `FromStr`.
impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Amount::new(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::ZERO, |acc, amount| acc + amount)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
