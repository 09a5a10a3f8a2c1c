mod addsub;
pub mod error;
pub mod karatsuba;
mod low_level;
pub mod naive_mul;
#[cfg(test)]
mod test_utils;

pub use crate::error::Error;
pub use crate::karatsuba::karatsuba_mul;
pub use crate::naive_mul::naive_mul;

use std::fmt;
use std::str::FromStr;

/// A nonnegative integer as a sequence of decimal digits, most significant
/// first. Leading zeros survive construction (a length-4 input stays length
/// 4); results of arithmetic come back normalized.
#[derive(PartialEq, Eq, Clone)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl fmt::Debug for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigitSequence")
            .field("digits", &self.to_string())
            .finish()
    }
}

impl DigitSequence {
    pub fn zero() -> Self {
        DigitSequence { digits: vec![0] }
    }
    /// Builds a sequence from raw digit values, most significant first.
    pub fn from_digits(digits: Vec<u8>) -> Result<Self, Error> {
        if digits.is_empty() {
            return Err(Error::EmptySequence);
        }
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(Error::DigitOutOfRange(bad));
        }
        Ok(DigitSequence { digits })
    }
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.digits.len()
    }
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }
    fn normalize_in_place(&mut self) {
        let first_nonzero = self
            .digits
            .iter()
            .position(|&d| d != 0)
            .unwrap_or(self.digits.len() - 1);
        self.digits.drain(..first_nonzero);
    }
    fn normalize(mut self) -> Self {
        self.normalize_in_place();
        self
    }
}

impl FromStr for DigitSequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::EmptySequence);
        }
        let digits = s
            .chars()
            .map(|c| c.to_digit(10).map(|d| d as u8).ok_or(Error::NonDigit(c)))
            .collect::<Result<Vec<u8>, Error>>()?;
        Ok(DigitSequence { digits })
    }
}

impl fmt::Display for DigitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.digits {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// Multiplies two equal-length decimal digit strings via [karatsuba_mul].
/// Callers holding unequal-length operands must left-pad the shorter with
/// zeros before calling.
pub fn multiply(x: &str, y: &str) -> Result<String, Error> {
    let x: DigitSequence = x.parse()?;
    let y: DigitSequence = y.parse()?;
    Ok(karatsuba_mul(&x, &y)?.to_string())
}

/// Multiplies two equal-length digit strings via [naive_mul]; the shared
/// length must additionally be a power of two. Exposed for comparative
/// testing against [multiply].
pub fn naive_multiply(x: &str, y: &str) -> Result<String, Error> {
    let x: DigitSequence = x.parse()?;
    let y: DigitSequence = y.parse()?;
    Ok(naive_mul(&x, &y)?.to_string())
}
