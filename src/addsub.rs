use crate::low_level::{add_digits, sub_digits};
use crate::DigitSequence;
use std::ops::{Add, Sub};

impl<'a, 'b> Add<&'b DigitSequence> for &'a DigitSequence {
    type Output = DigitSequence;

    fn add(self, other: &'b DigitSequence) -> DigitSequence {
        DigitSequence {
            digits: add_digits(&self.digits, &other.digits),
        }
        .normalize()
    }
}

impl Add for DigitSequence {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        &self + &other
    }
}

impl<'a> Add<&'a DigitSequence> for DigitSequence {
    type Output = Self;

    fn add(self, other: &'a DigitSequence) -> Self {
        &self + other
    }
}

impl<'a> Add<DigitSequence> for &'a DigitSequence {
    type Output = DigitSequence;

    fn add(self, other: DigitSequence) -> DigitSequence {
        self + &other
    }
}

// Precondition: self >= other as integer values; sequences are unsigned, so
// an underflow is a caller bug and panics in the borrow loop.
impl<'a, 'b> Sub<&'b DigitSequence> for &'a DigitSequence {
    type Output = DigitSequence;

    fn sub(self, other: &'b DigitSequence) -> DigitSequence {
        DigitSequence {
            digits: sub_digits(&self.digits, &other.digits),
        }
        .normalize()
    }
}

impl Sub for DigitSequence {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        &self - &other
    }
}

impl<'a> Sub<&'a DigitSequence> for DigitSequence {
    type Output = Self;

    fn sub(self, other: &'a DigitSequence) -> Self {
        &self - other
    }
}

impl<'a> Sub<DigitSequence> for &'a DigitSequence {
    type Output = DigitSequence;

    fn sub(self, other: DigitSequence) -> DigitSequence {
        self - &other
    }
}
