use crate::DigitSequence;

// Digit at the given place value, counted from the least significant end.
// Slices are most-significant-first, so place 0 is the last element; places
// past the high end read as zero, the implicit left padding for a shorter
// operand.
fn digit_at(digits: &[u8], place: usize) -> u8 {
    if place < digits.len() {
        digits[digits.len() - 1 - place]
    } else {
        0
    }
}

pub fn add_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
    let len = std::cmp::max(x.len(), y.len());
    let mut out = vec![0; len + 1];
    let mut carry = 0;
    for place in 0..len {
        let sum = digit_at(x, place) + digit_at(y, place) + carry;
        out[len - place] = sum % 10;
        carry = sum / 10;
    }
    out[0] = carry;
    out
}

// Precondition: x >= y as integer values. A violation surfaces as a leftover
// borrow and is a bug in the caller, so it panics rather than wrapping.
pub fn sub_digits(x: &[u8], y: &[u8]) -> Vec<u8> {
    let len = std::cmp::max(x.len(), y.len());
    let mut out = vec![0; len];
    let mut borrow = 0;
    for place in 0..len {
        let top = digit_at(x, place);
        let bottom = digit_at(y, place) + borrow;
        if top >= bottom {
            out[len - 1 - place] = top - bottom;
            borrow = 0;
        } else {
            out[len - 1 - place] = top + 10 - bottom;
            borrow = 1;
        }
    }
    assert_eq!(borrow, 0, "digit subtraction underflowed");
    out
}

// Splits at the midpoint, high half first; an odd length gives the low half
// the extra digit. Length-1 sequences are base cases and are never split.
pub fn split_digits(x: &DigitSequence) -> (DigitSequence, DigitSequence) {
    debug_assert!(x.len() >= 2);
    let (high, low) = x.digits.split_at(x.len() / 2);
    (
        DigitSequence {
            digits: high.to_vec(),
        },
        DigitSequence {
            digits: low.to_vec(),
        },
    )
}

// Multiplication by 10^zeros, realized structurally by appending zero digits.
pub fn shift_pow10(x: &DigitSequence, zeros: usize) -> DigitSequence {
    let mut digits = Vec::with_capacity(x.len() + zeros);
    digits.extend_from_slice(&x.digits);
    digits.resize(x.len() + zeros, 0);
    DigitSequence { digits }
}

// Left-pads with zero digits up to width; numeric value is unchanged.
pub fn pad_digits(x: &DigitSequence, width: usize) -> DigitSequence {
    if width <= x.len() {
        return x.clone();
    }
    let mut digits = vec![0; width - x.len()];
    digits.extend_from_slice(&x.digits);
    DigitSequence { digits }
}

pub fn mul_digit(x: u8, y: u8) -> DigitSequence {
    let prod = x * y;
    if prod < 10 {
        DigitSequence { digits: vec![prod] }
    } else {
        DigitSequence {
            digits: vec![prod / 10, prod % 10],
        }
    }
}
