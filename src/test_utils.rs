use crate::DigitSequence;
use num_bigint::BigUint;
use proptest::prelude::*;

pub fn raw_digit_sequence(range: std::ops::Range<usize>) -> impl Strategy<Value = DigitSequence> {
    proptest::collection::vec(0u8..10, range).prop_map(|mut digits| {
        if digits.is_empty() {
            digits.push(0);
        }
        DigitSequence { digits }
    })
}

pub fn any_digit_sequence(range: std::ops::Range<usize>) -> impl Strategy<Value = DigitSequence> {
    raw_digit_sequence(range).prop_map(DigitSequence::normalize)
}

fn digit_pair_of_len(len: usize) -> impl Strategy<Value = (DigitSequence, DigitSequence)> {
    (
        proptest::collection::vec(0u8..10, len),
        proptest::collection::vec(0u8..10, len),
    )
        .prop_map(|(x, y)| (DigitSequence { digits: x }, DigitSequence { digits: y }))
}

pub fn equal_len_digit_pair(
    range: std::ops::Range<usize>,
) -> impl Strategy<Value = (DigitSequence, DigitSequence)> {
    range.prop_flat_map(digit_pair_of_len)
}

pub fn pow2_len_digit_pair(max_exp: u32) -> impl Strategy<Value = (DigitSequence, DigitSequence)> {
    (0..=max_exp).prop_flat_map(|exp| digit_pair_of_len(1 << exp))
}

pub fn to_biguint(x: &DigitSequence) -> BigUint {
    BigUint::parse_bytes(x.to_string().as_bytes(), 10).unwrap()
}

pub fn oracle_sum(x: &DigitSequence, y: &DigitSequence) -> String {
    (to_biguint(x) + to_biguint(y)).to_string()
}

pub fn oracle_product(x: &DigitSequence, y: &DigitSequence) -> String {
    (to_biguint(x) * to_biguint(y)).to_string()
}
