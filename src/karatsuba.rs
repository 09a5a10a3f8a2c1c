use crate::low_level::{mul_digit, pad_digits, shift_pow10, split_digits};
use crate::{DigitSequence, Error};

#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 256;

/// Karatsuba multiplication over equal-length operands. Any length is
/// accepted, including odd lengths, because the recursion re-aligns the
/// half sums by zero padding before the cross product.
pub fn karatsuba_mul(l: &DigitSequence, r: &DigitSequence) -> Result<DigitSequence, Error> {
    if l.len() != r.len() {
        return Err(Error::LengthMismatch {
            left: l.len(),
            right: r.len(),
        });
    }
    Ok(karatsuba_rec(l, r))
}

// xy = ac*10^(2*half_len) + (ad + bc)*10^half_len + bd, with the middle
// term recovered from a single cross product: (a+b)(c+d) - ac - bd.
fn karatsuba_rec(l: &DigitSequence, r: &DigitSequence) -> DigitSequence {
    debug_assert_eq!(l.len(), r.len());
    if l.is_zero() || r.is_zero() {
        return DigitSequence::zero();
    }
    let n = l.len();
    if n == 1 {
        return mul_digit(l.digits[0], r.digits[0]);
    }
    let (a, b) = split_digits(l);
    let (c, d) = split_digits(r);
    // half_len is the low-half width: the odd extra digit lands there.
    let half_len = b.len();
    let s1 = &a + &b;
    let s2 = &c + &d;
    let sum_len = std::cmp::max(s1.len(), s2.len());
    let s1 = pad_digits(&s1, sum_len);
    let s2 = pad_digits(&s2, sum_len);
    let (ac, bd, cross) = sub_products(n, &a, &c, &b, &d, &s1, &s2);
    let middle = &(&cross - &ac) - &bd;
    let scaled_ac = shift_pow10(&ac, 2 * half_len);
    let scaled_mid = shift_pow10(&middle, half_len);
    &scaled_ac + &scaled_mid + &bd
}

#[cfg(feature = "parallel")]
fn sub_products(
    n: usize,
    a: &DigitSequence,
    c: &DigitSequence,
    b: &DigitSequence,
    d: &DigitSequence,
    s1: &DigitSequence,
    s2: &DigitSequence,
) -> (DigitSequence, DigitSequence, DigitSequence) {
    if n >= PARALLEL_THRESHOLD {
        let (ac, (bd, cross)) = rayon::join(
            || karatsuba_rec(a, c),
            || rayon::join(|| karatsuba_rec(b, d), || karatsuba_rec(s1, s2)),
        );
        (ac, bd, cross)
    } else {
        (
            karatsuba_rec(a, c),
            karatsuba_rec(b, d),
            karatsuba_rec(s1, s2),
        )
    }
}

#[cfg(not(feature = "parallel"))]
fn sub_products(
    _n: usize,
    a: &DigitSequence,
    c: &DigitSequence,
    b: &DigitSequence,
    d: &DigitSequence,
    s1: &DigitSequence,
    s2: &DigitSequence,
) -> (DigitSequence, DigitSequence, DigitSequence) {
    (
        karatsuba_rec(a, c),
        karatsuba_rec(b, d),
        karatsuba_rec(s1, s2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive_mul::naive_mul;
    use crate::test_utils::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn matches_oracle((x, y) in equal_len_digit_pair(1..70)) {
            let prod = karatsuba_mul(&x, &y).unwrap();
            assert_eq!(prod.to_string(), oracle_product(&x, &y));
        }
    }
    proptest! {
        #[test]
        fn matches_naive_mul((x, y) in pow2_len_digit_pair(5)) {
            let expected = naive_mul(&x, &y).unwrap();
            let actual = karatsuba_mul(&x, &y).unwrap();
            assert_eq!(expected, actual);
        }
    }
    proptest! {
        #[test]
        fn commutes((x, y) in equal_len_digit_pair(1..25)) {
            assert_eq!(
                karatsuba_mul(&x, &y).unwrap(),
                karatsuba_mul(&y, &x).unwrap()
            );
        }
    }
    proptest! {
        #[test]
        fn product_length_is_bounded((x, y) in equal_len_digit_pair(1..25)) {
            let prod = karatsuba_mul(&x, &y).unwrap();
            assert!(prod.len() <= x.len() + y.len());
            assert!(prod.len() >= 1);
        }
    }
    proptest! {
        #[test]
        fn one_is_multiplicative_identity(x in any_digit_sequence(1..25)) {
            let mut one = "0".repeat(x.len() - 1);
            one.push('1');
            let one: DigitSequence = one.parse().unwrap();
            assert_eq!(karatsuba_mul(&x, &one).unwrap(), x);
        }
    }

    #[test]
    fn hardcoded() {
        let cases = vec![
            ("3", "4", "12"),
            ("19", "11", "209"),
            ("99", "99", "9801"),
            ("1234", "5678", "7006652"),
            ("12345", "67890", "838102050"),
            ("9999", "0001", "9999"),
            ("0000", "0000", "0"),
            (
                "1234567890123456",
                "9876543210123456",
                "12193263112635260231976841383936",
            ),
        ];
        for (x, y, want) in cases {
            let x: DigitSequence = x.parse().unwrap();
            let y: DigitSequence = y.parse().unwrap();
            assert_eq!(karatsuba_mul(&x, &y).unwrap().to_string(), want);
        }
    }

    #[test]
    fn repunit_square_structure() {
        // (10^32 - 1)^2 = 10^64 - 2*10^32 + 1
        let nines: DigitSequence = "9".repeat(32).parse().unwrap();
        let want = format!("{}8{}1", "9".repeat(31), "0".repeat(31));
        assert_eq!(karatsuba_mul(&nines, &nines).unwrap().to_string(), want);
        let nines: DigitSequence = "9".repeat(64).parse().unwrap();
        let want = format!("{}8{}1", "9".repeat(63), "0".repeat(63));
        assert_eq!(karatsuba_mul(&nines, &nines).unwrap().to_string(), want);
    }

    #[test]
    fn rejects_length_mismatch() {
        let x: DigitSequence = "123".parse().unwrap();
        let y: DigitSequence = "1234".parse().unwrap();
        assert!(matches!(
            karatsuba_mul(&x, &y),
            Err(Error::LengthMismatch { left: 3, right: 4 })
        ));
    }

    #[cfg(feature = "parallel")]
    proptest! {
        #[test]
        fn parallel_recursion_matches_oracle((x, y) in equal_len_digit_pair(300..340)) {
            let prod = karatsuba_mul(&x, &y).unwrap();
            assert_eq!(prod.to_string(), oracle_product(&x, &y));
        }
    }
}
