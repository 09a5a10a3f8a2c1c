use crate::low_level::{mul_digit, shift_pow10, split_digits};
use crate::{DigitSequence, Error};

/// Four-product recursive multiplication, the O(n²) baseline kept as a
/// correctness and performance contrast for
/// [karatsuba_mul](crate::karatsuba_mul). Operands must share a
/// power-of-two length.
pub fn naive_mul(l: &DigitSequence, r: &DigitSequence) -> Result<DigitSequence, Error> {
    if l.len() != r.len() {
        return Err(Error::LengthMismatch {
            left: l.len(),
            right: r.len(),
        });
    }
    if !l.len().is_power_of_two() {
        return Err(Error::LengthNotPowerOfTwo(l.len()));
    }
    Ok(naive_rec(l, r))
}

// xy = ac*10^n + (ad + bc)*10^(n/2) + bd
fn naive_rec(l: &DigitSequence, r: &DigitSequence) -> DigitSequence {
    let n = l.len();
    if n == 1 {
        return mul_digit(l.digits[0], r.digits[0]);
    }
    let (a, b) = split_digits(l);
    let (c, d) = split_digits(r);
    let ac = naive_rec(&a, &c);
    let ad = naive_rec(&a, &d);
    let bc = naive_rec(&b, &c);
    let bd = naive_rec(&b, &d);
    let ad_plus_bc = &ad + &bc;
    let scaled_ac = shift_pow10(&ac, n);
    let scaled_mid = shift_pow10(&ad_plus_bc, n / 2);
    &scaled_ac + &scaled_mid + &bd
}
