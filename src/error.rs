#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("digit sequence is empty")]
    EmptySequence,
    #[error("invalid digit character {0:?}")]
    NonDigit(char),
    #[error("digit value {0} is out of range (expected 0..=9)")]
    DigitOutOfRange(u8),
    #[error("operand lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("operand length {0} is not a power of two")]
    LengthNotPowerOfTwo(usize),
}
