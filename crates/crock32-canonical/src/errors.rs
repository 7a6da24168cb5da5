use thiserror::Error;

/// Errors raised while decoding or normalizing base-32 text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input had no characters (or, when normalizing, no digits at all).
    #[error("cannot decode an empty base-32 value")]
    EmptyInput,
    /// A character outside the accepted alphabet was found.
    #[error("invalid base-32 digit '{0}'")]
    InvalidDigit(char),
    /// The value is too big for a 32-bit unsigned integer.
    #[error("base-32 value is too big for a 32-bit unsigned integer")]
    Overflow,
}

/// Errors raised while parsing a check symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckError {
    /// The input was not exactly one character long.
    #[error("a check symbol must be exactly 1 character long, got {0}")]
    InvalidLength(usize),
    /// The character is not a valid check symbol.
    #[error("'{0}' is not a valid check symbol")]
    InvalidDigit(char),
}

/// Errors raised while parsing or verifying a checked code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodeError {
    /// The value part could not be normalized or decoded.
    #[error("invalid value: {0}")]
    Value(#[from] DecodeError),
    /// The trailing check symbol could not be parsed.
    #[error("invalid check symbol: {0}")]
    Check(#[from] CheckError),
    /// The check symbol does not match the value.
    #[error("check symbol does not match the value")]
    Mismatch,
}
