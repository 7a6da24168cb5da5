use std::fmt;

use serde::{Deserialize, Serialize};

use crate::check::Check;
use crate::errors::{CodeError, DecodeError};
use crate::value::{encode, Base32};

/// A base-32 value followed by its check symbol, as handed to people.
///
/// Deserialization validates both fields; whether they match is left to
/// [`CheckedCode::verify`], as with [`CheckedCode::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckedCode {
    /// Canonical value digits.
    pub value: Base32,
    /// Check symbol typed after the value.
    pub check: Check,
}

impl CheckedCode {
    /// Encodes an integer together with its check symbol.
    pub fn generate(value: u32) -> Self {
        Self {
            value: encode(value),
            check: Check::generate(value),
        }
    }

    /// Splits typed input into value and trailing check symbol and normalizes both.
    ///
    /// The check symbol is not verified here; see [`CheckedCode::decode`].
    pub fn parse(raw: &str) -> Result<Self, CodeError> {
        let Some((split, _)) = raw.char_indices().last() else {
            return Err(CodeError::Value(DecodeError::EmptyInput));
        };
        let (value, check) = raw.split_at(split);
        let check = Check::parse(check)?;
        let value = Base32::parse(value)?;
        Ok(Self { value, check })
    }

    /// Whether the check symbol matches the value.
    pub fn verify(&self) -> bool {
        self.value.is_valid(self.check)
    }

    /// Decodes the value once the check symbol has been confirmed.
    pub fn decode(&self) -> Result<u32, CodeError> {
        let decoded = self.value.decode()?;
        if Check::generate(decoded) != self.check {
            return Err(CodeError::Mismatch);
        }
        Ok(decoded)
    }
}

impl fmt::Display for CheckedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.check)
    }
}
