//! Mod-37 check symbols.
//!
//! 37 is prime and larger than the value alphabet, so a check symbol catches
//! every single wrong-digit error and adjacent transposition of a value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::alphabet;
use crate::errors::CheckError;
use crate::value::decode;

/// Number of distinct check symbols.
pub const CHECK_MODULUS: u32 = 37;

/// A single check symbol from `0-9`, the canonical letters, or `*~$=U`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Check(char);

impl Check {
    /// Computes the check symbol of an integer: `value % 37` in the check alphabet.
    pub fn generate(value: u32) -> Self {
        Self(char::from(alphabet::check_symbol(value % CHECK_MODULUS)))
    }

    /// Parses a check symbol typed by a person.
    ///
    /// Letters are case-insensitive; `O` reads as `0` and `I`/`L` as `1`.
    pub fn parse(raw: &str) -> Result<Self, CheckError> {
        let mut chars = raw.chars();
        let symbol = match (chars.next(), chars.next()) {
            (Some(symbol), None) => symbol,
            _ => return Err(CheckError::InvalidLength(raw.chars().count())),
        };

        let byte = u8::try_from(symbol).map_err(|_| CheckError::InvalidDigit(symbol))?;
        let check_only = alphabet::CHECK_ONLY_SYMBOLS.contains(&alphabet::fold_upper(byte));
        if alphabet::decode_byte(byte).is_none() && !check_only {
            return Err(CheckError::InvalidDigit(symbol));
        }

        Ok(Self(char::from(alphabet::correct_look_alike(byte))))
    }

    /// The symbol itself.
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Check {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Check {
    type Error = CheckError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Check> for String {
    fn from(check: Check) -> Self {
        check.0.to_string()
    }
}

impl From<Check> for char {
    fn from(check: Check) -> Self {
        check.0
    }
}

/// Verifies base-32 digits against a check symbol.
///
/// Any decode failure makes the pair invalid.
///
/// ```rust
/// use crock32_canonical::{encode, is_valid, Check};
///
/// let check = Check::generate(12);
/// assert!(is_valid(encode(12).as_str(), check));
/// assert!(!is_valid("", check));
/// ```
pub fn is_valid(value: &str, check: Check) -> bool {
    decode(value).is_ok_and(|decoded| Check::generate(decoded) == check)
}
