//! Check symbol command implementations.

use crock32_canonical::{Base32, Check, CheckedCode, CodeError};
use serde_json::json;

use crate::output;

/// Error raised by `verify --strict` and `verify-code` on a mismatch.
#[derive(thiserror::Error, Debug)]
#[error("check symbol '{check}' does not match {value}")]
pub struct CheckMismatch {
    value: String,
    check: String,
}

pub fn generate(value: u32, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let check = Check::generate(value);
    let result = json!({ "value": value, "check": check });
    output::emit(json, &result, || check.to_string());
    Ok(())
}

pub fn verify(
    value: String,
    check: String,
    strict: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let base32 =
        Base32::parse(&value).map_err(|e| format!("Invalid base-32 value {:?}: {}", value, e))?;
    let check_symbol =
        Check::parse(&check).map_err(|e| format!("Invalid check symbol {:?}: {}", check, e))?;
    let valid = base32.is_valid(check_symbol);

    let result = json!({
        "base32": base32,
        "check": check_symbol,
        "valid": valid,
    });
    output::emit(json, &result, || {
        let verdict = if valid { "valid" } else { "invalid" };
        verdict.to_string()
    });

    if strict && !valid {
        return Err(CheckMismatch {
            value: base32.to_string(),
            check: check_symbol.to_string(),
        }
        .into());
    }
    Ok(())
}

pub fn verify_code(code: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let parsed =
        CheckedCode::parse(&code).map_err(|e| format!("Invalid code {:?}: {}", code, e))?;
    let decoded = match parsed.decode() {
        Ok(decoded) => decoded,
        Err(CodeError::Mismatch) => {
            return Err(CheckMismatch {
                value: parsed.value.to_string(),
                check: parsed.check.to_string(),
            }
            .into())
        }
        Err(e) => return Err(format!("Cannot decode {}: {}", parsed.value, e).into()),
    };

    let result = json!({
        "code": parsed.to_string(),
        "base32": parsed.value,
        "check": parsed.check,
        "value": decoded,
    });
    output::emit(json, &result, || decoded.to_string());
    Ok(())
}
