//! Encode command implementation.

use crock32_canonical::{encode, Check};
use serde_json::json;

use crate::output;

pub fn run(
    value: u32,
    with_check: bool,
    width: Option<usize>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let encoded = encode(value);
    let digits = match width {
        Some(width) => encoded.pad(width),
        None => encoded.to_string(),
    };
    let check = Check::generate(value);

    let result = json!({
        "value": value,
        "base32": digits,
        "check": with_check.then(|| check.to_string()),
    });

    output::emit(json, &result, || {
        if with_check {
            format!("{}{}", digits, check)
        } else {
            digits.clone()
        }
    });
    Ok(())
}
