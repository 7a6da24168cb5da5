//! Decode and normalize command implementations.

use crock32_canonical::Base32;
use serde_json::json;

use crate::output;

pub fn run(text: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let value = Base32::parse(&text).map_err(|e| format!("Invalid base-32 text {:?}: {}", text, e))?;
    let decoded = value
        .decode()
        .map_err(|e| format!("Cannot decode {}: {}", value, e))?;

    let result = json!({
        "input": text,
        "base32": value,
        "value": decoded,
    });
    output::emit(json, &result, || decoded.to_string());
    Ok(())
}

pub fn normalize(text: String, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let value = Base32::parse(&text).map_err(|e| format!("Invalid base-32 text {:?}: {}", text, e))?;

    let result = json!({
        "input": text,
        "base32": value,
        "fits_u32": value.will_fit(),
    });
    output::emit(json, &result, || value.to_string());
    Ok(())
}
