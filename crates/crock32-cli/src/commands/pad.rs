//! Pad and trim command implementations.

use crock32_canonical::{trim as trim_padding, Base32};

pub fn pad(value: String, width: usize) -> Result<(), Box<dyn std::error::Error>> {
    let base32 =
        Base32::parse(&value).map_err(|e| format!("Invalid base-32 value {:?}: {}", value, e))?;
    println!("{}", base32.pad(width));
    Ok(())
}

pub fn trim(text: String) -> Result<(), Box<dyn std::error::Error>> {
    let trimmed = trim_padding(&text);
    if trimmed.is_invalid() {
        return Err(format!("Nothing left of {:?} after trimming", text).into());
    }
    println!("{}", trimmed);
    Ok(())
}
