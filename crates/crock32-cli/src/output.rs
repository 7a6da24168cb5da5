//! Output formatting utilities.

use serde_json::Value;

/// Formats a result object as pretty JSON.
pub fn format_json(result: &Value) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

/// Prints either the JSON object or the plain line.
pub fn emit(json: bool, result: &Value, plain: impl FnOnce() -> String) {
    if json {
        println!("{}", format_json(result));
    } else {
        println!("{}", plain());
    }
}
