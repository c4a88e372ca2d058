//! Cookie counter for pasted browser cookie exports.

use serde_json::Value;

/// Number of object-typed entries in a JSON array.
///
/// Objects and nested arrays both count; `null` and scalars do not.
/// Anything that is not a JSON array counts as zero.
pub fn count_cookies(raw: &str) -> usize {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .iter()
            .filter(|item| item.is_object() || item.is_array())
            .count(),
        Ok(_) => 0,
        Err(e) => {
            tracing::debug!(error = %e, "Pasted cookies are not valid JSON");
            0
        }
    }
}

pub fn cookie_summary(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Found {count} COOKIE{plural} in JSON array.")
}
