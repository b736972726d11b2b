//! Form and payload validators.
//!
//! Every validator is a pure function returning a [`ValidationResult`].
//! Composite validators stop at the first failing field and return that
//! field's result unchanged.

pub mod fields;
pub mod records;

pub use fields::*;
pub use records::*;

use serde::Serialize;

/// Outcome of a single validation: a flag and a user-facing message.
///
/// The message is empty when the input is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
        }
    }

    /// Converts into a `Result`, carrying the message on failure.
    pub fn into_result(self) -> Result<(), String> {
        if self.is_valid {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

/// Trims the input and HTML-escapes `<`, `>`, `"` and `'`.
pub fn sanitize_input(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.trim().chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}

/// Message to display for a validation outcome.
pub fn format_validation_error(result: Option<&ValidationResult>) -> String {
    match result {
        None => "Validation error occurred.".to_string(),
        Some(r) if r.message.is_empty() => "Invalid input.".to_string(),
        Some(r) => r.message.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationResult::ok().into_result(), Ok(()));
        assert_eq!(
            ValidationResult::fail("nope").into_result(),
            Err("nope".to_string())
        );
    }

    #[test]
    fn test_sanitize_input() {
        assert_eq!(
            sanitize_input("  <b>\"Tom's\"</b> "),
            "&lt;b&gt;&quot;Tom&#x27;s&quot;&lt;/b&gt;"
        );
        assert_eq!(sanitize_input("   "), "");
    }

    #[test]
    fn test_format_validation_error() {
        assert_eq!(format_validation_error(None), "Validation error occurred.");
        assert_eq!(
            format_validation_error(Some(&ValidationResult::ok())),
            "Invalid input."
        );
        assert_eq!(
            format_validation_error(Some(&ValidationResult::fail("Name is required"))),
            "Name is required"
        );
    }
}
