//! Error types for the API client.

use std::fmt::Display;

use thiserror::Error;

use crate::config::messages;

/// Errors surfaced by [`ApiClient`](super::ApiClient) and the [`LessonApi`](super::LessonApi) calls.
///
/// The `Display` text of each variant is what the humanizer keys on.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The fixed request timeout elapsed.
    #[error("Request timeout. Please check your connection and try again.")]
    Timeout,

    /// The server could not be reached. Holds the transport detail.
    #[error("Network error. Please check your internet connection.")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },

    /// Any other transport failure.
    #[error("Request failed: {0}")]
    Request(String),

    /// The request could not be built (bad header, unserializable body).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A 2xx body that is not valid JSON or does not fit the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A 2xx body of the wrong JSON shape.
    #[error("Unexpected response: expected {0}")]
    UnexpectedResponse(&'static str),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Shorthand for [`humanize_error`] on this error.
    pub fn user_message(&self) -> String {
        humanize_error(self)
    }
}

/// Maps an error to a message for the user by matching substrings of its text.
pub fn humanize_error(error: &dyn Display) -> String {
    let text = error.to_string();
    if text.contains("Network error") {
        messages::NETWORK.to_string()
    } else if text.contains("timeout") {
        messages::TIMEOUT.to_string()
    } else if text.contains("404") {
        messages::NOT_FOUND.to_string()
    } else if text.contains("500") {
        messages::SERVER_ERROR.to_string()
    } else if text.is_empty() {
        messages::UNEXPECTED.to_string()
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_by_substring() {
        assert_eq!(
            humanize_error(&ApiError::Network("connection refused".into())),
            messages::NETWORK
        );
        assert_eq!(humanize_error(&ApiError::Timeout), messages::TIMEOUT);

        let not_found = ApiError::Http {
            status: 404,
            message: "HTTP error! status: 404".into(),
        };
        assert_eq!(not_found.user_message(), messages::NOT_FOUND);

        let server = ApiError::Http {
            status: 500,
            message: "HTTP error! status: 500".into(),
        };
        assert_eq!(server.user_message(), messages::SERVER_ERROR);
    }

    #[test]
    fn test_humanize_passes_other_text_through() {
        let err = ApiError::Http {
            status: 400,
            message: "Lesson is full".into(),
        };
        assert_eq!(err.user_message(), "Lesson is full");
        assert_eq!(err.status(), Some(400));

        let empty = ApiError::Http {
            status: 418,
            message: String::new(),
        };
        assert_eq!(empty.user_message(), messages::UNEXPECTED);
    }
}
