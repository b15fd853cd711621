//! Booking backend error types.

/// Errors from talking to the booking backend.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the JSON we expected
    #[error("JSON parse error: {message}{}", body_suffix(.body))]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Backend returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the backend
    #[error("rate limited by booking backend")]
    RateLimited,

    /// Token rejected or missing on a call that needs it
    #[error("unauthorized (session token rejected)")]
    Unauthorized,

    /// Session bootstrap did not yield a usable token
    #[error("session start returned no usable token")]
    MissingToken,
}

fn body_suffix(body: &Option<String>) -> String {
    body.as_deref()
        .map(|b| format!(" (body: {b})"))
        .unwrap_or_default()
}

impl BookingError {
    /// Build a JSON error, keeping a short excerpt of the offending body.
    pub(crate) fn json(err: serde_json::Error, body: &str) -> Self {
        BookingError::Json {
            message: err.to_string(),
            body: Some(body.chars().take(500).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BookingError::MissingToken;
        assert_eq!(err.to_string(), "session start returned no usable token");

        let err = BookingError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = BookingError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected string (body: {})");

        let err = BookingError::Json {
            message: "EOF".into(),
            body: None,
        };
        assert_eq!(err.to_string(), "JSON parse error: EOF");
    }

    #[test]
    fn json_error_truncates_body() {
        let body = "x".repeat(2000);
        let parse_err = serde_json::from_str::<serde_json::Value>(&body).unwrap_err();

        match BookingError::json(parse_err, &body) {
            BookingError::Json { body: Some(excerpt), .. } => assert_eq!(excerpt.len(), 500),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
