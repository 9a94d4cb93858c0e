//! Directions client error types.

/// Errors from the directions HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    /// HTTP request failed (network error, timeout, etc.)
    ///
    /// The URL is stripped on conversion since its query string carries the
    /// API key.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// JSON deserialization failed
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Leading part of the offending body, for logs
        body: Option<String>,
    },

    /// Non-success HTTP status
    #[error("HTTP status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The API answered but reported a failure status
    #[error("directions API returned {status}: {message}")]
    Api { status: String, message: String },

    /// Invalid or unauthorised API key
    #[error("unauthorized: check GOOGLE_API_KEY")]
    Unauthorized,

    /// Quota exhausted
    #[error("rate limited by directions API")]
    RateLimited,
}

impl From<reqwest::Error> for DirectionsError {
    fn from(err: reqwest::Error) -> Self {
        DirectionsError::Http(err.without_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DirectionsError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized: check GOOGLE_API_KEY");

        let err = DirectionsError::Api {
            status: "INVALID_REQUEST".into(),
            message: "Invalid request. Missing the 'origin' parameter.".into(),
        };
        assert_eq!(
            err.to_string(),
            "directions API returned INVALID_REQUEST: Invalid request. Missing the 'origin' parameter."
        );

        let err = DirectionsError::HttpStatus {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "HTTP status 500: boom");

        let err = DirectionsError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");
    }
}
