use std::fmt;

/// Custom error type for Tableau operations
#[derive(Debug)]
pub enum TableauError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// Sign-in was rejected by the server
    Authentication { status: u16, body: String },
    /// Operation requires an active session
    IllegalState(String),
    /// Data request returned a non-200 response
    ApiRequest { status: u16, url: String, body: String },
    /// Named resource does not exist or is not visible
    NotFound(String),
    /// JSON parsing error
    Json(String),
    /// Failed to write console output
    Output(String),
}

impl fmt::Display for TableauError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableauError::Http(e) => write!(f, "HTTP request failed: {}", e),
            TableauError::Authentication { status, body } => {
                write!(f, "Sign-in failed ({}): {}", status, body)
            }
            TableauError::IllegalState(msg) => write!(f, "{}", msg),
            TableauError::ApiRequest { status, url, body } => {
                write!(f, "GET {} failed ({}): {}", url, status, body)
            }
            TableauError::NotFound(msg) => write!(f, "{}", msg),
            TableauError::Json(msg) => write!(f, "JSON error: {}", msg),
            TableauError::Output(msg) => write!(f, "Output error: {}", msg),
        }
    }
}

impl std::error::Error for TableauError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableauError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TableauError {
    fn from(err: reqwest::Error) -> Self {
        TableauError::Http(err)
    }
}

impl From<serde_json::Error> for TableauError {
    fn from(err: serde_json::Error) -> Self {
        TableauError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TableauError {
    fn from(err: std::io::Error) -> Self {
        TableauError::Output(err.to_string())
    }
}

/// Result type alias for Tableau operations
pub type Result<T> = std::result::Result<T, TableauError>;
