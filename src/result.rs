use thiserror::Error;

/// Which way a request went after its CORS headers were written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorsDecision {
    /// `OPTIONS` request: the response ends with the headers alone.
    Preflight,
    /// Any other method: the delegate handler owns the rest of the response.
    Forward,
}

impl CorsDecision {
    pub fn is_preflight(self) -> bool {
        matches!(self, CorsDecision::Preflight)
    }
}

/// Policy values that cannot be written to an HTTP response.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allowed origin '{0}' is not a valid header value")]
    InvalidOrigin(String),
    #[error("allowed method '{0}' is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("value for header '{name}' is not a valid header value")]
    InvalidHeaderValue { name: String },
}
