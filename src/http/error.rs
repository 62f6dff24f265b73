use thiserror::Error;

use crate::http::response::StatusCode;

/// Ways a single exchange can fail before a file is served.
///
/// Each variant is answered with a header-only response. Protocol errors
/// (400, 405, 505) also end the session; resource errors (403, 404) leave a
/// keep-alive session open for the next request.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeError {
    #[error("malformed request line")]
    MalformedRequest,
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("HTTP version not supported")]
    VersionNotSupported,
    #[error("resource not found")]
    NotFound,
    #[error("resource not readable")]
    Forbidden,
}

impl ExchangeError {
    pub fn status(&self) -> StatusCode {
        match self {
            ExchangeError::MalformedRequest => StatusCode::BadRequest,
            ExchangeError::MethodNotAllowed => StatusCode::MethodNotAllowed,
            ExchangeError::VersionNotSupported => StatusCode::HttpVersionNotSupported,
            ExchangeError::NotFound => StatusCode::NotFound,
            ExchangeError::Forbidden => StatusCode::Forbidden,
        }
    }

    /// Whether the connection must close after the error response.
    pub fn ends_session(&self) -> bool {
        match self {
            ExchangeError::MalformedRequest
            | ExchangeError::MethodNotAllowed
            | ExchangeError::VersionNotSupported => true,
            ExchangeError::NotFound | ExchangeError::Forbidden => false,
        }
    }
}
