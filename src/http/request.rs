use crate::http::error::ExchangeError;
use crate::http::parser::parse_request_line;

/// The only method the server serves.
pub const METHOD_GET: &str = "GET";

/// Versions accepted in the request line.
pub const SUPPORTED_VERSIONS: [&str; 2] = ["HTTP/1.0", "HTTP/1.1"];

/// Marker whose presence anywhere in a request head switches the session to
/// keep-alive.
pub const KEEP_ALIVE_MARKER: &[u8] = b"Connection: keep-alive";

/// Represents a parsed HTTP request line.
///
/// Only the first line of the head is interpreted; headers are not parsed
/// (see [`requests_keep_alive`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method as sent, e.g. "GET"
    pub method: String,
    /// The request URI as sent, e.g. "/index.html"
    pub uri: String,
    /// HTTP version as sent, e.g. "HTTP/1.1"
    pub version: String,
}

impl Request {
    /// Parses the request line of a buffered head.
    ///
    /// Fails with [`ExchangeError::MalformedRequest`] when the first line has
    /// fewer than three tokens. Method and version are not checked here.
    pub fn parse(head: &[u8]) -> Result<Self, ExchangeError> {
        let (method, uri, version) = parse_request_line(head)?;
        Ok(Self {
            method,
            uri,
            version,
        })
    }

    /// Checks the method (exactly `GET`) and then the version.
    pub fn validate(&self) -> Result<(), ExchangeError> {
        if self.method != METHOD_GET {
            return Err(ExchangeError::MethodNotAllowed);
        }

        if !SUPPORTED_VERSIONS.contains(&self.version.as_str()) {
            return Err(ExchangeError::VersionNotSupported);
        }

        Ok(())
    }
}

/// Whether a request head asks for a persistent connection.
///
/// This is a case-sensitive substring search for [`KEEP_ALIVE_MARKER`], not
/// header parsing: `Connection: Keep-Alive` does not match, and the marker
/// inside another header's value does.
pub fn requests_keep_alive(head: &[u8]) -> bool {
    head.windows(KEEP_ALIVE_MARKER.len())
        .any(|w| w == KEEP_ALIVE_MARKER)
}
