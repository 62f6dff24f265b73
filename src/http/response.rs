/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): File served
/// - `BadRequest` (400): Malformed request line
/// - `Forbidden` (403): File exists but is not readable
/// - `NotFound` (404): File missing or cannot be opened
/// - `MethodNotAllowed` (405): Method other than `GET`
/// - `HttpVersionNotSupported` (505): Version other than HTTP/1.0 or HTTP/1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported,
}

impl StatusCode {
    /// Maps a numeric code to a status. Codes outside the supported set
    /// fall back to `Ok`.
    ///
    /// # Example
    ///
    /// ```
    /// # use docserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::from_u16(404), StatusCode::NotFound);
    /// assert_eq!(StatusCode::from_u16(418), StatusCode::Ok);
    /// ```
    pub fn from_u16(code: u16) -> Self {
        match code {
            400 => StatusCode::BadRequest,
            403 => StatusCode::Forbidden,
            404 => StatusCode::NotFound,
            405 => StatusCode::MethodNotAllowed,
            505 => StatusCode::HttpVersionNotSupported,
            _ => StatusCode::Ok,
        }
    }

    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::HttpVersionNotSupported => 505,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::HttpVersionNotSupported => "HTTP Version Not Supported",
        }
    }
}

/// Status line and headers of a response. Bodies are never buffered here;
/// file contents are streamed separately after the head is written.
#[derive(Debug)]
pub struct ResponseHead {
    /// Version echoed in the status line
    pub version: String,
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers in the order they are sent
    pub headers: Vec<(String, String)>,
}

/// Builder for response heads in a fluent style.
///
/// # Example
///
/// ```ignore
/// let head = ResponseHeadBuilder::new("HTTP/1.1", StatusCode::Ok)
///     .header("Content-Type", "text/html")
///     .header("Content-Length", "42")
///     .build();
/// ```
pub struct ResponseHeadBuilder {
    version: String,
    status: StatusCode,
    headers: Vec<(String, String)>,
}

impl ResponseHeadBuilder {
    pub fn new(version: impl Into<String>, status: StatusCode) -> Self {
        Self {
            version: version.into(),
            status,
            headers: Vec::new(),
        }
    }

    /// Appends a header. Insertion order is preserved on the wire.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    pub fn build(self) -> ResponseHead {
        ResponseHead {
            version: self.version,
            status: self.status,
            headers: self.headers,
        }
    }
}

impl ResponseHead {
    /// Header-only response with `Content-Length: 0`.
    pub fn status_only(version: &str, status: StatusCode) -> Self {
        ResponseHeadBuilder::new(version, status)
            .header("Content-Length", "0")
            .build()
    }

    /// `200 OK` head announcing a file body of `len` bytes.
    pub fn file(version: &str, content_type: &str, len: u64, keep_alive: bool) -> Self {
        let connection = if keep_alive { "keep-alive" } else { "close" };

        ResponseHeadBuilder::new(version, StatusCode::Ok)
            .header("Content-Type", content_type)
            .header("Content-Length", len.to_string())
            .header("Connection", connection)
            .build()
    }

    /// Looks up a header value by exact name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Serializes the status line and headers, terminated by an empty line.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(128);

        let status_line = format!(
            "{} {} {}\r\n",
            self.version,
            self.status.as_u16(),
            self.status.reason_phrase()
        );
        buf.extend_from_slice(status_line.as_bytes());

        for (k, v) in &self.headers {
            buf.extend_from_slice(k.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(v.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }

        buf.extend_from_slice(b"\r\n");
        buf
    }
}
