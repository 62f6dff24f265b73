use crate::http::error::ExchangeError;

/// Largest request head accepted without a terminating blank line.
pub const MAX_HEAD_SIZE: usize = 8192;

/// Returns the length of the request head at the start of `buf`, including
/// its terminating blank line (`\r\n\r\n`, or `\n\n` from lenient clients).
pub fn find_head_end(buf: &[u8]) -> Option<usize> {
    let crlf = buf
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .map(|pos| pos + 4);
    let lf = buf
        .windows(2)
        .position(|w| w == b"\n\n")
        .map(|pos| pos + 2);

    match (crlf, lf) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Splits the first line of a request head into its first three
/// whitespace-separated tokens: method, URI and version.
///
/// Tokens past the third are ignored. Non-UTF-8 bytes are replaced rather
/// than rejected.
pub fn parse_request_line(head: &[u8]) -> Result<(String, String, String), ExchangeError> {
    let line_end = head
        .iter()
        .position(|&b| b == b'\n')
        .unwrap_or(head.len());
    let line = String::from_utf8_lossy(&head[..line_end]);

    let mut parts = line.split_whitespace();

    let method = parts.next().ok_or(ExchangeError::MalformedRequest)?;
    let uri = parts.next().ok_or(ExchangeError::MalformedRequest)?;
    let version = parts.next().ok_or(ExchangeError::MalformedRequest)?;

    Ok((method.to_string(), uri.to_string(), version.to_string()))
}
