use std::path::Path;

/// Returned for any file whose extension is not in the table below.
pub const UNRECOGNIZED_CONTENT_TYPE: &str = "application/octet-stream";

/// Maps a file path to the MIME type sent in `Content-Type`.
///
/// The extension is the text after the last `.` of the file name and is
/// matched case-sensitively. Names without a `.` are unrecognized.
///
/// # Example
///
/// ```
/// # use std::path::Path;
/// # use docserve::http::mime::{content_type, UNRECOGNIZED_CONTENT_TYPE};
/// assert_eq!(content_type(Path::new("www/index.html")), "text/html");
/// assert_eq!(content_type(Path::new("www/README")), UNRECOGNIZED_CONTENT_TYPE);
/// ```
pub fn content_type(path: &Path) -> &'static str {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return UNRECOGNIZED_CONTENT_TYPE;
    };

    let Some((_, ext)) = name.rsplit_once('.') else {
        return UNRECOGNIZED_CONTENT_TYPE;
    };

    match ext {
        "html" => "text/html",
        "txt" => "text/plain",
        "png" => "image/png",
        "gif" => "image/gif",
        "jpg" => "image/jpg",
        "ico" => "image/x-icon",
        "css" => "text/css",
        "js" => "application/javascript",
        _ => UNRECOGNIZED_CONTENT_TYPE,
    }
}
