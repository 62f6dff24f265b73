use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs::{self, File};

use crate::http::error::ExchangeError;
use crate::http::mime;

/// File served when the resolved path names a directory with a trailing `/`.
pub const INDEX_FILE: &str = "index.html";

/// A file opened for transfer.
#[derive(Debug)]
pub struct StaticFile {
    pub file: File,
    /// Size at open time, sent as `Content-Length`
    pub len: u64,
    pub content_type: &'static str,
}

/// Builds `<doc_root><uri>`, appending [`INDEX_FILE`] when the result ends
/// in `/`.
///
/// The URI is appended verbatim: `..` segments are not collapsed and the
/// result is not confined to the document root.
pub fn resolve_path(doc_root: &Path, uri: &str) -> PathBuf {
    let mut path = format!("{}{}", doc_root.display(), uri);
    if path.ends_with('/') {
        path.push_str(INDEX_FILE);
    }
    PathBuf::from(path)
}

/// Opens the file at `path` for a `200 OK` transfer.
///
/// A path that cannot be inspected is `NotFound`. An existing path that
/// denies read permission is `Forbidden`. Any other failure to open it as
/// a regular file, directories included, is `NotFound`.
pub async fn open(path: &Path) -> Result<StaticFile, ExchangeError> {
    let metadata = fs::metadata(path)
        .await
        .map_err(|_| ExchangeError::NotFound)?;

    let file = File::open(path).await.map_err(|e| match e.kind() {
        ErrorKind::PermissionDenied => ExchangeError::Forbidden,
        _ => ExchangeError::NotFound,
    })?;

    if !metadata.is_file() {
        return Err(ExchangeError::NotFound);
    }

    let len = file
        .metadata()
        .await
        .map_err(|_| ExchangeError::NotFound)?
        .len();

    Ok(StaticFile {
        file,
        len,
        content_type: mime::content_type(path),
    })
}
