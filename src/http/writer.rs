use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{ResponseHead, StatusCode};
use crate::http::static_files::StaticFile;

/// Bytes read from the file per chunk.
pub const CHUNK_SIZE: usize = 1024;

/// Writes a serialized response head, retrying short writes.
pub struct ResponseWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl ResponseWriter {
    pub fn new(head: &ResponseHead) -> Self {
        Self {
            buffer: head.to_bytes(),
            written: 0,
        }
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing"));
            }

            self.written += n;
        }

        Ok(())
    }
}

/// Sends a header-only response with `Content-Length: 0`. The stream is left
/// open.
pub async fn send_status<W>(
    stream: &mut W,
    version: &str,
    status: StatusCode,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let head = ResponseHead::status_only(version, status);
    ResponseWriter::new(&head).write_to_stream(stream).await?;
    stream.flush().await?;
    Ok(())
}

/// Sends a `200 OK` head followed by exactly `file.len` body bytes, read in
/// [`CHUNK_SIZE`] chunks. Each chunk is fully written before the next read.
///
/// Returns the number of body bytes sent. The file is closed when this
/// returns, on success or failure.
pub async fn send_file<W>(
    stream: &mut W,
    version: &str,
    file: StaticFile,
    keep_alive: bool,
) -> anyhow::Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let StaticFile {
        file,
        len,
        content_type,
    } = file;

    let head = ResponseHead::file(version, content_type, len, keep_alive);
    ResponseWriter::new(&head).write_to_stream(stream).await?;

    let mut body = file.take(len);
    let mut chunk = [0u8; CHUNK_SIZE];
    let mut sent = 0u64;

    loop {
        let n = body.read(&mut chunk).await?;
        if n == 0 {
            break;
        }

        stream.write_all(&chunk[..n]).await?;
        sent += n as u64;
    }

    stream.flush().await?;

    if sent < len {
        anyhow::bail!(
            "file shrank during transfer: sent {} of {} bytes",
            sent,
            len
        );
    }

    Ok(sent)
}
