use std::path::PathBuf;
use std::time::Duration;

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::http::error::ExchangeError;
use crate::http::parser::{MAX_HEAD_SIZE, find_head_end};
use crate::http::request::{Request, requests_keep_alive};
use crate::http::static_files::{self, resolve_path};
use crate::http::writer::{send_file, send_status};

/// Version used for responses to requests whose version could not be parsed.
pub const FALLBACK_VERSION: &str = "HTTP/1.1";

const READ_CHUNK: usize = 1024;

/// One accepted connection and its keep-alive session.
pub struct Connection<S> {
    stream: S,
    buffer: BytesMut,
    doc_root: PathBuf,
    idle_timeout: Duration,
    keep_alive: bool,
    state: ConnectionState,
}

#[derive(Debug)]
pub enum ConnectionState {
    AwaitRequest,
    Parse(Bytes),
    Validate(Request),
    Dispatch(Request),
    Responded,
    Errored {
        version: String,
        error: ExchangeError,
    },
    Close,
}

enum ReadOutcome {
    Head(Bytes),
    PeerClosed,
    TimedOut,
    HeadTooLarge,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, doc_root: PathBuf, idle_timeout: Duration) -> Self {
        Self {
            stream,
            buffer: BytesMut::with_capacity(4096),
            doc_root,
            idle_timeout,
            keep_alive: false,
            state: ConnectionState::AwaitRequest,
        }
    }

    /// Whether a request on this connection has asked for keep-alive.
    pub fn keep_alive(&self) -> bool {
        self.keep_alive
    }

    /// Drives the session until it closes.
    ///
    /// Returns an error only for write failures while responding; the
    /// stream is dropped (and so closed) either way.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Close);

            self.state = match state {
                ConnectionState::AwaitRequest => match self.read_head().await {
                    Ok(ReadOutcome::Head(head)) => ConnectionState::Parse(head),
                    Ok(ReadOutcome::PeerClosed) => ConnectionState::Close,
                    Ok(ReadOutcome::TimedOut) => {
                        debug!(timeout = ?self.idle_timeout, "Idle timeout, closing connection");
                        ConnectionState::Close
                    }
                    Ok(ReadOutcome::HeadTooLarge) => ConnectionState::Errored {
                        version: FALLBACK_VERSION.to_string(),
                        error: ExchangeError::MalformedRequest,
                    },
                    Err(e) => {
                        warn!(error = %e, "Read failed, closing connection");
                        ConnectionState::Close
                    }
                },

                ConnectionState::Parse(head) => {
                    if requests_keep_alive(&head) {
                        self.keep_alive = true;
                    }

                    match Request::parse(&head) {
                        Ok(req) => ConnectionState::Validate(req),
                        Err(error) => ConnectionState::Errored {
                            version: FALLBACK_VERSION.to_string(),
                            error,
                        },
                    }
                }

                ConnectionState::Validate(req) => match req.validate() {
                    Ok(()) => ConnectionState::Dispatch(req),
                    Err(error) => ConnectionState::Errored {
                        version: req.version,
                        error,
                    },
                },

                ConnectionState::Dispatch(req) => self.dispatch(req).await?,

                ConnectionState::Responded => self.next_exchange(),

                ConnectionState::Errored { version, error } => {
                    let status = error.status();
                    info!(
                        status = status.as_u16(),
                        reason = status.reason_phrase(),
                        error = %error,
                        "Request failed"
                    );
                    send_status(&mut self.stream, &version, status).await?;

                    if error.ends_session() {
                        ConnectionState::Close
                    } else {
                        self.next_exchange()
                    }
                }

                ConnectionState::Close => {
                    // Peer may already be gone; the stream is dropped with the connection anyway.
                    let _ = self.stream.shutdown().await;
                    break;
                }
            };
        }

        Ok(())
    }

    async fn dispatch(&mut self, req: Request) -> anyhow::Result<ConnectionState> {
        let path = resolve_path(&self.doc_root, &req.uri);

        let file = match static_files::open(&path).await {
            Ok(file) => file,
            Err(error) => {
                return Ok(ConnectionState::Errored {
                    version: req.version,
                    error,
                });
            }
        };

        let content_type = file.content_type;
        let sent = send_file(&mut self.stream, &req.version, file, self.keep_alive).await?;

        info!(
            status = 200,
            path = %path.display(),
            content_type,
            bytes = sent,
            keep_alive = self.keep_alive,
            "Served file"
        );

        Ok(ConnectionState::Responded)
    }

    fn next_exchange(&self) -> ConnectionState {
        if self.keep_alive {
            ConnectionState::AwaitRequest
        } else {
            ConnectionState::Close
        }
    }

    async fn read_head(&mut self) -> anyhow::Result<ReadOutcome> {
        loop {
            if let Some(end) = find_head_end(&self.buffer) {
                return Ok(ReadOutcome::Head(self.buffer.split_to(end).freeze()));
            }

            if self.buffer.len() >= MAX_HEAD_SIZE {
                return Ok(ReadOutcome::HeadTooLarge);
            }

            self.buffer.reserve(READ_CHUNK);

            let read = timeout(self.idle_timeout, self.stream.read_buf(&mut self.buffer));
            let n = match read.await {
                Ok(res) => res?,
                // A finished request line is answered even without the blank line.
                Err(_) if self.buffer.contains(&b'\n') => {
                    return Ok(ReadOutcome::Head(self.buffer.split().freeze()));
                }
                Err(_) => return Ok(ReadOutcome::TimedOut),
            };

            if n == 0 {
                if self.buffer.is_empty() {
                    return Ok(ReadOutcome::PeerClosed);
                }

                // Peer half-closed after an unterminated head; serve what arrived.
                return Ok(ReadOutcome::Head(self.buffer.split().freeze()));
            }
        }
    }
}
