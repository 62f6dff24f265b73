//! HTTP protocol implementation.
//!
//! A hand-rolled HTTP/1.0 and HTTP/1.1 static file server with support for
//! keep-alive connections. Only `GET` is served; requests have no body.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection session implementing the request-response state machine
//! - **`parser`**: Finds request heads in the read buffer and splits the request line
//! - **`request`**: Request representation, validation and the keep-alive predicate
//! - **`response`**: Status codes and header-only response heads
//! - **`error`**: Exchange errors and their session policy
//! - **`static_files`**: Path resolution under the document root and file opening
//! - **`writer`**: Writes response heads and streams file bodies to the client
//! - **`mime`**: MIME type detection based on file extensions
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────────┐
//!        │  AwaitRequest   │ ← Timed read until a request head is buffered
//!        └───────┬─────────┘
//!                │ head received        (EOF / timeout / read error → Close)
//!                ▼
//!        ┌─────────────────┐
//!        │     Parse       │ ← Keep-alive marker, request line tokens
//!        └───────┬─────────┘
//!                ▼
//!        ┌─────────────────┐
//!        │    Validate     │ ← Method and version
//!        └───────┬─────────┘
//!                ▼
//!        ┌─────────────────┐
//!        │    Dispatch     │ ← Resolve path, open file, stream it
//!        └───────┬─────────┘
//!                ├─ Responded ─┐
//!                └─ Errored ───┤ 400/405/505 → Close
//!                              ├─ Keep-Alive → AwaitRequest
//!                              └─ Otherwise  → Close
//! ```

pub mod connection;
pub mod error;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod static_files;
pub mod writer;
