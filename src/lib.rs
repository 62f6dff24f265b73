//! docserve - static file server
//!
//! Core library for the HTTP session state machine and the listener.

pub mod config;
pub mod http;
pub mod server;
