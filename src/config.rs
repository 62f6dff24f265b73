use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

/// How long a session waits for the next request before closing.
pub const IDLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Document root used when `--root` is not given.
pub const DEFAULT_DOC_ROOT: &str = "./www";

/// Command-line arguments for the server
#[derive(Parser, Debug)]
#[command(name = "docserve")]
#[command(version = "0.1.0")]
#[command(about = "Serves static files over HTTP/1.x", long_about = None)]
pub struct CliArgs {
    /// TCP port to listen on (all interfaces)
    pub port: u16,

    /// Directory request URIs are resolved against
    #[arg(short, long, default_value = DEFAULT_DOC_ROOT)]
    pub root: PathBuf,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub doc_root: PathBuf,
    pub idle_timeout: Duration,
}

impl Config {
    /// Parses the process arguments. Exits with usage on a missing or
    /// malformed port.
    pub fn load() -> Self {
        Self::from_args(CliArgs::parse())
    }

    pub fn from_args(args: CliArgs) -> Self {
        Self {
            port: args.port,
            doc_root: args.root,
            idle_timeout: IDLE_TIMEOUT,
        }
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
