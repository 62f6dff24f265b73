use std::net::SocketAddr;
use std::time::Duration;

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Config;
use crate::http::connection::Connection;

/// Pending-connection queue length passed to `listen(2)`.
pub const LISTEN_BACKLOG: i32 = 5;

/// Pause after a failed accept, so persistent failures such as descriptor
/// exhaustion do not spin the loop.
pub const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// Binds the listening socket with `SO_REUSEADDR` so a restarted server can
/// rebind the port immediately.
///
/// Must be called from within a tokio runtime.
pub fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    let socket = Socket::new(
        match addr {
            SocketAddr::V4(_) => Domain::IPV4,
            SocketAddr::V6(_) => Domain::IPV6,
        },
        Type::STREAM,
        Some(Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;
    socket.set_nonblocking(true)?;

    let listener = TcpListener::from_std(socket.into())?;
    Ok(listener)
}

/// Accepts connections forever, spawning one task per connection.
///
/// Accept failures are logged and do not stop the loop.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!(error = %e, "Accept failed");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!(%peer, "Accepted connection");

        let doc_root = cfg.doc_root.clone();
        let idle_timeout = cfg.idle_timeout;
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, doc_root, idle_timeout);
            if let Err(e) = conn.run().await {
                error!(%peer, error = %e, "Connection error");
            }
        });
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg.listen_addr())?;
    info!("Listening on {}", listener.local_addr()?);

    serve(listener, cfg).await
}
