//! Line-oriented UDP echo client.
//!
//! Sends each stdin line as one datagram to `<host>:<port>` and prints the
//! single reply received for it.

use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::UdpSocket;
use tracing::error;

const RECV_BUFFER_SIZE: usize = 4096;

const EXIT_CONNECT_FAILED: u8 = 3;
const EXIT_PREMATURE_TERMINATION: u8 = 4;

#[derive(Parser, Debug)]
#[command(name = "udp_echo_client")]
#[command(about = "Sends stdin lines to a UDP echo server", long_about = None)]
struct Args {
    /// Server host name or address
    host: String,

    /// Server UDP port
    port: u16,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let socket = match connect(&args.host, args.port).await {
        Ok(socket) => socket,
        Err(e) => {
            error!(
                host = %args.host,
                port = args.port,
                error = %e,
                "Problem in connecting to the server"
            );
            return ExitCode::from(EXIT_CONNECT_FAILED);
        }
    };

    let input = BufReader::new(tokio::io::stdin());
    let mut output = tokio::io::stdout();

    match echo_lines(&socket, input, &mut output).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Echo failed");
            ExitCode::from(e.exit_code())
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum EchoError {
    #[error("the server terminated prematurely")]
    PrematureTermination,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl EchoError {
    fn exit_code(&self) -> u8 {
        match self {
            EchoError::PrematureTermination => EXIT_PREMATURE_TERMINATION,
            EchoError::Io(_) => 1,
        }
    }
}

async fn connect(host: &str, port: u16) -> anyhow::Result<UdpSocket> {
    let addr = tokio::net::lookup_host((host, port))
        .await?
        .next()
        .ok_or_else(|| anyhow::anyhow!("no such host as {}", host))?;

    let local = if addr.is_ipv4() { "0.0.0.0:0" } else { "[::]:0" };
    let socket = UdpSocket::bind(local).await?;
    socket.connect(addr).await?;
    Ok(socket)
}

/// Sends each input line, terminator included and bytes unchanged, then
/// writes the one reply received for it. A final line without a newline is
/// sent as is.
async fn echo_lines<R, W>(socket: &UdpSocket, mut input: R, output: &mut W) -> Result<(), EchoError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = Vec::new();
    let mut reply = [0u8; RECV_BUFFER_SIZE];

    loop {
        line.clear();
        if input.read_until(b'\n', &mut line).await? == 0 {
            break;
        }

        socket.send(&line).await?;

        let n = socket.recv(&mut reply).await?;
        if n == 0 {
            return Err(EchoError::PrematureTermination);
        }

        output.write_all(b"String received from the server: ").await?;
        output.write_all(&reply[..n]).await?;
        output.flush().await?;
    }

    Ok(())
}
