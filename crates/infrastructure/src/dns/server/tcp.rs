use super::handler::DnsRequestHandler;
use super::socket::bind_tcp_listener;
use ferrous_ns_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, error, info, warn};

/// How long a connection may take to deliver its request.
const READ_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TcpListener {
    listener: tokio::net::TcpListener,
    handler: DnsRequestHandler,
}

impl TcpListener {
    pub fn bind(addr: SocketAddr, handler: DnsRequestHandler) -> Result<Self, DomainError> {
        let listener = bind_tcp_listener(addr)?;
        Ok(Self { listener, handler })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts connections until the future is dropped. One request and
    /// one response per connection.
    pub async fn run(self) {
        if let Ok(addr) = self.local_addr() {
            info!(bind_address = %addr, "TCP listener ready");
        }

        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    error!(error = %e, "TCP accept error");
                    continue;
                }
            };

            let handler = self.handler.clone();
            tokio::spawn(async move {
                handle_connection(stream, peer, handler).await;
            });
        }
    }
}

async fn handle_connection(mut stream: TcpStream, peer: SocketAddr, handler: DnsRequestHandler) {
    let request = match tokio::time::timeout(READ_TIMEOUT, read_frame(&mut stream)).await {
        Ok(Ok(request)) => request,
        Ok(Err(e)) => {
            warn!(peer = %peer, error = %e, "Dropping TCP connection");
            return;
        }
        Err(_) => {
            debug!(peer = %peer, "Timeout waiting for TCP request");
            return;
        }
    };

    if let Some(response) = handler.handle(&request).await {
        if let Err(e) = write_frame(&mut stream, &response).await {
            warn!(peer = %peer, error = %e, "Failed to send TCP response");
        }
    }

    let _ = stream.shutdown().await;
}

/// Reads one message framed by a 2-byte big-endian length prefix.
pub async fn read_frame<S>(stream: &mut S) -> Result<Vec<u8>, DomainError>
where
    S: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 2];
    let received = read_until_full(stream, &mut len_buf).await?;
    if received < len_buf.len() {
        return Err(DomainError::Framing(format!(
            "Truncated TCP length prefix: {} of 2 bytes",
            received
        )));
    }

    let declared = usize::from(u16::from_be_bytes(len_buf));
    if declared == 0 {
        return Err(DomainError::Framing(
            "Wrong size of TCP packet: declared length is zero".to_string(),
        ));
    }

    let mut payload = vec![0u8; declared];
    let received = read_until_full(stream, &mut payload).await?;
    if received < declared {
        return Err(DomainError::Framing(format!(
            "Too big TCP packet: declared {} bytes, received {}",
            declared, received
        )));
    }

    // One request per connection: anything already queued behind the
    // declared payload means the prefix understated the message.
    let mut extra = [0u8; 1];
    if let Ok(Ok(n)) = tokio::time::timeout(Duration::ZERO, stream.read(&mut extra)).await {
        if n > 0 {
            return Err(DomainError::Framing(format!(
                "Wrong size of TCP packet: declared {} bytes, more data follows",
                declared
            )));
        }
    }

    Ok(payload)
}

/// Writes `payload` behind its 2-byte big-endian length.
pub async fn write_frame<S>(stream: &mut S, payload: &[u8]) -> Result<(), DomainError>
where
    S: AsyncWrite + Unpin,
{
    let length = u16::try_from(payload.len()).map_err(|_| {
        DomainError::Framing(format!(
            "Response of {} bytes does not fit a TCP frame",
            payload.len()
        ))
    })?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(|e| DomainError::Framing(format!("Failed to write length prefix: {}", e)))?;
    stream
        .write_all(payload)
        .await
        .map_err(|e| DomainError::Framing(format!("Failed to write DNS message: {}", e)))?;
    stream
        .flush()
        .await
        .map_err(|e| DomainError::Framing(format!("Failed to flush stream: {}", e)))?;

    Ok(())
}

/// Like `read_exact`, but reports how much arrived before end of stream.
async fn read_until_full<S>(stream: &mut S, buf: &mut [u8]) -> Result<usize, DomainError>
where
    S: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buf.len() {
        let n = stream
            .read(&mut buf[filled..])
            .await
            .map_err(|e| DomainError::Framing(format!("Failed to read TCP stream: {}", e)))?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
