use super::handler::DnsRequestHandler;
use super::socket::bind_udp_socket;
use ferrous_ns_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tracing::{debug, info, warn};

pub const MAX_UDP_MESSAGE_SIZE: usize = 4096;

pub struct UdpListener {
    socket: Arc<UdpSocket>,
    handler: DnsRequestHandler,
}

impl UdpListener {
    pub fn bind(addr: SocketAddr, handler: DnsRequestHandler) -> Result<Self, DomainError> {
        let socket = bind_udp_socket(addr)?;
        Ok(Self {
            socket: Arc::new(socket),
            handler,
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Serves datagrams until the future is dropped. Each request is
    /// handled on its own task.
    pub async fn run(self) {
        if let Ok(addr) = self.local_addr() {
            info!(bind_address = %addr, "UDP listener ready");
        }

        let mut recv_buf = [0u8; MAX_UDP_MESSAGE_SIZE];

        loop {
            let (len, peer) = match self.socket.recv_from(&mut recv_buf).await {
                Ok(received) => received,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    warn!(error = %e, "UDP recv error");
                    continue;
                }
            };

            let request: Arc<[u8]> = Arc::from(&recv_buf[..len]);
            let handler = self.handler.clone();
            let socket = self.socket.clone();

            tokio::spawn(async move {
                let Some(response) = handler.handle(&request).await else {
                    debug!(peer = %peer, len = request.len(), "Dropping runt datagram");
                    return;
                };
                if let Err(e) = socket.send_to(&response, peer).await {
                    warn!(peer = %peer, error = %e, "Failed to send UDP response");
                }
            });
        }
    }
}
