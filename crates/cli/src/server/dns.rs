use ferrous_ns_infrastructure::dns::{DnsRequestHandler, TcpListener, UdpListener};
use std::net::SocketAddr;
use tracing::info;

/// Binds UDP and TCP on the same address and serves until cancelled.
pub async fn start_dns_server(bind_addr: &str, handler: DnsRequestHandler) -> anyhow::Result<()> {
    let socket_addr: SocketAddr = bind_addr.parse()?;

    info!(bind_address = %socket_addr, "Starting DNS server");

    let udp = UdpListener::bind(socket_addr, handler.clone())?;
    let tcp = TcpListener::bind(socket_addr, handler)?;

    info!("DNS server ready on {} (UDP and TCP)", socket_addr);

    tokio::join!(udp.run(), tcp.run());
    Ok(())
}
