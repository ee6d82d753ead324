mod handler;
mod socket;
mod tcp;
mod udp;

pub use handler::DnsRequestHandler;
pub use socket::{bind_tcp_listener, bind_udp_socket};
pub use tcp::{read_frame, write_frame, TcpListener};
pub use udp::{UdpListener, MAX_UDP_MESSAGE_SIZE};
