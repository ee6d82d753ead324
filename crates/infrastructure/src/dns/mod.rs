pub mod server;
pub mod upstream;
pub mod wire;
pub mod zone;

pub use server::{DnsRequestHandler, TcpListener, UdpListener};
pub use upstream::DohJsonResolver;
pub use zone::{InMemoryZoneStore, ZoneFileParser};
