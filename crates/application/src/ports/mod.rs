mod upstream_resolver;
mod zone_store;

pub use upstream_resolver::{UpstreamAnswer, UpstreamResolver};
pub use zone_store::ZoneStore;
