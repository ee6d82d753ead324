use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// How queries are answered.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResolutionConfig {
    /// Spoof every A and MX answer to this address.
    #[serde(default)]
    pub mitm: Option<Ipv4Addr>,

    /// Zone file served authoritatively.
    #[serde(default)]
    pub zone_file: Option<String>,
}
