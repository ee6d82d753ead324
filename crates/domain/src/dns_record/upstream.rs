/// A record as reported by the upstream resolver: owner name, type code,
/// class, TTL and the presentation-format rdata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRecord {
    pub name: String,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub data: String,
}

impl UpstreamRecord {
    pub fn new(
        name: impl Into<String>,
        rtype: u16,
        class: u16,
        ttl: u32,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            rtype,
            class,
            ttl,
            data: data.into(),
        }
    }
}
