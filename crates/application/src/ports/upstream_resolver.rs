use async_trait::async_trait;
use ferrous_ns_domain::{DomainError, DomainName, RecordType, ResponseCode, UpstreamRecord};

/// What the upstream resolver reported for one question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamAnswer {
    pub status: ResponseCode,
    pub answers: Vec<UpstreamRecord>,
    /// Records from the AUTHORITY section (e.g. SOA for NXDOMAIN).
    pub authority: Vec<UpstreamRecord>,
}

impl UpstreamAnswer {
    pub fn new(status: ResponseCode) -> Self {
        Self {
            status,
            answers: Vec::new(),
            authority: Vec::new(),
        }
    }
}

#[async_trait]
pub trait UpstreamResolver: Send + Sync {
    async fn resolve(
        &self,
        name: &DomainName,
        record_type: RecordType,
        class: u16,
    ) -> Result<UpstreamAnswer, DomainError>;
}
