use crate::ports::{UpstreamResolver, ZoneStore};
use ferrous_ns_domain::{
    DomainName, HeaderFlags, Message, Query, RData, RecordType, ResourceRecord, ResponseCode,
    UpstreamRecord,
};
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, warn};

/// TTL given to fabricated MITM answers.
pub const SPOOF_TTL: u32 = 60;

/// Preference given to fabricated MITM MX answers.
pub const SPOOF_MX_PREFERENCE: u16 = 10;

/// Immutable answer-source configuration shared by every request.
#[derive(Clone, Default)]
pub struct ResolutionContext {
    pub zone_store: Option<Arc<dyn ZoneStore>>,
    pub mitm: Option<Ipv4Addr>,
}

impl ResolutionContext {
    pub fn new(zone_store: Option<Arc<dyn ZoneStore>>, mitm: Option<Ipv4Addr>) -> Self {
        Self { zone_store, mitm }
    }
}

/// Outcome of resolving every question of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub status: ResponseCode,
    /// At least one question was answered from the zone store.
    pub authoritative: bool,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
}

impl Resolution {
    pub fn response_flags(&self) -> HeaderFlags {
        HeaderFlags::response(self.status, self.authoritative)
    }

    /// Folds one question's status into the response status: the first
    /// question that did not succeed decides the RCODE.
    fn record_status(&mut self, status: ResponseCode) {
        if self.status.is_success() {
            self.status = status;
        }
    }
}

pub struct ResolveQueryUseCase {
    context: ResolutionContext,
    upstream: Arc<dyn UpstreamResolver>,
}

impl ResolveQueryUseCase {
    pub fn new(context: ResolutionContext, upstream: Arc<dyn UpstreamResolver>) -> Self {
        Self { context, upstream }
    }

    pub async fn execute(&self, request: &Message) -> Resolution {
        let mut resolution = Resolution::default();

        for query in &request.queries {
            let status = self.resolve_one(query, &mut resolution).await;
            debug!(
                id = request.id,
                name = %query.name,
                qtype = query.qtype,
                status = %status,
                "Query resolved"
            );
            resolution.record_status(status);
        }

        resolution
    }

    async fn resolve_one(&self, query: &Query, resolution: &mut Resolution) -> ResponseCode {
        let Some(record_type) = query.record_type() else {
            debug!(name = %query.name, qtype = query.qtype, "Unsupported query type");
            return ResponseCode::NotImp;
        };

        if self.context.mitm.is_none() {
            if let Some(records) = self.lookup_zone(&query.name, record_type) {
                resolution.authoritative = true;
                for record in records {
                    if record.record_type() == RecordType::SOA {
                        resolution.authority.push(record.clone());
                    } else {
                        resolution.answers.push(record.clone());
                    }
                }
                return ResponseCode::NoError;
            }
        }

        if let Some(addr) = self.context.mitm {
            if let Some(record) = spoof(query, record_type, addr) {
                debug!(name = %query.name, record_type = %record_type, addr = %addr, "Spoofed answer");
                resolution.answers.push(record);
                return ResponseCode::NoError;
            }
        }

        self.resolve_upstream(query, record_type, resolution).await
    }

    fn lookup_zone(&self, name: &DomainName, record_type: RecordType) -> Option<&[ResourceRecord]> {
        self.context
            .zone_store
            .as_ref()?
            .lookup(name, record_type)
            .filter(|records| !records.is_empty())
    }

    async fn resolve_upstream(
        &self,
        query: &Query,
        record_type: RecordType,
        resolution: &mut Resolution,
    ) -> ResponseCode {
        match self
            .upstream
            .resolve(&query.name, record_type, query.qclass)
            .await
        {
            Ok(answer) => {
                resolution.answers.extend(convert_records(&answer.answers));
                resolution.authority.extend(convert_records(&answer.authority));
                answer.status
            }
            Err(e) => {
                warn!(name = %query.name, record_type = %record_type, error = %e, "Upstream resolution failed");
                ResponseCode::ServFail
            }
        }
    }
}

fn spoof(query: &Query, record_type: RecordType, addr: Ipv4Addr) -> Option<ResourceRecord> {
    let rdata = match record_type {
        RecordType::A => RData::A(addr),
        RecordType::MX => RData::Mx {
            preference: SPOOF_MX_PREFERENCE,
            exchange: query.name.clone(),
        },
        RecordType::SOA => return None,
    };
    Some(ResourceRecord::new(query.name.clone(), SPOOF_TTL, rdata).with_class(query.qclass))
}

/// Records the server cannot represent are dropped, not fatal.
fn convert_records(records: &[UpstreamRecord]) -> Vec<ResourceRecord> {
    records
        .iter()
        .filter_map(|record| match ResourceRecord::from_upstream(record) {
            Ok(converted) => Some(converted),
            Err(e) => {
                warn!(
                    name = %record.name,
                    rtype = record.rtype,
                    error = %e,
                    "Dropping upstream record"
                );
                None
            }
        })
        .collect()
}
