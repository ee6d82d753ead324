#![allow(dead_code)]
use async_trait::async_trait;
use ferrous_ns_application::ports::{UpstreamAnswer, UpstreamResolver};
use ferrous_ns_domain::{DomainError, DomainName, RecordType, ResponseCode, UpstreamRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Upstream that answers A queries from a fixed table and NXDOMAIN
/// otherwise.
#[derive(Default)]
pub struct StaticUpstream {
    addresses: Mutex<HashMap<String, String>>,
    calls: AtomicUsize,
}

impl StaticUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_a(self, name: &str, addr: &str) -> Self {
        self.addresses
            .lock()
            .unwrap()
            .insert(name.trim_end_matches('.').to_lowercase(), addr.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamResolver for StaticUpstream {
    async fn resolve(
        &self,
        name: &DomainName,
        record_type: RecordType,
        class: u16,
    ) -> Result<UpstreamAnswer, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let key = name.to_string().trim_end_matches('.').to_lowercase();
        let addresses = self.addresses.lock().unwrap();

        match (record_type, addresses.get(&key)) {
            (RecordType::A, Some(addr)) => {
                let mut answer = UpstreamAnswer::new(ResponseCode::NoError);
                answer
                    .answers
                    .push(UpstreamRecord::new(name.to_string(), 1, class, 120, addr.clone()));
                Ok(answer)
            }
            _ => Ok(UpstreamAnswer::new(ResponseCode::NxDomain)),
        }
    }
}
