#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_ns_application::ports::{UpstreamAnswer, UpstreamResolver, ZoneStore};
use ferrous_ns_domain::{DomainError, DomainName, RecordType, ResourceRecord, ResponseCode};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
pub struct MockZoneStore {
    records: HashMap<(String, RecordType), Vec<ResourceRecord>>,
}

impl MockZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, name: &str, record_type: RecordType, records: Vec<ResourceRecord>) -> Self {
        let key = DomainName::from_text(name).unwrap().to_lowercase().to_string();
        self.records.insert((key, record_type), records);
        self
    }
}

impl ZoneStore for MockZoneStore {
    fn lookup(&self, name: &DomainName, record_type: RecordType) -> Option<&[ResourceRecord]> {
        self.records
            .get(&(name.to_lowercase().to_string(), record_type))
            .map(Vec::as_slice)
    }
}

#[derive(Clone)]
pub struct MockUpstreamResolver {
    responses: Arc<RwLock<HashMap<(String, RecordType), UpstreamAnswer>>>,
    error_responses: Arc<RwLock<HashMap<String, DomainError>>>,
    calls: Arc<RwLock<Vec<(String, RecordType, u16)>>>,
}

impl MockUpstreamResolver {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(RwLock::new(HashMap::new())),
            error_responses: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub fn set_response(&self, name: &str, record_type: RecordType, answer: UpstreamAnswer) {
        self.responses
            .write()
            .unwrap()
            .insert((normalize(name), record_type), answer);
    }

    pub fn set_response_error(&self, name: &str, error: DomainError) {
        self.error_responses
            .write()
            .unwrap()
            .insert(normalize(name), error);
    }

    pub fn calls(&self) -> Vec<(String, RecordType, u16)> {
        self.calls.read().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

impl Default for MockUpstreamResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(name: &str) -> String {
    DomainName::from_text(name).unwrap().to_lowercase().to_string()
}

#[async_trait]
impl UpstreamResolver for MockUpstreamResolver {
    async fn resolve(
        &self,
        name: &DomainName,
        record_type: RecordType,
        class: u16,
    ) -> Result<UpstreamAnswer, DomainError> {
        let key = name.to_lowercase().to_string();
        self.calls
            .write()
            .unwrap()
            .push((key.clone(), record_type, class));

        if let Some(err) = self.error_responses.read().unwrap().get(&key).cloned() {
            return Err(err);
        }

        Ok(self
            .responses
            .read()
            .unwrap()
            .get(&(key, record_type))
            .cloned()
            .unwrap_or_else(|| UpstreamAnswer::new(ResponseCode::NxDomain)))
    }
}
