use super::parser::ZoneFileParser;
use ferrous_ns_application::ports::ZoneStore;
use ferrous_ns_domain::{DomainError, DomainName, RecordType, ResourceRecord};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// Read-only record sets keyed by lower-cased owner name and type.
#[derive(Debug, Default)]
pub struct InMemoryZoneStore {
    records: HashMap<(DomainName, RecordType), Vec<ResourceRecord>>,
}

impl InMemoryZoneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = ResourceRecord>,
    {
        let mut store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Loads a master file with the root as initial origin.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DomainError::ZoneLoad(format!("failed to read {}: {}", path.display(), e))
        })?;

        let records = ZoneFileParser::new(DomainName::root()).parse(&contents)?;
        let store = Self::from_records(records);

        info!(
            path = %path.display(),
            rrsets = store.rrset_count(),
            records = store.record_count(),
            "Zone loaded"
        );

        Ok(store)
    }

    pub fn insert(&mut self, record: ResourceRecord) {
        let key = (record.name.to_lowercase(), record.record_type());
        let rrset = self.records.entry(key).or_default();
        if !rrset.contains(&record) {
            rrset.push(record);
        }
    }

    pub fn rrset_count(&self) -> usize {
        self.records.len()
    }

    pub fn record_count(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ZoneStore for InMemoryZoneStore {
    fn lookup(&self, name: &DomainName, record_type: RecordType) -> Option<&[ResourceRecord]> {
        self.records
            .get(&(name.to_lowercase(), record_type))
            .map(Vec::as_slice)
    }
}
