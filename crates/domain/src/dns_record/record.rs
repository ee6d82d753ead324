use super::{RData, RecordType, UpstreamRecord, CLASS_IN};
use crate::{DomainError, DomainName};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: DomainName,

    pub class: u16,

    pub ttl: u32,

    pub rdata: RData,
}

impl ResourceRecord {
    pub fn new(name: DomainName, ttl: u32, rdata: RData) -> Self {
        Self {
            name,
            class: CLASS_IN,
            ttl,
            rdata,
        }
    }

    pub fn with_class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    pub fn record_type(&self) -> RecordType {
        self.rdata.record_type()
    }

    /// Converts an upstream text record into a typed record.
    ///
    /// Fails with [`DomainError::UnsupportedRecordType`] for anything other
    /// than A, MX or SOA (for example a CNAME in a recursive answer).
    pub fn from_upstream(record: &UpstreamRecord) -> Result<Self, DomainError> {
        let rdata = RData::from_text(record.rtype, &record.data)?;
        let name = DomainName::from_text(&record.name)?;
        Ok(Self {
            name,
            class: record.class,
            ttl: record.ttl,
            rdata,
        })
    }
}
