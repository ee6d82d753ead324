use ferrous_ns_domain::{DomainName, RecordType, ResourceRecord};

/// Read-only authoritative data, loaded once before the listeners start.
///
/// Implementations must be safe for concurrent lookups without locking.
pub trait ZoneStore: Send + Sync {
    /// Records owned by `name` with the given type, or `None` when the
    /// store has nothing for that pair. Name matching is case-insensitive.
    fn lookup(&self, name: &DomainName, record_type: RecordType) -> Option<&[ResourceRecord]>;
}
