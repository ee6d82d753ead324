pub mod rdata;
pub mod record;
pub mod record_type;
pub mod upstream;

pub use rdata::RData;
pub use record::ResourceRecord;
pub use record_type::RecordType;
pub use upstream::UpstreamRecord;

/// The Internet class; the only one this server ever synthesizes.
pub const CLASS_IN: u16 = 1;
