//! Ferrous NS Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_name;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{HeaderFlags, Message, Query, ResponseCode};
pub use dns_name::DomainName;
pub use dns_record::{RData, RecordType, ResourceRecord, UpstreamRecord, CLASS_IN};
pub use errors::DomainError;
