mod parser;
mod store;

pub use parser::ZoneFileParser;
pub use store::InMemoryZoneStore;
