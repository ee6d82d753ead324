use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Malformed DNS message: {0}")]
    MalformedMessage(String),

    #[error("TCP framing error: {0}")]
    Framing(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(u16),

    #[error("Upstream resolver failure: {0}")]
    UpstreamFailure(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record data: {0}")]
    InvalidRecordData(String),

    #[error("Zone load error: {0}")]
    ZoneLoad(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DomainError {
    fn from(e: std::io::Error) -> Self {
        DomainError::Io(e.to_string())
    }
}
