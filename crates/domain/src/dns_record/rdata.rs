use super::RecordType;
use crate::{DomainError, DomainName};
use std::net::Ipv4Addr;

/// Typed record data for the supported record types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RData {
    A(Ipv4Addr),
    Mx {
        preference: u16,
        exchange: DomainName,
    },
    Soa {
        mname: DomainName,
        rname: DomainName,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
}

impl RData {
    pub fn record_type(&self) -> RecordType {
        match self {
            RData::A(_) => RecordType::A,
            RData::Mx { .. } => RecordType::MX,
            RData::Soa { .. } => RecordType::SOA,
        }
    }

    /// Parses presentation-format rdata for a raw type code, as returned by
    /// the upstream resolver. Embedded names are taken as fully qualified.
    pub fn from_text(rtype: u16, text: &str) -> Result<Self, DomainError> {
        let record_type =
            RecordType::from_code(rtype).ok_or(DomainError::UnsupportedRecordType(rtype))?;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        Self::from_tokens(record_type, &tokens, &DomainName::root())
    }

    /// Parses already tokenized rdata. Relative names are completed with
    /// `origin`.
    pub fn from_tokens(
        record_type: RecordType,
        tokens: &[&str],
        origin: &DomainName,
    ) -> Result<Self, DomainError> {
        match record_type {
            RecordType::A => {
                let [addr] = expect_tokens::<1>(record_type, tokens)?;
                let addr = addr.parse::<Ipv4Addr>().map_err(|e| {
                    DomainError::InvalidRecordData(format!("A address '{}': {}", addr, e))
                })?;
                Ok(RData::A(addr))
            }
            RecordType::MX => {
                let [preference, exchange] = expect_tokens::<2>(record_type, tokens)?;
                Ok(RData::Mx {
                    preference: parse_number(preference, "MX preference")?,
                    exchange: DomainName::from_text_relative(exchange, origin)?,
                })
            }
            RecordType::SOA => {
                let [mname, rname, serial, refresh, retry, expire, minimum] =
                    expect_tokens::<7>(record_type, tokens)?;
                Ok(RData::Soa {
                    mname: DomainName::from_text_relative(mname, origin)?,
                    rname: DomainName::from_text_relative(rname, origin)?,
                    serial: parse_number(serial, "SOA serial")?,
                    refresh: parse_number(refresh, "SOA refresh")?,
                    retry: parse_number(retry, "SOA retry")?,
                    expire: parse_number(expire, "SOA expire")?,
                    minimum: parse_number(minimum, "SOA minimum")?,
                })
            }
        }
    }
}

fn expect_tokens<'a, const N: usize>(
    record_type: RecordType,
    tokens: &[&'a str],
) -> Result<[&'a str; N], DomainError> {
    <[&str; N]>::try_from(tokens).map_err(|_| {
        DomainError::InvalidRecordData(format!(
            "{} rdata expects {} fields, got {}",
            record_type,
            N,
            tokens.len()
        ))
    })
}

fn parse_number<T: std::str::FromStr>(token: &str, field: &str) -> Result<T, DomainError>
where
    T::Err: std::fmt::Display,
{
    token
        .parse::<T>()
        .map_err(|e| DomainError::InvalidRecordData(format!("{} '{}': {}", field, token, e)))
}
