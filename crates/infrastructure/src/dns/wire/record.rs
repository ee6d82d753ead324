use super::name::write_name;
use ferrous_ns_domain::{DomainError, RData, ResourceRecord};

/// Serializes one resource record with an uncompressed owner name.
pub fn encode_record(record: &ResourceRecord) -> Result<Vec<u8>, DomainError> {
    let mut out = Vec::with_capacity(record.name.wire_len() + 32);
    write_record(&mut out, record)?;
    Ok(out)
}

pub(super) fn write_record(out: &mut Vec<u8>, record: &ResourceRecord) -> Result<(), DomainError> {
    write_name(out, &record.name, false);
    out.extend_from_slice(&record.record_type().code().to_be_bytes());
    out.extend_from_slice(&record.class.to_be_bytes());
    out.extend_from_slice(&record.ttl.to_be_bytes());

    let rdlength_at = out.len();
    out.extend_from_slice(&[0, 0]);

    match &record.rdata {
        RData::A(addr) => out.extend_from_slice(&addr.octets()),
        RData::Mx {
            preference,
            exchange,
        } => {
            out.extend_from_slice(&preference.to_be_bytes());
            write_name(out, exchange, false);
        }
        RData::Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => {
            write_name(out, mname, false);
            write_name(out, rname, false);
            for value in [serial, refresh, retry, expire, minimum] {
                out.extend_from_slice(&value.to_be_bytes());
            }
        }
    }

    let rdlength = u16::try_from(out.len() - rdlength_at - 2).map_err(|_| {
        DomainError::InvalidRecordData(format!("rdata for {} exceeds 65535 bytes", record.name))
    })?;
    out[rdlength_at..rdlength_at + 2].copy_from_slice(&rdlength.to_be_bytes());

    Ok(())
}
