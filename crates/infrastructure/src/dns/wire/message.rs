use super::name::decode_name;
use super::record::write_record;
use ferrous_ns_domain::{
    DomainError, HeaderFlags, Message, Query, ResourceRecord, ResponseCode,
};

pub const HEADER_LEN: usize = 12;

/// Bytes skipped after each question's type and class.
const QUESTION_TRAILER_LEN: usize = 8;

fn read_u16(buf: &[u8], offset: usize) -> Result<u16, DomainError> {
    buf.get(offset..offset + 2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
        .ok_or_else(|| {
            DomainError::MalformedMessage(format!(
                "message of {} bytes truncated at offset {}",
                buf.len(),
                offset
            ))
        })
}

/// Decodes the header and question section of a request.
///
/// Answer, authority and additional sections are never read.
pub fn decode_message(buf: &[u8]) -> Result<Message, DomainError> {
    if buf.len() < HEADER_LEN {
        return Err(DomainError::MalformedMessage(format!(
            "message of {} bytes is shorter than the {} byte header",
            buf.len(),
            HEADER_LEN
        )));
    }

    let id = read_u16(buf, 0)?;
    let flags = HeaderFlags::from_bits(read_u16(buf, 2)?);
    let qdcount = read_u16(buf, 4)?;

    let mut queries = Vec::with_capacity(usize::from(qdcount).min(8));
    let mut offset = HEADER_LEN;
    for _ in 0..qdcount {
        let (query, next) = decode_query(buf, offset)?;
        queries.push(query);
        offset = next;
    }

    Ok(Message::new(id, flags, queries))
}

/// Decodes one question at `offset`, returning it with the offset of the
/// next one.
pub fn decode_query(buf: &[u8], offset: usize) -> Result<(Query, usize), DomainError> {
    let (name, offset) = decode_name(buf, offset)?;
    let qtype = read_u16(buf, offset)?;
    let qclass = read_u16(buf, offset + 2)?;
    Ok((
        Query::new(name, qtype, qclass),
        offset + 4 + QUESTION_TRAILER_LEN,
    ))
}

/// Builds a response: no question section, then every answer followed by
/// every authority record. Additional count is always zero.
pub fn encode_response(
    id: u16,
    flags: HeaderFlags,
    answers: &[ResourceRecord],
    authority: &[ResourceRecord],
) -> Result<Vec<u8>, DomainError> {
    let ancount = section_count(answers, "answer")?;
    let nscount = section_count(authority, "authority")?;

    let mut out = Vec::with_capacity(512);
    write_header(&mut out, id, flags, ancount, nscount);
    for record in answers.iter().chain(authority) {
        write_record(&mut out, record)?;
    }

    Ok(out)
}

/// Header-only response with QR, RD and RA set and the given status.
pub fn encode_error_response(id: u16, status: ResponseCode) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN);
    write_header(&mut out, id, HeaderFlags::response(status, false), 0, 0);
    out
}

fn section_count(records: &[ResourceRecord], section: &str) -> Result<u16, DomainError> {
    u16::try_from(records.len()).map_err(|_| {
        DomainError::InvalidRecordData(format!(
            "{} records do not fit the {} section",
            records.len(),
            section
        ))
    })
}

fn write_header(out: &mut Vec<u8>, id: u16, flags: HeaderFlags, ancount: u16, nscount: u16) {
    out.extend_from_slice(&id.to_be_bytes());
    out.extend_from_slice(&flags.bits().to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
    out.extend_from_slice(&ancount.to_be_bytes());
    out.extend_from_slice(&nscount.to_be_bytes());
    out.extend_from_slice(&0u16.to_be_bytes());
}
