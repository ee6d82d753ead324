use ferrous_ns_domain::dns_name::MAX_NAME_LEN;
use ferrous_ns_domain::{DomainError, DomainName};

const POINTER_TAG: u8 = 0xC0;
const LABEL_TAG_MASK: u8 = 0xC0;

/// Upper bound on compression pointers followed while decoding one name.
const MAX_POINTER_HOPS: usize = 128;

/// Decodes the name starting at `offset`.
///
/// Returns the name and the offset of the first byte after it in the
/// original position, i.e. just past the terminating zero or past the
/// first compression pointer.
///
/// Every pointer must target an offset strictly before the previous
/// pointer target (the first one strictly before itself), which makes the
/// loop terminate on any input. Extended label types (`01`, `10`) are
/// rejected.
pub fn decode_name(buf: &[u8], offset: usize) -> Result<(DomainName, usize), DomainError> {
    let mut labels: Vec<&[u8]> = Vec::new();
    let mut wire_len = 1usize;
    let mut pos = offset;
    let mut limit = usize::MAX;
    let mut hops = 0usize;
    let mut resume_at: Option<usize> = None;

    loop {
        let len_byte = *buf.get(pos).ok_or_else(|| {
            DomainError::MalformedMessage(format!("name truncated at offset {}", pos))
        })?;

        match len_byte & LABEL_TAG_MASK {
            0x00 => {
                let label_len = len_byte as usize;
                if label_len == 0 {
                    pos += 1;
                    break;
                }

                let start = pos + 1;
                let label = buf.get(start..start + label_len).ok_or_else(|| {
                    DomainError::MalformedMessage(format!(
                        "label of {} bytes at offset {} runs past end of message",
                        label_len, pos
                    ))
                })?;

                wire_len += 1 + label_len;
                if wire_len > MAX_NAME_LEN {
                    return Err(DomainError::MalformedMessage(format!(
                        "name at offset {} exceeds {} bytes",
                        offset, MAX_NAME_LEN
                    )));
                }

                labels.push(label);
                pos = start + label_len;
            }
            POINTER_TAG => {
                let low = *buf.get(pos + 1).ok_or_else(|| {
                    DomainError::MalformedMessage(format!(
                        "compression pointer truncated at offset {}",
                        pos
                    ))
                })?;
                let target = (usize::from(len_byte & !LABEL_TAG_MASK) << 8) | usize::from(low);

                if target >= limit.min(pos) {
                    return Err(DomainError::MalformedMessage(format!(
                        "compression pointer at offset {} targets {}, not strictly backwards",
                        pos, target
                    )));
                }

                hops += 1;
                if hops > MAX_POINTER_HOPS {
                    return Err(DomainError::MalformedMessage(format!(
                        "more than {} compression pointers in one name",
                        MAX_POINTER_HOPS
                    )));
                }

                resume_at.get_or_insert(pos + 2);
                limit = target;
                pos = target;
            }
            tag => {
                return Err(DomainError::MalformedMessage(format!(
                    "unsupported label type {:#04x} at offset {}",
                    tag, pos
                )));
            }
        }
    }

    let name = DomainName::from_labels(labels.into_iter().map(<[u8]>::to_vec))
        .map_err(|e| DomainError::MalformedMessage(e.to_string()))?;

    Ok((name, resume_at.unwrap_or(pos)))
}

/// Uncompressed wire form of `name`, lower-cased when `canonical`.
pub fn encode_name(name: &DomainName, canonical: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(name.wire_len());
    write_name(&mut out, name, canonical);
    out
}

pub fn write_name(out: &mut Vec<u8>, name: &DomainName, canonical: bool) {
    for label in name.labels() {
        out.push(label.len() as u8);
        if canonical {
            out.extend(label.iter().map(u8::to_ascii_lowercase));
        } else {
            out.extend_from_slice(label);
        }
    }
    out.push(0);
}
