use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// Maximum length of a single label (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Maximum length of a name in wire format, including length octets and
/// the terminating root label.
pub const MAX_NAME_LEN: usize = 255;

/// Bytes rendered verbatim in the text form; everything else is `\DDD`.
const PRINTABLE: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-*+";

/// A domain name as an ordered list of labels.
///
/// The terminating root label is implicit: `labels` never contains an empty
/// entry and the root name has no labels at all. Equality is exact
/// (byte-for-byte); use [`DomainName::to_lowercase`] for case-insensitive
/// keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DomainName {
    labels: Vec<Box<[u8]>>,
}

impl DomainName {
    pub fn root() -> Self {
        Self { labels: Vec::new() }
    }

    /// Builds a name from raw labels, enforcing the label and total length
    /// limits.
    pub fn from_labels<I, L>(labels: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut collected: Vec<Box<[u8]>> = Vec::new();
        let mut wire_len = 1;

        for label in labels {
            let label: Vec<u8> = label.into();
            if label.is_empty() {
                return Err(DomainError::InvalidDomainName(
                    "empty label inside name".to_string(),
                ));
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "label of {} bytes exceeds {} byte limit",
                    label.len(),
                    MAX_LABEL_LEN
                )));
            }
            wire_len += 1 + label.len();
            if wire_len > MAX_NAME_LEN {
                return Err(DomainError::InvalidDomainName(format!(
                    "name exceeds {} bytes in wire format",
                    MAX_NAME_LEN
                )));
            }
            collected.push(label.into_boxed_slice());
        }

        Ok(Self { labels: collected })
    }

    /// Parses the textual form (`www.example.com`, `www.example.com.` or
    /// `.`). Names are always treated as fully qualified.
    pub fn from_text(text: &str) -> Result<Self, DomainError> {
        Self::parse_text(text).map(|(name, _)| name)
    }

    /// Also reports whether the text ended with an unescaped dot.
    fn parse_text(text: &str) -> Result<(Self, bool), DomainError> {
        if text == "." {
            return Ok((Self::root(), true));
        }
        if text.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "empty name".to_string(),
            ));
        }
        let (labels, absolute) = split_labels(text)?;
        Ok((Self::from_labels(labels)?, absolute))
    }

    /// Parses a name as written in a zone file: `@` is the origin, a name
    /// with a trailing dot is absolute, anything else is relative to
    /// `origin`.
    pub fn from_text_relative(text: &str, origin: &DomainName) -> Result<Self, DomainError> {
        if text == "@" {
            return Ok(origin.clone());
        }
        let (name, absolute) = Self::parse_text(text)?;
        if absolute {
            Ok(name)
        } else {
            name.join(origin)
        }
    }

    /// Appends `suffix` below this name.
    pub fn join(&self, suffix: &DomainName) -> Result<Self, DomainError> {
        Self::from_labels(
            self.labels
                .iter()
                .chain(suffix.labels.iter())
                .map(|l| l.to_vec()),
        )
    }

    pub fn labels(&self) -> impl Iterator<Item = &[u8]> {
        self.labels.iter().map(|l| l.as_ref())
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn is_root(&self) -> bool {
        self.labels.is_empty()
    }

    /// Length of the uncompressed wire encoding.
    pub fn wire_len(&self) -> usize {
        1 + self.labels.iter().map(|l| 1 + l.len()).sum::<usize>()
    }

    pub fn to_lowercase(&self) -> Self {
        Self {
            labels: self
                .labels
                .iter()
                .map(|l| l.to_ascii_lowercase().into_boxed_slice())
                .collect(),
        }
    }

    pub fn eq_ignore_case(&self, other: &DomainName) -> bool {
        self.labels.len() == other.labels.len()
            && self
                .labels
                .iter()
                .zip(other.labels.iter())
                .all(|(a, b)| a.eq_ignore_ascii_case(b))
    }
}

/// Splits escaped text into raw labels. The flag is set when the last
/// character was an unescaped dot.
fn split_labels(text: &str) -> Result<(Vec<Vec<u8>>, bool), DomainError> {
    let bytes = text.as_bytes();
    let mut labels = Vec::new();
    let mut current = Vec::new();
    let mut i = 0;
    let mut absolute = false;

    while i < bytes.len() {
        absolute = bytes[i] == b'.';
        match bytes[i] {
            b'.' => {
                if current.is_empty() {
                    return Err(DomainError::InvalidDomainName(format!(
                        "empty label in '{}'",
                        text
                    )));
                }
                labels.push(std::mem::take(&mut current));
                i += 1;
            }
            b'\\' => {
                let rest = &bytes[i + 1..];
                if rest.len() >= 3 && rest[..3].iter().all(u8::is_ascii_digit) {
                    let value = rest[..3]
                        .iter()
                        .fold(0u16, |acc, d| acc * 10 + u16::from(d - b'0'));
                    let byte = u8::try_from(value).map_err(|_| {
                        DomainError::InvalidDomainName(format!(
                            "escape \\{} out of range in '{}'",
                            value, text
                        ))
                    })?;
                    current.push(byte);
                    i += 4;
                } else if let Some(&escaped) = rest.first() {
                    current.push(escaped);
                    i += 2;
                } else {
                    return Err(DomainError::InvalidDomainName(format!(
                        "dangling escape in '{}'",
                        text
                    )));
                }
            }
            c => {
                current.push(c);
                i += 1;
            }
        }
    }

    if !current.is_empty() {
        labels.push(current);
    }
    Ok((labels, absolute))
}

impl fmt::Display for DomainName {
    /// Fully qualified, escaped text form. The root name renders as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.labels.is_empty() {
            return f.write_str(".");
        }
        for label in &self.labels {
            for &b in label.iter() {
                if PRINTABLE.contains(&b) {
                    write!(f, "{}", b as char)?;
                } else {
                    write!(f, "\\{:03}", b)?;
                }
            }
            f.write_str(".")?;
        }
        Ok(())
    }
}

impl FromStr for DomainName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_text_form() {
        assert_eq!(DomainName::root().to_string(), ".");
        assert!(DomainName::from_text(".").unwrap().is_root());
    }

    #[test]
    fn test_trailing_dot_is_optional() {
        let a = DomainName::from_text("example.com").unwrap();
        let b = DomainName::from_text("example.com.").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "example.com.");
    }

    #[test]
    fn test_escape_roundtrip() {
        let name = DomainName::from_labels(vec![b"a.b".to_vec(), b"c d".to_vec()]).unwrap();
        let text = name.to_string();
        assert_eq!(text, "a\\046b.c\\032d.");
        assert_eq!(DomainName::from_text(&text).unwrap(), name);
    }

    #[test]
    fn test_wire_len() {
        let name = DomainName::from_text("www.example.com").unwrap();
        assert_eq!(name.wire_len(), 17);
        assert_eq!(DomainName::root().wire_len(), 1);
    }
}
