use ferrous_ns_domain::{DomainError, DomainName, RData, RecordType, ResourceRecord, CLASS_IN};
use tracing::debug;

const CLASS_CH: u16 = 3;
const CLASS_HS: u16 = 4;

/// Parser for the subset of the RFC 1035 master file format the server
/// serves from: `$ORIGIN`, `$TTL`, `@`, blank owners, relative names,
/// TTL and class in either order, parenthesised continuation lines and
/// `;` comments.
///
/// Only A, MX and SOA records are produced. Other types are skipped.
pub struct ZoneFileParser {
    origin: DomainName,
    default_ttl: Option<u32>,
    last_ttl: Option<u32>,
    last_owner: Option<DomainName>,
}

struct Entry {
    line: usize,
    indented: bool,
    tokens: Vec<String>,
}

impl ZoneFileParser {
    pub fn new(origin: DomainName) -> Self {
        Self {
            origin,
            default_ttl: None,
            last_ttl: None,
            last_owner: None,
        }
    }

    pub fn parse(mut self, contents: &str) -> Result<Vec<ResourceRecord>, DomainError> {
        let mut records = Vec::new();

        for entry in split_entries(contents)? {
            let parsed = self
                .parse_entry(&entry)
                .map_err(|e| DomainError::ZoneLoad(format!("line {}: {}", entry.line, e)))?;
            if let Some(record) = parsed {
                records.push(record);
            }
        }

        Ok(records)
    }

    fn parse_entry(&mut self, entry: &Entry) -> Result<Option<ResourceRecord>, DomainError> {
        let mut rest = entry.tokens.as_slice();

        if !entry.indented {
            if let Some(directive) = rest.first().filter(|t| t.starts_with('$')) {
                self.apply_directive(directive, &rest[1..])?;
                return Ok(None);
            }
        }

        let owner = if entry.indented {
            self.last_owner
                .clone()
                .ok_or_else(|| DomainError::ZoneLoad("record without owner name".to_string()))?
        } else {
            let (first, tail) = split_first(rest, "owner name")?;
            rest = tail;
            DomainName::from_text_relative(first, &self.origin)?
        };
        self.last_owner = Some(owner.clone());

        let mut ttl = None;
        let mut class = None;
        while let Some((token, tail)) = rest.split_first() {
            if ttl.is_none() && token.starts_with(|c: char| c.is_ascii_digit()) {
                ttl = Some(parse_ttl(token)?);
            } else if let Some(code) = class.is_none().then(|| class_code(token)).flatten() {
                class = Some(code);
            } else {
                break;
            }
            rest = tail;
        }

        let (type_token, rdata_tokens) = split_first(rest, "record type")?;
        let Ok(record_type) = type_token.parse::<RecordType>() else {
            debug!(owner = %owner, rtype = %type_token, "Skipping unsupported zone record");
            return Ok(None);
        };

        let rdata_tokens: Vec<&str> = rdata_tokens.iter().map(String::as_str).collect();
        let rdata = RData::from_tokens(record_type, &rdata_tokens, &self.origin)?;

        let ttl = match ttl.or(self.default_ttl).or(self.last_ttl) {
            Some(ttl) => ttl,
            None => match &rdata {
                RData::Soa { minimum, .. } => *minimum,
                _ => {
                    return Err(DomainError::ZoneLoad(format!(
                        "no TTL for {} and no $TTL in effect",
                        owner
                    )))
                }
            },
        };
        self.last_ttl = Some(ttl);

        Ok(Some(
            ResourceRecord::new(owner, ttl, rdata).with_class(class.unwrap_or(CLASS_IN)),
        ))
    }

    fn apply_directive(&mut self, directive: &str, args: &[String]) -> Result<(), DomainError> {
        match directive.to_ascii_uppercase().as_str() {
            "$ORIGIN" => {
                let (name, _) = split_first(args, "$ORIGIN name")?;
                self.origin = DomainName::from_text_relative(name, &self.origin)?;
            }
            "$TTL" => {
                let (ttl, _) = split_first(args, "$TTL value")?;
                self.default_ttl = Some(parse_ttl(ttl)?);
            }
            other => {
                return Err(DomainError::ZoneLoad(format!(
                    "unsupported directive {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

fn split_first<'a>(
    tokens: &'a [String],
    what: &str,
) -> Result<(&'a str, &'a [String]), DomainError> {
    tokens
        .split_first()
        .map(|(first, tail)| (first.as_str(), tail))
        .ok_or_else(|| DomainError::ZoneLoad(format!("missing {}", what)))
}

fn class_code(token: &str) -> Option<u16> {
    match token.to_ascii_uppercase().as_str() {
        "IN" => Some(CLASS_IN),
        "CH" => Some(CLASS_CH),
        "HS" => Some(CLASS_HS),
        _ => None,
    }
}

/// Plain seconds, or BIND style units such as `1h30m` or `2d`.
fn parse_ttl(token: &str) -> Result<u32, DomainError> {
    if let Ok(seconds) = token.parse::<u32>() {
        return Ok(seconds);
    }

    let invalid = || DomainError::ZoneLoad(format!("invalid TTL '{}'", token));
    let mut total: u32 = 0;
    let mut value: Option<u32> = None;

    for c in token.chars() {
        if let Some(digit) = c.to_digit(10) {
            let next = value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit))
                .ok_or_else(invalid)?;
            value = Some(next);
            continue;
        }

        let unit = match c.to_ascii_lowercase() {
            's' => 1,
            'm' => 60,
            'h' => 3_600,
            'd' => 86_400,
            'w' => 604_800,
            _ => return Err(invalid()),
        };
        let amount = value.take().ok_or_else(invalid)?;
        total = amount
            .checked_mul(unit)
            .and_then(|v| total.checked_add(v))
            .ok_or_else(invalid)?;
    }

    if value.is_some() {
        return Err(invalid());
    }
    Ok(total)
}

/// Splits the file into logical entries, joining parenthesised lines and
/// dropping comments and blank lines.
fn split_entries(contents: &str) -> Result<Vec<Entry>, DomainError> {
    let mut entries = Vec::new();
    let mut current: Option<Entry> = None;
    let mut depth = 0usize;

    for (index, raw) in contents.lines().enumerate() {
        let text = raw.split(';').next().unwrap_or_default();
        let entry = current.get_or_insert_with(|| Entry {
            line: index + 1,
            indented: raw.starts_with([' ', '\t']),
            tokens: Vec::new(),
        });

        let mut token = String::new();
        for c in text.chars() {
            match c {
                '(' | ')' => {
                    if !token.is_empty() {
                        entry.tokens.push(std::mem::take(&mut token));
                    }
                    if c == '(' {
                        depth += 1;
                    } else {
                        depth = depth.checked_sub(1).ok_or_else(|| {
                            DomainError::ZoneLoad(format!("line {}: unbalanced ')'", index + 1))
                        })?;
                    }
                }
                c if c.is_whitespace() => {
                    if !token.is_empty() {
                        entry.tokens.push(std::mem::take(&mut token));
                    }
                }
                c => token.push(c),
            }
        }
        if !token.is_empty() {
            entry.tokens.push(token);
        }

        if depth == 0 {
            if let Some(entry) = current.take() {
                if !entry.tokens.is_empty() {
                    entries.push(entry);
                }
            }
        }
    }

    if depth != 0 {
        let line = current.map(|e| e.line).unwrap_or_default();
        return Err(DomainError::ZoneLoad(format!(
            "line {}: unbalanced '('",
            line
        )));
    }

    Ok(entries)
}
