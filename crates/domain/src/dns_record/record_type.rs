use std::fmt;
use std::str::FromStr;

/// Record types this server can answer. Anything else is NOTIMP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    MX,
    SOA,
}

impl RecordType {
    pub const fn code(self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::SOA => 6,
            RecordType::MX => 15,
        }
    }

    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            6 => Some(RecordType::SOA),
            15 => Some(RecordType::MX),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::MX => "MX",
            RecordType::SOA => "SOA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "MX" => Ok(RecordType::MX),
            "SOA" => Ok(RecordType::SOA),
            other => Err(format!("Unsupported record type '{}'", other)),
        }
    }
}
