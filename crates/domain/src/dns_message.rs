use crate::{DomainName, RecordType};
use std::fmt;

/// 4-bit response status carried in the header flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResponseCode {
    #[default]
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    Other(u8),
}

impl ResponseCode {
    /// Only the low four bits are significant.
    pub fn from_code(code: u8) -> Self {
        match code & 0x0F {
            0 => ResponseCode::NoError,
            1 => ResponseCode::FormErr,
            2 => ResponseCode::ServFail,
            3 => ResponseCode::NxDomain,
            4 => ResponseCode::NotImp,
            5 => ResponseCode::Refused,
            other => ResponseCode::Other(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            ResponseCode::NoError => 0,
            ResponseCode::FormErr => 1,
            ResponseCode::ServFail => 2,
            ResponseCode::NxDomain => 3,
            ResponseCode::NotImp => 4,
            ResponseCode::Refused => 5,
            ResponseCode::Other(code) => code & 0x0F,
        }
    }

    pub fn is_success(self) -> bool {
        self == ResponseCode::NoError
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NxDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const QR: u16 = 1 << 15;
const OPCODE_SHIFT: u16 = 11;
const AA: u16 = 1 << 10;
const TC: u16 = 1 << 9;
const RD: u16 = 1 << 8;
const RA: u16 = 1 << 7;
const RCODE_MASK: u16 = 0x000F;

/// The 16-bit flags word of the DNS header.
///
/// ```text
///   0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
/// |QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFlags(u16);

impl HeaderFlags {
    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// Flags for a reply from this server: QR, RD and RA always set, AA as
    /// requested, Opcode and TC zero.
    pub fn response(status: ResponseCode, authoritative: bool) -> Self {
        let mut flags = Self::default();
        flags.set_response(true);
        flags.set_recursion_desired(true);
        flags.set_recursion_available(true);
        flags.set_authoritative(authoritative);
        flags.set_response_code(status);
        flags
    }

    pub fn is_response(self) -> bool {
        self.0 & QR != 0
    }

    pub fn opcode(self) -> u8 {
        ((self.0 >> OPCODE_SHIFT) & 0x0F) as u8
    }

    pub fn authoritative(self) -> bool {
        self.0 & AA != 0
    }

    pub fn truncated(self) -> bool {
        self.0 & TC != 0
    }

    pub fn recursion_desired(self) -> bool {
        self.0 & RD != 0
    }

    pub fn recursion_available(self) -> bool {
        self.0 & RA != 0
    }

    pub fn response_code(self) -> ResponseCode {
        ResponseCode::from_code((self.0 & RCODE_MASK) as u8)
    }

    pub fn set_response(&mut self, value: bool) {
        self.set_bit(QR, value);
    }

    pub fn set_authoritative(&mut self, value: bool) {
        self.set_bit(AA, value);
    }

    pub fn set_recursion_desired(&mut self, value: bool) {
        self.set_bit(RD, value);
    }

    pub fn set_recursion_available(&mut self, value: bool) {
        self.set_bit(RA, value);
    }

    pub fn set_response_code(&mut self, code: ResponseCode) {
        self.0 = (self.0 & !RCODE_MASK) | u16::from(code.code());
    }

    fn set_bit(&mut self, bit: u16, value: bool) {
        if value {
            self.0 |= bit;
        } else {
            self.0 &= !bit;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub name: DomainName,
    pub qtype: u16,
    pub qclass: u16,
}

impl Query {
    pub fn new(name: DomainName, qtype: u16, qclass: u16) -> Self {
        Self {
            name,
            qtype,
            qclass,
        }
    }

    /// `None` when the type is not one this server implements.
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_code(self.qtype)
    }
}

/// A decoded request: header id and flags plus the question section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: u16,
    pub flags: HeaderFlags,
    pub queries: Vec<Query>,
}

impl Message {
    pub fn new(id: u16, flags: HeaderFlags, queries: Vec<Query>) -> Self {
        Self { id, flags, queries }
    }
}
