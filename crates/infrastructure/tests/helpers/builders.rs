#![allow(dead_code)]
use ferrous_ns_domain::{DomainName, CLASS_IN};
use ferrous_ns_infrastructure::dns::wire::encode_name;

/// Assembles raw request bytes. Every question is followed by the eight
/// reserved bytes the decoder skips.
pub struct QueryBuilder {
    id: u16,
    flags: u16,
    questions: Vec<(String, u16, u16)>,
}

impl QueryBuilder {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            flags: 0x0100,
            questions: Vec::new(),
        }
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn question(mut self, name: &str, qtype: u16) -> Self {
        self.questions.push((name.to_string(), qtype, CLASS_IN));
        self
    }

    pub fn question_with_class(mut self, name: &str, qtype: u16, qclass: u16) -> Self {
        self.questions.push((name.to_string(), qtype, qclass));
        self
    }

    pub fn header(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(12);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&(self.questions.len() as u16).to_be_bytes());
        out.extend_from_slice(&[0; 6]);
        out
    }

    pub fn build(&self) -> Vec<u8> {
        let mut out = self.header();
        for (name, qtype, qclass) in &self.questions {
            let name = DomainName::from_text(name).unwrap();
            out.extend(encode_name(&name, false));
            out.extend_from_slice(&qtype.to_be_bytes());
            out.extend_from_slice(&qclass.to_be_bytes());
            out.extend_from_slice(&[0; 8]);
        }
        out
    }
}

/// Minimal view over an encoded response.
pub struct ResponseReader<'a> {
    pub bytes: &'a [u8],
}

impl<'a> ResponseReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        assert!(bytes.len() >= 12, "response shorter than header");
        Self { bytes }
    }

    fn u16_at(&self, offset: usize) -> u16 {
        u16::from_be_bytes([self.bytes[offset], self.bytes[offset + 1]])
    }

    pub fn id(&self) -> u16 {
        self.u16_at(0)
    }

    pub fn flags(&self) -> u16 {
        self.u16_at(2)
    }

    pub fn rcode(&self) -> u8 {
        (self.flags() & 0x000F) as u8
    }

    pub fn authoritative(&self) -> bool {
        self.flags() & 0x0400 != 0
    }

    pub fn qdcount(&self) -> u16 {
        self.u16_at(4)
    }

    pub fn ancount(&self) -> u16 {
        self.u16_at(6)
    }

    pub fn nscount(&self) -> u16 {
        self.u16_at(8)
    }

    pub fn arcount(&self) -> u16 {
        self.u16_at(10)
    }
}
