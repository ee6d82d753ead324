#![allow(dead_code)]
use ferrous_ns_domain::{DomainName, RData, ResourceRecord};
use std::net::Ipv4Addr;

pub struct ResourceRecordBuilder {
    name: DomainName,
    class: u16,
    ttl: u32,
    rdata: RData,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: DomainName::from_text("example.com.").unwrap(),
            class: 1,
            ttl: 300,
            rdata: RData::A(Ipv4Addr::new(192, 0, 2, 1)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = DomainName::from_text(name).unwrap();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn class(mut self, class: u16) -> Self {
        self.class = class;
        self
    }

    pub fn a(mut self, addr: &str) -> Self {
        self.rdata = RData::A(addr.parse().unwrap());
        self
    }

    pub fn mx(mut self, preference: u16, exchange: &str) -> Self {
        self.rdata = RData::Mx {
            preference,
            exchange: DomainName::from_text(exchange).unwrap(),
        };
        self
    }

    pub fn build(self) -> ResourceRecord {
        ResourceRecord::new(self.name, self.ttl, self.rdata).with_class(self.class)
    }
}

impl Default for ResourceRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}
