use ferrous_ns_domain::{DomainName, RData, ResourceRecord, UpstreamRecord, CLASS_IN};
use ferrous_ns_infrastructure::dns::wire::{encode_name, encode_record};

fn name(text: &str) -> DomainName {
    DomainName::from_text(text).unwrap()
}

#[test]
fn test_a_record_bytes() {
    let record = ResourceRecord::new(name("example.com"), 60, RData::A("127.0.0.1".parse().unwrap()));
    let bytes = encode_record(&record).unwrap();

    let mut expected = b"\x07example\x03com\x00".to_vec();
    expected.extend([0x00, 0x01]); // type A
    expected.extend([0x00, 0x01]); // class IN
    expected.extend([0x00, 0x00, 0x00, 0x3C]); // ttl 60
    expected.extend([0x00, 0x04]); // rdlength
    expected.extend([0x7F, 0x00, 0x00, 0x01]);

    assert_eq!(bytes, expected);
}

#[test]
fn test_mx_record_bytes() {
    let record = ResourceRecord::new(
        name("example.com"),
        3600,
        RData::Mx {
            preference: 10,
            exchange: name("mail.example.com"),
        },
    );
    let bytes = encode_record(&record).unwrap();

    let owner = encode_name(&record.name, false);
    let exchange = encode_name(&name("mail.example.com"), false);
    let header_end = owner.len() + 10;

    assert_eq!(&bytes[..owner.len()], owner.as_slice());
    assert_eq!(&bytes[owner.len()..owner.len() + 2], &[0x00, 0x0F]);
    assert_eq!(
        &bytes[owner.len() + 4..owner.len() + 8],
        &3600u32.to_be_bytes()
    );

    let rdlength = u16::from_be_bytes([bytes[header_end - 2], bytes[header_end - 1]]) as usize;
    assert_eq!(rdlength, 2 + exchange.len());
    assert_eq!(&bytes[header_end..header_end + 2], &[0x00, 0x0A]);
    assert_eq!(&bytes[header_end + 2..], exchange.as_slice());
}

#[test]
fn test_soa_record_bytes() {
    let record = ResourceRecord::new(
        name("example.com"),
        300,
        RData::Soa {
            mname: name("ns1.example.com"),
            rname: name("hostmaster.example.com"),
            serial: 2024010101,
            refresh: 7200,
            retry: 3600,
            expire: 1209600,
            minimum: 300,
        },
    );
    let bytes = encode_record(&record).unwrap();

    let owner_len = record.name.wire_len();
    let mname = encode_name(&name("ns1.example.com"), false);
    let rname = encode_name(&name("hostmaster.example.com"), false);
    let rdata_start = owner_len + 10;

    assert_eq!(&bytes[owner_len..owner_len + 2], &[0x00, 0x06]);
    let rdlength =
        u16::from_be_bytes([bytes[rdata_start - 2], bytes[rdata_start - 1]]) as usize;
    assert_eq!(rdlength, mname.len() + rname.len() + 20);
    assert_eq!(bytes.len(), rdata_start + rdlength);

    let numbers = &bytes[rdata_start + mname.len() + rname.len()..];
    let values: Vec<u32> = numbers
        .chunks(4)
        .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
        .collect();
    assert_eq!(values, vec![2024010101, 7200, 3600, 1209600, 300]);
}

#[test]
fn test_record_keeps_its_class() {
    let record = ResourceRecord::new(name("version.bind"), 0, RData::A("192.0.2.1".parse().unwrap()))
        .with_class(3);
    let bytes = encode_record(&record).unwrap();
    let class_at = record.name.wire_len() + 2;
    assert_eq!(&bytes[class_at..class_at + 2], &[0x00, 0x03]);
}

#[test]
fn test_upstream_text_record_encodes_fully_qualified() {
    let upstream = UpstreamRecord::new("example.com", 15, CLASS_IN, 60, "5 mx.example.com");
    let record = ResourceRecord::from_upstream(&upstream).unwrap();
    let bytes = encode_record(&record).unwrap();

    assert!(bytes.starts_with(b"\x07example\x03com\x00"));
    assert!(bytes.ends_with(b"\x02mx\x07example\x03com\x00"));
}
