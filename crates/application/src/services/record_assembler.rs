//! Turns stored record rows into resource records.
//!
//! Each record is first rendered in presentation form
//! (`owner ttl IN TYPE data`) and its data is then parsed with hickory's
//! zone-text rdata parser. Data that does not parse for the record type
//! yields `DomainError::RecordFormat`.

use hickory_proto::rr::{Name, RData, Record, RecordType as HickoryRecordType};
use hickory_proto::serialize::txt::RDataParser;
use zonestore_dns_domain::{DomainError, ZoneRecord};

#[derive(Debug, Clone, Copy)]
pub struct RecordAssembler {
    default_ttl: u32,
}

impl RecordAssembler {
    pub fn new(default_ttl: u32) -> Self {
        Self { default_ttl }
    }

    /// Assembles `record` under the given owner name.
    pub fn assemble(
        &self,
        owner: &str,
        record: &ZoneRecord,
    ) -> Result<(String, Record), DomainError> {
        let ttl = record.effective_ttl(self.default_ttl);
        let data = record.data.trim();
        let rr_string = format!("{} {} IN {} {}", owner, ttl, record.record_type, data);

        let name = parse_owner(owner)
            .map_err(|e| DomainError::RecordFormat(format!("{}: {}", rr_string, e)))?;
        let record_type = HickoryRecordType::from(record.record_type.to_u16());
        let rdata = RData::try_from_str(record_type, data)
            .map_err(|e| DomainError::RecordFormat(format!("{}: {}", rr_string, e)))?;

        Ok((rr_string, Record::from_rdata(name, ttl, rdata)))
    }
}

impl Default for RecordAssembler {
    fn default() -> Self {
        Self::new(120)
    }
}

fn parse_owner(name: &str) -> Result<Name, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("empty owner name".to_string());
    }
    let fqdn = if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    };
    Name::from_ascii(&fqdn).map_err(|e| format!("invalid owner name '{}': {}", name, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_proto::rr::rdata::A;
    use std::net::Ipv4Addr;
    use zonestore_dns_domain::RecordType;

    fn record(record_type: RecordType, data: &str, ttl: i64) -> ZoneRecord {
        ZoneRecord::new(1, "www", "example.com", record_type, data, ttl)
    }

    #[test]
    fn test_assemble_a_record() {
        let assembler = RecordAssembler::new(120);
        let (rr, record) = assembler
            .assemble("www.example.com", &record(RecordType::A, "1.2.3.4", 300))
            .unwrap();

        assert_eq!(rr, "www.example.com 300 IN A 1.2.3.4");
        assert_eq!(record.record_type(), HickoryRecordType::A);
        assert_eq!(record.ttl(), 300);
        assert_eq!(record.name().to_ascii(), "www.example.com.");
        assert_eq!(record.data(), &RData::A(A(Ipv4Addr::new(1, 2, 3, 4))));
    }

    #[test]
    fn test_non_positive_ttl_uses_default() {
        let assembler = RecordAssembler::new(90);
        let (rr, record) = assembler
            .assemble("www.example.com", &record(RecordType::A, "1.2.3.4", 0))
            .unwrap();

        assert_eq!(rr, "www.example.com 90 IN A 1.2.3.4");
        assert_eq!(record.ttl(), 90);
    }

    #[test]
    fn test_assemble_cname_target() {
        let assembler = RecordAssembler::default();
        let (_, record) = assembler
            .assemble("example.com", &record(RecordType::CNAME, "alias.net.", 60))
            .unwrap();

        match record.data() {
            RData::CNAME(target) => assert_eq!(target.0.to_ascii(), "alias.net."),
            other => panic!("expected CNAME, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_mx_srv_and_soa() {
        let assembler = RecordAssembler::default();

        let (_, mx) = assembler
            .assemble("example.com", &record(RecordType::MX, "10 mail.example.com.", 60))
            .unwrap();
        assert_eq!(mx.record_type(), HickoryRecordType::MX);

        let (_, srv) = assembler
            .assemble(
                "_sip._tcp.example.com",
                &record(RecordType::SRV, "10 5 5060 sip.example.com.", 60),
            )
            .unwrap();
        assert_eq!(srv.record_type(), HickoryRecordType::SRV);

        let (_, soa) = assembler
            .assemble(
                "example.com",
                &record(
                    RecordType::SOA,
                    "ns1.example.com. hostmaster.example.com. 2024010101 7200 3600 1209600 300",
                    3600,
                ),
            )
            .unwrap();
        assert_eq!(soa.record_type(), HickoryRecordType::SOA);
    }

    #[test]
    fn test_txt_keeps_each_quoted_string() {
        let assembler = RecordAssembler::default();
        let (_, txt) = assembler
            .assemble(
                "example.com",
                &record(RecordType::TXT, "\"part one\" \"part two\"", 60),
            )
            .unwrap();

        match txt.data() {
            RData::TXT(txt) => {
                let strings: Vec<&[u8]> = txt.txt_data().iter().map(|s| &s[..]).collect();
                assert_eq!(strings, vec![&b"part one"[..], &b"part two"[..]]);
            }
            other => panic!("expected TXT, got {:?}", other),
        }
    }

    #[test]
    fn test_assemble_caa_and_sshfp() {
        let assembler = RecordAssembler::default();

        let (rr, caa) = assembler
            .assemble(
                "example.com",
                &record(RecordType::CAA, "0 issue \"letsencrypt.org\"", 300),
            )
            .unwrap();
        assert_eq!(rr, "example.com 300 IN CAA 0 issue \"letsencrypt.org\"");
        assert_eq!(caa.record_type(), HickoryRecordType::CAA);

        let (_, sshfp) = assembler
            .assemble(
                "host.example.com",
                &record(
                    RecordType::SSHFP,
                    "1 1 123456789abcdef67890123456789abcdef67890",
                    300,
                ),
            )
            .unwrap();
        assert_eq!(sshfp.record_type(), HickoryRecordType::SSHFP);
    }

    #[test]
    fn test_malformed_data_is_record_format_error() {
        let assembler = RecordAssembler::default();

        let bad_a = assembler.assemble("www.example.com", &record(RecordType::A, "not-an-ip", 60));
        assert!(matches!(bad_a, Err(DomainError::RecordFormat(_))));

        let bad_mx =
            assembler.assemble("example.com", &record(RecordType::MX, "ten mail.example.com.", 60));
        assert!(matches!(bad_mx, Err(DomainError::RecordFormat(_))));

        let empty = assembler.assemble("www.example.com", &record(RecordType::A, "", 60));
        assert!(matches!(empty, Err(DomainError::RecordFormat(_))));
    }
}
