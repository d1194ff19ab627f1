use hickory_proto::rr::RecordType;
use zonewatch_domain::RecordKind;

/// Maps the domain's closed query-kind set onto hickory record types.
pub struct RecordKindMapper;

impl RecordKindMapper {
    pub fn to_hickory(kind: RecordKind) -> RecordType {
        match kind {
            RecordKind::Ns => RecordType::NS,
            RecordKind::Soa => RecordType::SOA,
            RecordKind::Dnskey => RecordType::DNSKEY,
            RecordKind::Ds => RecordType::DS,
        }
    }
}
