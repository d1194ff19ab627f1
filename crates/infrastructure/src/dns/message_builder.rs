//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.
//! Every query advertises an EDNS0 payload large enough for DNSSEC
//! responses; the DNSSEC-OK bit is set per request.

use super::record_kind_map::RecordKindMapper;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use zonewatch_domain::{DomainError, RecordKind};

/// UDP payload size advertised via EDNS0. Large enough for DNSKEY
/// answers with their signatures.
pub const MAX_UDP_PAYLOAD: u16 = 4096;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query and serialize it to wire format.
    ///
    /// The message carries a random ID for response matching, the RD
    /// flag, a single question, and an EDNS0 OPT record with the DO bit
    /// set according to `dnssec_ok`.
    pub fn build_query(
        zone: &str,
        kind: RecordKind,
        dnssec_ok: bool,
    ) -> Result<Vec<u8>, DomainError> {
        let name = Name::from_str(zone)
            .map_err(|e| DomainError::InvalidZoneName(format!("Invalid zone '{}': {}", zone, e)))?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordKindMapper::to_hickory(kind));
        query.set_query_class(DNSClass::IN);

        let mut message = Message::new(fastrand::u16(..), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let mut edns = Edns::new();
        edns.set_max_payload(MAX_UDP_PAYLOAD);
        edns.set_version(0);
        edns.set_dnssec_ok(dnssec_ok);
        *message.extensions_mut() = Some(edns);

        Self::serialize_message(&message)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message
            .emit(&mut encoder)
            .map_err(|e| DomainError::QueryFailed(format!("Failed to serialize query: {}", e)))?;

        Ok(buf)
    }
}
