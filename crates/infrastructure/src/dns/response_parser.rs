use hickory_proto::dnssec::rdata::DNSSECRData;
use hickory_proto::dnssec::Verifier;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;
use zonewatch_application::ports::ZoneResponse;
use zonewatch_domain::{DomainError, ReplyCode, ZoneRecord};

pub struct ResponseParser;

impl ResponseParser {
    /// Parse a wire-format response into the typed form the inspector
    /// consumes. Answer-section order is preserved; record types outside
    /// the closed NS/SOA/DNSKEY/DS set are counted but not carried.
    pub fn parse(response_bytes: &[u8]) -> Result<ZoneResponse, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        Ok(Self::from_message(&message))
    }

    pub fn from_message(message: &Message) -> ZoneResponse {
        let reply_code = match message.response_code() {
            ResponseCode::NoError => ReplyCode::NoError,
            ResponseCode::NXDomain => ReplyCode::NxDomain,
            ResponseCode::ServFail => ReplyCode::ServFail,
            other => ReplyCode::Other(u16::from(other)),
        };

        let mut answers = Vec::new();
        for record in message.answers() {
            match record.data() {
                RData::NS(ns) => {
                    answers.push(ZoneRecord::Ns {
                        target: ns.0.to_utf8(),
                    });
                }
                RData::SOA(soa) => {
                    answers.push(ZoneRecord::Soa {
                        serial: soa.serial(),
                    });
                }
                RData::DNSSEC(DNSSECRData::DNSKEY(dnskey)) => {
                    let Ok(key_tag) = dnskey.calculate_key_tag() else {
                        debug!(name = %record.name(), "DNSKEY with uncomputable key tag skipped");
                        continue;
                    };
                    answers.push(ZoneRecord::Dnskey {
                        flags: dnskey.flags(),
                        algorithm: u8::from(dnskey.algorithm()),
                        key_tag,
                    });
                }
                RData::DNSSEC(DNSSECRData::DS(ds)) => {
                    answers.push(ZoneRecord::Ds {
                        key_tag: ds.key_tag(),
                        algorithm: u8::from(ds.algorithm()),
                        digest_type: u8::from(ds.digest_type()),
                    });
                }
                _ => {}
            }
        }

        debug!(
            rcode = %reply_code,
            authentic_data = message.authentic_data(),
            answers = message.answers().len(),
            extracted = answers.len(),
            "DNS response parsed"
        );

        ZoneResponse {
            reply_code,
            authentic_data: message.authentic_data(),
            answer_count: message.answers().len(),
            answers,
        }
    }
}
