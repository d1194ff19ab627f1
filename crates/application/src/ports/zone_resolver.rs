use async_trait::async_trait;
use zonewatch_domain::{DomainError, RecordKind, ReplyCode, ZoneRecord};

/// A single upstream response, reduced to what posture classification
/// reads: the reply code, the resolver's authentication signal, and the
/// answer section.
#[derive(Debug, Clone)]
pub struct ZoneResponse {
    pub reply_code: ReplyCode,
    /// The AD bit: set by a validating recursive resolver when it
    /// authenticated the answer.
    pub authentic_data: bool,
    /// Total answer-section records, including types the parser does not
    /// carry (RRSIGs arrive alongside DNSKEYs when the DO bit was set).
    pub answer_count: usize,
    /// Typed answers in answer-section order.
    pub answers: Vec<ZoneRecord>,
}

impl ZoneResponse {
    pub fn is_nxdomain(&self) -> bool {
        self.reply_code == ReplyCode::NxDomain
    }

    pub fn is_servfail(&self) -> bool {
        self.reply_code == ReplyCode::ServFail
    }

    pub fn has_answers(&self) -> bool {
        self.answer_count > 0
    }
}

/// Query capability consumed by the zone inspector. One call, one DNS
/// exchange against the configured upstream resolvers; the implementation
/// owns transport, timeout, and EDNS0/DNSSEC-OK signaling.
#[async_trait]
pub trait ZoneResolver: Send + Sync {
    async fn query(
        &self,
        zone: &str,
        kind: RecordKind,
        dnssec_ok: bool,
    ) -> Result<ZoneResponse, DomainError>;
}
