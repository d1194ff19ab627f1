use serde::{Deserialize, Serialize};

/// DNSSEC deployment status of a zone as judged from the resolver's
/// answers. Never left unset: a persisted posture always carries one of
/// these four values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DnssecStatus {
    /// No DNSKEY records published.
    Unsigned,
    /// Signed, chained to the parent via DS, and validated upstream
    /// (AD bit set).
    Valid,
    /// Signed but not chained to a trust anchor: either the resolver
    /// could not authenticate the answer, or the parent publishes no DS.
    Island,
    /// The resolver answered SERVFAIL for DNSKEY, which a validating
    /// resolver returns when signature validation fails.
    Bogus,
}

impl DnssecStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnssecStatus::Unsigned => "unsigned",
            DnssecStatus::Valid => "valid",
            DnssecStatus::Island => "island",
            DnssecStatus::Bogus => "bogus",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unsigned" => Some(DnssecStatus::Unsigned),
            "valid" => Some(DnssecStatus::Valid),
            "island" => Some(DnssecStatus::Island),
            "bogus" => Some(DnssecStatus::Bogus),
            _ => None,
        }
    }
}

/// Output of the DNSSEC classification step: the status plus the key
/// material observed while classifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnssecAssessment {
    pub status: DnssecStatus,
    pub key_signing_keys: Vec<u16>,
    pub zone_signing_keys: Vec<u16>,
    pub algorithms: Vec<u8>,
    pub ds_digest_types: Vec<u8>,
}

impl DnssecAssessment {
    /// Assessment for a zone with an empty DNSKEY answer. The sentinel
    /// zero entries distinguish "no keys found" from "not yet inspected".
    pub fn unsigned() -> Self {
        Self {
            status: DnssecStatus::Unsigned,
            key_signing_keys: vec![0],
            zone_signing_keys: vec![0],
            algorithms: vec![0],
            ds_digest_types: Vec::new(),
        }
    }
}

/// The complete posture snapshot persisted for one monitored zone.
/// Built fresh on every run and upserted by `zone_name`; there are no
/// partial updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZonePosture {
    /// Fully-qualified zone name; the unique persistence key.
    pub zone_name: String,
    /// Free-text label from the input list.
    pub agency: String,
    /// When this observation was made.
    pub observed_at: String,
    /// SOA serial, 0 if unresolvable.
    pub serial: u32,
    pub status: DnssecStatus,
    /// Discovered NS targets in answer order; `["none"]` when NS
    /// discovery produced nothing. Never empty.
    pub name_servers: Vec<String>,
    pub key_signing_keys: Vec<u16>,
    pub zone_signing_keys: Vec<u16>,
    pub algorithms: Vec<u8>,
    pub ds_digest_types: Vec<u8>,
}

impl ZonePosture {
    /// Pure assembly of the persisted record from the inspector's parts.
    pub fn assemble(
        zone_name: impl Into<String>,
        agency: impl Into<String>,
        observed_at: impl Into<String>,
        serial: u32,
        name_servers: Vec<String>,
        assessment: DnssecAssessment,
    ) -> Self {
        Self {
            zone_name: zone_name.into(),
            agency: agency.into(),
            observed_at: observed_at.into(),
            serial,
            status: assessment.status,
            name_servers,
            key_signing_keys: assessment.key_signing_keys,
            zone_signing_keys: assessment.zone_signing_keys,
            algorithms: assessment.algorithms,
            ds_digest_types: assessment.ds_digest_types,
        }
    }
}
