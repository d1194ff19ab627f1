use std::fmt;

/// The record kinds the inspector queries for. A closed set: every query
/// zonewatch issues is one of these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Ns,
    Soa,
    Dnskey,
    Ds,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Ns => "NS",
            RecordKind::Soa => "SOA",
            RecordKind::Dnskey => "DNSKEY",
            RecordKind::Ds => "DS",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordKind::Ns => 2,
            RecordKind::Soa => 6,
            RecordKind::Ds => 43,
            RecordKind::Dnskey => 48,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An answer-section record, reduced to the fields posture classification
/// reads. Records of any other type are counted but not carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ZoneRecord {
    Ns { target: String },
    Soa { serial: u32 },
    Dnskey { flags: u16, algorithm: u8, key_tag: u16 },
    Ds { key_tag: u16, algorithm: u8, digest_type: u8 },
}

/// DNSKEY flag value marking a zone-signing key.
pub const DNSKEY_FLAGS_ZSK: u16 = 256;
/// DNSKEY flag value marking a key-signing key.
pub const DNSKEY_FLAGS_KSK: u16 = 257;

/// Reply codes the classification distinguishes. Everything else is
/// folded into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCode {
    NoError,
    NxDomain,
    ServFail,
    Other(u16),
}

impl ReplyCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReplyCode::NoError => "NOERROR",
            ReplyCode::NxDomain => "NXDOMAIN",
            ReplyCode::ServFail => "SERVFAIL",
            ReplyCode::Other(_) => "OTHER",
        }
    }
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplyCode::Other(code) => write!(f, "RCODE({})", code),
            _ => write!(f, "{}", self.as_str()),
        }
    }
}
