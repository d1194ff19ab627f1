//! Zonewatch Domain Layer
pub mod config;
pub mod errors;
pub mod posture;
pub mod record;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use posture::{DnssecAssessment, DnssecStatus, ZonePosture};
pub use record::{RecordKind, ReplyCode, ZoneRecord};
pub use zone::{to_fqdn, ZoneListEntry};
