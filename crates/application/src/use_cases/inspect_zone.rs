use std::sync::Arc;
use tracing::{debug, instrument, warn};

use zonewatch_domain::record::{DNSKEY_FLAGS_KSK, DNSKEY_FLAGS_ZSK};
use zonewatch_domain::{
    to_fqdn, DnssecAssessment, DnssecStatus, DomainError, RecordKind, ZonePosture, ZoneRecord,
};

use crate::ports::ZoneResolver;

/// Sentinel stored when NS discovery produced no targets, so that the
/// persisted sequence is never empty.
const NO_NAME_SERVERS: &str = "none";

/// The Zone Inspector: runs the per-zone query sequence (NS, SOA,
/// DNSKEY, DS) and classifies the zone's DNSSEC status from the results.
pub struct InspectZoneUseCase {
    resolver: Arc<dyn ZoneResolver>,
}

impl InspectZoneUseCase {
    pub fn new(resolver: Arc<dyn ZoneResolver>) -> Self {
        Self { resolver }
    }

    /// Inspect one zone and assemble its posture snapshot.
    ///
    /// Returns `Ok(None)` when the zone does not exist (NXDOMAIN on the
    /// DNSKEY query): a recognized terminal state with nothing to
    /// persist. A query failure during classification aborts this zone
    /// only; the caller decides whether to continue with others.
    #[instrument(skip(self, agency))]
    pub async fn execute(
        &self,
        zone_name: &str,
        agency: &str,
    ) -> Result<Option<ZonePosture>, DomainError> {
        let zone = to_fqdn(zone_name);

        let name_servers = self.discover_name_servers(&zone).await;
        let serial = self.discover_serial(&zone).await;

        let Some(assessment) = self.classify(&zone).await? else {
            debug!(zone = %zone, "Zone does not exist (NXDOMAIN), nothing to record");
            return Ok(None);
        };

        debug!(
            zone = %zone,
            status = assessment.status.as_str(),
            serial = serial,
            name_servers = name_servers.len(),
            "Zone inspected"
        );

        let observed_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Ok(Some(ZonePosture::assemble(
            zone,
            agency,
            observed_at,
            serial,
            name_servers,
            assessment,
        )))
    }

    /// NS discovery: answer-order NS targets, or the `["none"]` sentinel
    /// when the lookup fails or yields no NS records.
    async fn discover_name_servers(&self, zone: &str) -> Vec<String> {
        let response = match self.resolver.query(zone, RecordKind::Ns, false).await {
            Ok(response) => response,
            Err(e) => {
                warn!(zone = %zone, error = %e, "NS discovery failed");
                return vec![NO_NAME_SERVERS.to_string()];
            }
        };

        let servers: Vec<String> = response
            .answers
            .iter()
            .filter_map(|record| match record {
                ZoneRecord::Ns { target } => Some(target.clone()),
                _ => None,
            })
            .collect();

        if servers.is_empty() {
            vec![NO_NAME_SERVERS.to_string()]
        } else {
            servers
        }
    }

    /// Serial discovery: the SOA serial, or 0 when the zone's SOA is
    /// unresolvable.
    async fn discover_serial(&self, zone: &str) -> u32 {
        let response = match self.resolver.query(zone, RecordKind::Soa, false).await {
            Ok(response) => response,
            Err(e) => {
                warn!(zone = %zone, error = %e, "SOA discovery failed");
                return 0;
            }
        };

        response
            .answers
            .iter()
            .find_map(|record| match record {
                ZoneRecord::Soa { serial } => Some(*serial),
                _ => None,
            })
            .unwrap_or(0)
    }

    /// The classification decision procedure. Rule precedence, later
    /// rules overriding earlier ones: AD set -> valid, AD clear ->
    /// island, SERVFAIL -> bogus, empty DNSKEY answer -> unsigned,
    /// empty DS answer -> island.
    async fn classify(&self, zone: &str) -> Result<Option<DnssecAssessment>, DomainError> {
        let response = self.resolver.query(zone, RecordKind::Dnskey, true).await?;

        if response.is_nxdomain() {
            return Ok(None);
        }

        let mut status = if response.authentic_data {
            DnssecStatus::Valid
        } else {
            DnssecStatus::Island
        };

        let response = if response.is_servfail() {
            // A validating resolver answers SERVFAIL when the zone's
            // signatures do not verify. Retry once without the DO bit to
            // still retrieve the key material for the record.
            status = DnssecStatus::Bogus;
            self.resolver.query(zone, RecordKind::Dnskey, false).await?
        } else {
            response
        };

        if !response.has_answers() {
            debug!(zone = %zone, "Empty DNSKEY answer, zone is unsigned");
            return Ok(Some(DnssecAssessment::unsigned()));
        }

        let mut key_signing_keys = Vec::new();
        let mut zone_signing_keys = Vec::new();
        let mut algorithms = Vec::new();

        for record in &response.answers {
            if let ZoneRecord::Dnskey {
                flags,
                algorithm,
                key_tag,
            } = record
            {
                match *flags {
                    DNSKEY_FLAGS_ZSK => {
                        zone_signing_keys.push(*key_tag);
                        algorithms.push(*algorithm);
                    }
                    DNSKEY_FLAGS_KSK => {
                        key_signing_keys.push(*key_tag);
                        algorithms.push(*algorithm);
                    }
                    _ => {}
                }
            }
        }

        let ds_response = self.resolver.query(zone, RecordKind::Ds, false).await?;
        let ds_digest_types = if ds_response.has_answers() {
            ds_response
                .answers
                .iter()
                .filter_map(|record| match record {
                    ZoneRecord::Ds { digest_type, .. } => Some(*digest_type),
                    _ => None,
                })
                .collect()
        } else {
            // No DS in the parent zone: the chain of trust stops above
            // this zone no matter what the AD bit said about the DNSKEY
            // answer.
            status = DnssecStatus::Island;
            vec![0]
        };

        Ok(Some(DnssecAssessment {
            status,
            key_signing_keys,
            zone_signing_keys,
            algorithms,
            ds_digest_types,
        }))
    }
}
