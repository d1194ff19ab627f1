use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use zonewatch_domain::DomainError;

use crate::ports::{PostureRepository, ZoneListSource};
use crate::use_cases::InspectZoneUseCase;

/// Counters for one monitoring run, logged by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonitorSummary {
    pub inspected: usize,
    pub persisted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// The Batch Runner: reads the zone list, inspects each zone strictly
/// sequentially, and upserts the resulting posture snapshots.
pub struct RunMonitorUseCase {
    zone_list: Arc<dyn ZoneListSource>,
    inspector: Arc<InspectZoneUseCase>,
    repository: Arc<dyn PostureRepository>,
}

impl RunMonitorUseCase {
    pub fn new(
        zone_list: Arc<dyn ZoneListSource>,
        inspector: Arc<InspectZoneUseCase>,
        repository: Arc<dyn PostureRepository>,
    ) -> Self {
        Self {
            zone_list,
            inspector,
            repository,
        }
    }

    /// Process the whole input list. Per-zone failures never abort the
    /// run: a failed inspection or upsert is logged and counted, and the
    /// runner moves to the next zone.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<MonitorSummary, DomainError> {
        let entries = self.zone_list.read_entries().await?;
        info!(zones = entries.len(), "Starting monitoring run");

        let mut summary = MonitorSummary::default();

        for entry in &entries {
            summary.inspected += 1;

            let posture = match self.inspector.execute(&entry.zone_name, &entry.agency).await {
                Ok(Some(posture)) => posture,
                Ok(None) => {
                    debug!(zone = %entry.zone_name, "Zone not found, nothing persisted");
                    summary.skipped += 1;
                    continue;
                }
                Err(e) => {
                    warn!(zone = %entry.zone_name, error = %e, "Zone inspection failed");
                    summary.failed += 1;
                    continue;
                }
            };

            match self.repository.save(&posture).await {
                Ok(()) => {
                    debug!(
                        zone = %posture.zone_name,
                        status = posture.status.as_str(),
                        "Posture persisted"
                    );
                    summary.persisted += 1;
                }
                Err(e) => {
                    error!(zone = %posture.zone_name, error = %e, "Failed to persist posture");
                    summary.failed += 1;
                }
            }
        }

        info!(
            inspected = summary.inspected,
            persisted = summary.persisted,
            skipped = summary.skipped,
            failed = summary.failed,
            "Monitoring run complete"
        );

        Ok(summary)
    }
}
