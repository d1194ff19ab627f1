use async_trait::async_trait;
use zonewatch_domain::{DomainError, ZonePosture};

/// Persistence capability for posture snapshots. `save` is an upsert
/// keyed on `zone_name`: repeated runs overwrite the prior observation
/// for a zone, they never duplicate it. Uniqueness is enforced by the
/// store, not by the caller.
#[async_trait]
pub trait PostureRepository: Send + Sync {
    async fn save(&self, posture: &ZonePosture) -> Result<(), DomainError>;
}
