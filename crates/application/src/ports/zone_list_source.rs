use async_trait::async_trait;
use zonewatch_domain::{DomainError, ZoneListEntry};

/// Source of the zones to monitor. Implementations define their own
/// policy for malformed input; entries are returned in list order.
#[async_trait]
pub trait ZoneListSource: Send + Sync {
    async fn read_entries(&self) -> Result<Vec<ZoneListEntry>, DomainError>;
}
