mod posture_repository;
mod zone_list_source;
mod zone_resolver;

pub use posture_repository::PostureRepository;
pub use zone_list_source::ZoneListSource;
pub use zone_resolver::{ZoneResolver, ZoneResponse};

// Re-export for convenience
pub use zonewatch_domain::{RecordKind, ZoneListEntry, ZonePosture};
