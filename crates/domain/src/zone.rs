/// One line of the monitoring input list: the zone to inspect and the
/// agency label carried through to the persisted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneListEntry {
    pub zone_name: String,
    pub agency: String,
}

impl ZoneListEntry {
    pub fn new(zone_name: impl Into<String>, agency: impl Into<String>) -> Self {
        Self {
            zone_name: zone_name.into(),
            agency: agency.into(),
        }
    }
}

/// Normalize a zone name to fully-qualified form with a trailing dot.
pub fn to_fqdn(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.ends_with('.') {
        trimmed.to_string()
    } else {
        format!("{}.", trimmed)
    }
}
