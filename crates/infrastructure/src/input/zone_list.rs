use async_trait::async_trait;
use std::path::PathBuf;
use tracing::warn;
use zonewatch_application::ports::ZoneListSource;
use zonewatch_domain::{DomainError, ZoneListEntry};

/// Zone list reader for comma-separated `zone,<unused>,agency` lines.
/// Blank lines are skipped silently; lines with too few fields or an
/// empty zone name are skipped with a warning.
pub struct CsvZoneListSource {
    path: PathBuf,
}

impl CsvZoneListSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ZoneListSource for CsvZoneListSource {
    async fn read_entries(&self) -> Result<Vec<ZoneListEntry>, DomainError> {
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::IoError(format!(
                "Failed to open zone list {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let mut entries = Vec::new();
        for (index, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() < 3 || fields[0].trim().is_empty() {
                warn!(
                    path = %self.path.display(),
                    line = index + 1,
                    "Malformed zone list line skipped"
                );
                continue;
            }

            entries.push(ZoneListEntry::new(fields[0].trim(), fields[2].trim()));
        }

        Ok(entries)
    }
}
