use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, instrument};
use zonewatch_application::ports::PostureRepository;
use zonewatch_domain::{DomainError, ZonePosture};

/// SQLite-backed posture store. One row per zone, upserted on
/// `zone_name`; the unique index created by the migration enforces the
/// one-row-per-zone invariant.
pub struct SqlitePostureRepository {
    pool: SqlitePool,
}

impl SqlitePostureRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn encode<T: serde::Serialize>(values: &T) -> Result<String, DomainError> {
        serde_json::to_string(values).map_err(|e| DomainError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl PostureRepository for SqlitePostureRepository {
    #[instrument(skip(self, posture), fields(zone = %posture.zone_name))]
    async fn save(&self, posture: &ZonePosture) -> Result<(), DomainError> {
        let name_servers = Self::encode(&posture.name_servers)?;
        let key_signing_keys = Self::encode(&posture.key_signing_keys)?;
        let zone_signing_keys = Self::encode(&posture.zone_signing_keys)?;
        let algorithms = Self::encode(&posture.algorithms)?;
        let ds_digest_types = Self::encode(&posture.ds_digest_types)?;

        sqlx::query(
            "INSERT INTO zone_postures
             (zone_name, agency, observed_at, serial, status, name_servers,
              key_signing_keys, zone_signing_keys, algorithms, ds_digest_types)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(zone_name) DO UPDATE SET
               agency = excluded.agency,
               observed_at = excluded.observed_at,
               serial = excluded.serial,
               status = excluded.status,
               name_servers = excluded.name_servers,
               key_signing_keys = excluded.key_signing_keys,
               zone_signing_keys = excluded.zone_signing_keys,
               algorithms = excluded.algorithms,
               ds_digest_types = excluded.ds_digest_types",
        )
        .bind(&posture.zone_name)
        .bind(&posture.agency)
        .bind(&posture.observed_at)
        .bind(posture.serial as i64)
        .bind(posture.status.as_str())
        .bind(&name_servers)
        .bind(&key_signing_keys)
        .bind(&zone_signing_keys)
        .bind(&algorithms)
        .bind(&ds_digest_types)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to upsert zone posture");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
