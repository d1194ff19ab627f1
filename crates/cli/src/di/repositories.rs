use sqlx::SqlitePool;
use std::sync::Arc;
use zonewatch_infrastructure::repositories::SqlitePostureRepository;

pub struct Repositories {
    pub posture: Arc<SqlitePostureRepository>,
}

impl Repositories {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            posture: Arc::new(SqlitePostureRepository::new(pool)),
        }
    }
}
