pub mod posture_repository;

pub use posture_repository::SqlitePostureRepository;
