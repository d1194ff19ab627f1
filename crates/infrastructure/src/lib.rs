//! Zonewatch Infrastructure Layer
pub mod database;
pub mod dns;
pub mod input;
pub mod repositories;
