pub mod inspect_zone;
pub mod run_monitor;

pub use inspect_zone::InspectZoneUseCase;
pub use run_monitor::{MonitorSummary, RunMonitorUseCase};
