use super::{DnsServices, Repositories};
use std::sync::Arc;
use zonewatch_application::use_cases::{InspectZoneUseCase, RunMonitorUseCase};
use zonewatch_domain::Config;
use zonewatch_infrastructure::input::CsvZoneListSource;

pub struct UseCases {
    pub run_monitor: Arc<RunMonitorUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, repos: &Repositories, dns: &DnsServices) -> Self {
        let zone_list = Arc::new(CsvZoneListSource::new(config.monitor.input_list.clone()));
        let inspector = Arc::new(InspectZoneUseCase::new(dns.resolver.clone()));

        Self {
            run_monitor: Arc::new(RunMonitorUseCase::new(
                zone_list,
                inspector,
                repos.posture.clone(),
            )),
        }
    }
}
