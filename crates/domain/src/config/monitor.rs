use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MonitorConfig {
    /// Path of the zone list consumed by a run: one
    /// `zone,<unused>,agency` line per monitored zone.
    #[serde(default = "default_input_list")]
    pub input_list: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            input_list: default_input_list(),
        }
    }
}

fn default_input_list() -> String {
    "zones.csv".to_string()
}
