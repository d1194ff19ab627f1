use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Explicit upstream resolvers (`ip` or `ip:port`). When empty, the
    /// host's resolver configuration is read from /etc/resolv.conf.
    #[serde(default)]
    pub nameservers: Vec<String>,

    /// Per-query timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    5
}
