use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;
use zonewatch_domain::Config;
use zonewatch_infrastructure::dns::{read_system_conf, UdpZoneResolver};

const DEFAULT_DNS_PORT: u16 = 53;

pub struct DnsServices {
    pub resolver: Arc<UdpZoneResolver>,
}

impl DnsServices {
    /// Build the resolver client from explicitly configured nameservers,
    /// falling back to the host's resolver configuration. An unreadable
    /// host configuration aborts startup.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let servers: Vec<String> = if config.resolver.nameservers.is_empty() {
            read_system_conf()
                .map_err(|e| anyhow::anyhow!("Cannot initialize the local resolver: {}", e))?
        } else {
            config
                .resolver
                .nameservers
                .iter()
                .map(|server| with_default_port(server))
                .collect()
        };

        info!(
            servers = servers.len(),
            timeout_secs = config.resolver.timeout_secs,
            "Upstream resolvers configured"
        );

        Ok(Self {
            resolver: Arc::new(UdpZoneResolver::new(
                servers,
                config.resolver.timeout_secs,
            )),
        })
    }
}

fn with_default_port(server: &str) -> String {
    if server.parse::<SocketAddr>().is_ok() {
        return server.to_string();
    }
    match server.parse::<IpAddr>() {
        Ok(ip) => SocketAddr::new(ip, DEFAULT_DNS_PORT).to_string(),
        Err(_) => server.to_string(),
    }
}
