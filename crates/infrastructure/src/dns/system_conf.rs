//! Host resolver configuration
//!
//! Reads the upstream resolvers from the platform's standard location,
//! `/etc/resolv.conf`. An unreadable or unparseable file is fatal to
//! startup: without it zonewatch has no resolver to ask.

use std::io;
use std::net::SocketAddr;
use std::path::Path;

const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";
const DEFAULT_PORT: u16 = 53;

/// Nameservers from the host configuration, as `ip:port` strings in
/// file order.
pub fn read_system_conf() -> io::Result<Vec<String>> {
    read_resolv_conf(RESOLV_CONF_PATH)
}

fn read_resolv_conf<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let data = std::fs::read_to_string(path)?;
    parse_resolv_conf(&data)
}

pub fn parse_resolv_conf(data: &str) -> io::Result<Vec<String>> {
    let parsed = resolv_conf::Config::parse(data).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Error parsing resolv.conf: {:?}", e),
        )
    })?;

    Ok(parsed
        .nameservers
        .iter()
        .map(|ip| SocketAddr::new(ip.into(), DEFAULT_PORT).to_string())
        .collect())
}
