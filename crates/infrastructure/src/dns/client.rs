use super::message_builder::{MessageBuilder, MAX_UDP_PAYLOAD};
use super::response_parser::ResponseParser;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;
use zonewatch_application::ports::{ZoneResolver, ZoneResponse};
use zonewatch_domain::{DomainError, RecordKind};

/// `ZoneResolver` adapter speaking plain UDP to the configured upstream
/// resolvers. Stateless per call: a fresh ephemeral socket per exchange,
/// bounded by a fixed timeout.
pub struct UdpZoneResolver {
    servers: Vec<String>,
    timeout: Duration,
}

impl UdpZoneResolver {
    /// `servers` entries are `ip:port` strings, tried in order.
    pub fn new(servers: Vec<String>, timeout_secs: u64) -> Self {
        Self {
            servers,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    async fn exchange(&self, server: &str, query_bytes: &[u8]) -> Result<ZoneResponse, DomainError> {
        let server_addr: SocketAddr = server
            .parse()
            .map_err(|e| DomainError::QueryFailed(format!("Invalid server address '{}': {}", server, e)))?;

        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind socket: {}", e)))?;

        socket
            .connect(server_addr)
            .await
            .map_err(|e| DomainError::QueryFailed(format!("Failed to connect to {}: {}", server, e)))?;

        socket
            .send(query_bytes)
            .await
            .map_err(|e| DomainError::QueryFailed(format!("Failed to send query: {}", e)))?;

        let mut response_buf = vec![0u8; MAX_UDP_PAYLOAD as usize];
        let len = tokio::time::timeout(self.timeout, socket.recv(&mut response_buf))
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| DomainError::QueryFailed(format!("Failed to receive response: {}", e)))?;

        ResponseParser::parse(&response_buf[..len])
    }
}

#[async_trait]
impl ZoneResolver for UdpZoneResolver {
    async fn query(
        &self,
        zone: &str,
        kind: RecordKind,
        dnssec_ok: bool,
    ) -> Result<ZoneResponse, DomainError> {
        if self.servers.is_empty() {
            return Err(DomainError::NoServersAvailable);
        }

        let query_bytes = MessageBuilder::build_query(zone, kind, dnssec_ok)?;

        let mut last_error = DomainError::NoServersAvailable;
        for server in &self.servers {
            match self.exchange(server, &query_bytes).await {
                Ok(response) => {
                    debug!(zone = %zone, kind = %kind, server = %server, "Query answered");
                    return Ok(response);
                }
                Err(e) if e.is_transport() => {
                    debug!(zone = %zone, server = %server, error = %e, "Resolver unreachable, trying next");
                    last_error = e;
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_server_list_is_rejected() {
        let resolver = UdpZoneResolver::new(Vec::new(), 5);

        let result = resolver.query("example.gov.", RecordKind::Ns, false).await;

        assert!(matches!(result, Err(DomainError::NoServersAvailable)));
    }
}
