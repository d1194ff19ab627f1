use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid zone name: {0}")]
    InvalidZoneName(String),

    #[error("No name server to answer the question")]
    NoServersAvailable,

    #[error("Query failed: {0}")]
    QueryFailed(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Transport-level failures may be retried against another resolver;
    /// protocol-level failures must not be.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            DomainError::QueryTimeout | DomainError::QueryFailed(_)
        )
    }
}
