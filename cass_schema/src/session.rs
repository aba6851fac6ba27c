use super::*;

/// Failure reported by the storage-engine client: network, authorization,
/// already-existing objects or statements rejected by the engine.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct EngineError {
    pub message: String,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        EngineError {
            message: message.into(),
        }
    }
}

/// An open connection to the storage engine.
///
/// Every call blocks until the engine acknowledges or rejects the statement.
/// Implementations own their retry, timeout and thread-safety policies.
pub trait Session {
    /// Execute a single CQL statement at the given consistency level.
    fn execute(&self, cql: &str, consistency: Consistency) -> Result<(), EngineError>;

    /// Release the connection. The session is not used afterwards.
    fn close(&mut self);
}

/// Opens sessions against a cluster.
pub trait Connector {
    type Session: Session;

    fn connect(&self, keyspace: &str, hosts: &[String]) -> Result<Self::Session, EngineError>;
}
