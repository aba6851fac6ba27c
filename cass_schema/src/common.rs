use super::*;

/// Maximum length of a keyspace or table identifier accepted by the engine.
pub const MAX_IDENTIFIER_LENGTH: usize = 48;
/// Budget floor for the domain part of a keyspace name.
pub const MIN_KEYSPACE_PREFIX_LENGTH: usize = 26;
/// Token joining the domain and table parts of a keyspace name.
pub const KEYSPACE_SEPARATOR: &str = "_T_";

/// Physical name of the table holding the records of a logical table.
pub const DATA_TABLE_NAME: &str = "data";
/// Physical name of the companion table holding schema metadata.
pub const META_TABLE_NAME: &str = "meta";
/// Keyspace a session is bound to when no keyspace is requested.
pub const SYSTEM_KEYSPACE: &str = "system";

/// Synthetic version column injected when the index does not end in one.
pub const SYNTHETIC_TID_ATTRIBUTE: &str = "_tid";
/// Synthetic delete marker, present on every data table.
pub const DELETE_MARKER_ATTRIBUTE: &str = "_del";

pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

pub const LEVELED_COMPACTION_CLASS: &str = "LeveledCompactionStrategy";
pub const SIMPLE_REPLICATION_CLASS: &str = "SimpleStrategy";
pub const DEFAULT_REPLICATION_FACTOR: u32 = 1;

pub(crate) static RE_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("identifier regex is valid"));
pub(crate) static RE_IDENTIFIER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_]+").expect("identifier prefix regex is valid"));

#[derive(thiserror::Error, Debug)]
pub enum SchemaError {
    #[error("Malformed schema request: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid schema: {0}")]
    Validation(String),

    #[error("Statement failed: {statement}: {source}")]
    Engine {
        statement: String,
        #[source]
        source: EngineError,
    },

    #[error("Internal consistency fault: {0}")]
    Internal(String),
}

pub type SchemaResult<T> = Result<T, SchemaError>;

impl SchemaError {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        SchemaError::Validation(msg.into())
    }
}
