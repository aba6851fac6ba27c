use super::*;

pub struct ServiceConfigBuilder {
    keyspace: Option<String>,
    hosts: Option<Vec<String>>,
    default_consistency: Option<Consistency>,
    replication_factor: Option<u32>,
}

impl ServiceConfigBuilder {
    pub fn new() -> ServiceConfigBuilder {
        ServiceConfigBuilder {
            keyspace: None,
            hosts: None,
            default_consistency: None,
            replication_factor: None,
        }
    }

    /// The keyspace the session is bound to. Empty or unset means `system`.
    pub fn keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = Some(keyspace.into());
        self
    }

    /// Contact points of the cluster.
    pub fn hosts(mut self, hosts: Vec<impl Into<String>>) -> Self {
        self.hosts = Some(hosts.into_iter().map(|h| h.into()).collect());
        self
    }

    /// The consistency level used when a request does not name one, and for
    /// dropping tables.
    /// The default is Consistency::One.
    pub fn default_consistency(mut self, consistency: Consistency) -> Self {
        self.default_consistency = Some(consistency);
        self
    }

    /// Number of replicas of newly created keyspaces.
    /// The default is 1.
    pub fn replication_factor(mut self, replication_factor: u32) -> Self {
        self.replication_factor = Some(replication_factor);
        self
    }

    pub fn build(self) -> SchemaResult<ServiceConfig> {
        let hosts = self
            .hosts
            .filter(|hosts| !hosts.is_empty())
            .ok_or_else(|| SchemaError::validation("At least one host is required"))?;

        let replication_factor = self.replication_factor.unwrap_or(DEFAULT_REPLICATION_FACTOR);
        if replication_factor == 0 {
            return Err(SchemaError::validation("Replication factor must be positive"));
        }

        Ok(ServiceConfig {
            keyspace: self
                .keyspace
                .filter(|keyspace| !keyspace.is_empty())
                .unwrap_or(SYSTEM_KEYSPACE.to_string()),
            hosts,
            default_consistency: self.default_consistency.unwrap_or_default(),
            replication: Replication {
                factor: replication_factor,
            },
        })
    }

    /// Open a session through `connector` and wrap it in a [`SchemaService`].
    pub fn connect<C: Connector>(self, connector: &C) -> SchemaResult<SchemaService<C::Session>> {
        SchemaService::connect(connector, self.build()?)
    }
}

impl Default for ServiceConfigBuilder {
    fn default() -> Self {
        ServiceConfigBuilder::new()
    }
}

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub keyspace: String,
    pub hosts: Vec<String>,
    pub default_consistency: Consistency,
    pub replication: Replication,
}
