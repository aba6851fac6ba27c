use super::*;

/// Outcome of a successful [`SchemaService::create_table`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CreateTableReport {
    pub keyspace: String,
    pub consistency: Consistency,
    /// Statements executed, in order.
    pub statements: Vec<String>,
    /// Declared secondary indexes that were validated but not created.
    pub skipped_secondary_indexes: Vec<String>,
}

/// Creates and drops logical tables on a Cassandra-style cluster.
///
/// Every logical table lives in a keyspace of its own, derived from the
/// owning domain and the table name, holding a `data` and a `meta` table.
pub struct SchemaService<S: Session> {
    config: ServiceConfig,
    session: S,
}

impl SchemaService<Box<dyn Session>> {
    /// Create a new service configuration builder.
    pub fn configure() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }
}

impl<S: Session> SchemaService<S> {
    pub fn connect<C>(connector: &C, config: ServiceConfig) -> SchemaResult<SchemaService<S>>
    where
        C: Connector<Session = S>,
    {
        info!(
            "Connecting to {} (keyspace {})",
            config.hosts.join(","),
            config.keyspace
        );
        let session = connector
            .connect(&config.keyspace, &config.hosts)
            .map_err(|source| SchemaError::Engine {
                statement: format!("connect {}", config.hosts.join(",")),
                source,
            })?;
        Ok(SchemaService { config, session })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Keyspace holding the tables of `table` in `namespace`.
    pub fn keyspace_for(&self, namespace: &str, table: &str) -> String {
        keyspace_name(namespace, table)
    }

    /// Create the keyspace, data table and metadata table of the logical table
    /// described by the JSON `request`.
    ///
    /// The statements run in that order and the first failure is returned.
    /// Nothing is rolled back: a failure may leave the keyspace behind.
    pub fn create_table(&self, namespace: &str, request: &[u8]) -> SchemaResult<CreateTableReport> {
        let mut schema = Schema::from_json(request)?;
        let consistency =
            resolve_consistency(schema.consistency.as_deref(), self.config.default_consistency)?;

        validate_and_normalize(&mut schema)?;
        let meta_schema = Schema::meta();
        if log_enabled!(log::Level::Debug) {
            if let Ok(json) = serde_json::to_string(&schema) {
                debug!("Normalized schema of {}: {}", schema.table, json);
            }
        }

        let keyspace = keyspace_name(namespace, &schema.table);
        let statements = vec![
            create_keyspace(&keyspace, &self.config.replication),
            create_table(&keyspace, DATA_TABLE_NAME, &schema)?,
            create_table(&keyspace, META_TABLE_NAME, &meta_schema)?,
        ];

        let skipped_secondary_indexes = secondary_index_names(&schema);
        if !skipped_secondary_indexes.is_empty() {
            warn!(
                "Secondary indexes of {} are not supported and were not created: {}",
                schema.table,
                skipped_secondary_indexes.join(", ")
            );
        }

        for statement in &statements {
            self.execute(statement, consistency)?;
        }

        Ok(CreateTableReport {
            keyspace,
            consistency,
            statements,
            skipped_secondary_indexes,
        })
    }

    /// Drop the keyspace of a logical table, removing its data and metadata
    /// tables together. This cannot be undone.
    pub fn drop_table(&self, namespace: &str, table: &str) -> SchemaResult<()> {
        let keyspace = keyspace_name(namespace, table);
        self.execute(&drop_keyspace(&keyspace), self.config.default_consistency)
    }

    /// Close the underlying session.
    pub fn close(mut self) {
        info!("Closing session to {}", self.config.hosts.join(","));
        self.session.close();
    }

    fn execute(&self, statement: &str, consistency: Consistency) -> SchemaResult<()> {
        info!("{} (consistency {})", statement, consistency);
        self.session
            .execute(statement, consistency)
            .map_err(|source| SchemaError::Engine {
                statement: statement.to_string(),
                source,
            })
    }
}

impl Session for Box<dyn Session> {
    fn execute(&self, cql: &str, consistency: Consistency) -> Result<(), EngineError> {
        (**self).execute(cql, consistency)
    }

    fn close(&mut self) {
        (**self).close()
    }
}
