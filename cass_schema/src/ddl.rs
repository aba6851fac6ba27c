use super::*;

/// Replication policy of created keyspaces: a single datacenter with a fixed
/// number of replicas.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Replication {
    pub factor: u32,
}

impl Default for Replication {
    fn default() -> Self {
        Replication {
            factor: DEFAULT_REPLICATION_FACTOR,
        }
    }
}

pub fn create_keyspace(keyspace: &str, replication: &Replication) -> String {
    format!(
        "CREATE KEYSPACE {} WITH REPLICATION = {{ 'class': '{}', 'replication_factor': {} }}",
        quote_identifier(keyspace),
        SIMPLE_REPLICATION_CLASS,
        replication.factor
    )
}

pub fn drop_keyspace(keyspace: &str) -> String {
    format!("DROP KEYSPACE {}", quote_identifier(keyspace))
}

/// Render the `CREATE TABLE` statement of a normalized schema.
///
/// Columns are emitted in attribute name order. Hash entries form the
/// partition key and range entries the clustering key, both in index order.
pub fn create_table(keyspace: &str, table: &str, schema: &Schema) -> SchemaResult<String> {
    let mut columns = Vec::with_capacity(schema.attributes.len());
    for (attribute, attribute_type) in &schema.attributes {
        let mut column = format!("{} {}", quote_identifier(attribute), cql_type_for(attribute_type)?);
        if schema
            .index
            .iter()
            .any(|entry| entry.index_type == IndexType::Static && &entry.attribute == attribute)
        {
            column.push_str(" static");
        }
        columns.push(column);
    }

    let mut partition_key = Vec::new();
    let mut clustering_key = Vec::new();
    let mut clustering_order = Vec::new();
    for entry in &schema.index {
        let name = quote_identifier(&entry.attribute);
        match entry.index_type {
            IndexType::Hash => partition_key.push(name),
            IndexType::Range => {
                let order = entry.order.unwrap_or(Order::Desc);
                clustering_order.push(format!("{} {}", name, order.as_cql()));
                clustering_key.push(name);
            }
            IndexType::Static | IndexType::Proj => {}
        }
    }
    if partition_key.is_empty() {
        return Err(SchemaError::Internal(format!(
            "Schema of {} has no partition key",
            table
        )));
    }

    let mut primary_key = vec![format!("({})", partition_key.join(", "))];
    primary_key.extend(clustering_key);

    let mut cql = format!(
        "CREATE TABLE {}.{} ({}, PRIMARY KEY ({})) WITH compaction = {{ 'class' : '{}' }}",
        quote_identifier(keyspace),
        quote_identifier(table),
        columns.join(", "),
        primary_key.join(", "),
        LEVELED_COMPACTION_CLASS
    );
    if !clustering_order.is_empty() {
        cql.push_str(&format!(
            " AND CLUSTERING ORDER BY ({})",
            clustering_order.join(", ")
        ));
    }
    Ok(cql)
}

/// Secondary indexes declared by the schema. They are validated but have no
/// physical counterpart yet.
pub fn secondary_index_names(schema: &Schema) -> Vec<String> {
    schema
        .secondary_indexes
        .as_ref()
        .map(|indexes| indexes.keys().cloned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized(json: &str) -> Schema {
        let mut schema = Schema::from_json(json.as_bytes()).unwrap();
        validate_and_normalize(&mut schema).unwrap();
        schema
    }

    #[test]
    fn test_create_keyspace() {
        assert_eq!(
            create_keyspace("org_wikipedia_en_T_simpleTable", &Replication::default()),
            "CREATE KEYSPACE \"org_wikipedia_en_T_simpleTable\" WITH REPLICATION = \
             { 'class': 'SimpleStrategy', 'replication_factor': 1 }"
        );
        assert!(create_keyspace("ks", &Replication { factor: 3 }).ends_with("'replication_factor': 3 }"));
    }

    #[test]
    fn test_drop_keyspace() {
        assert_eq!(drop_keyspace("ks"), "DROP KEYSPACE \"ks\"");
    }

    #[test]
    fn test_simple_table() {
        let schema = normalized(
            r#"{
                "table": "simpleTable",
                "attributes": {
                    "key": "string",
                    "tid": "timeuuid",
                    "latestTid": "timeuuid",
                    "body": "blob",
                    "content-length": "varint",
                    "restrictions": "set<string>"
                },
                "index": [
                    { "attribute": "key", "type": "hash" },
                    { "attribute": "latestTid", "type": "static" },
                    { "attribute": "tid", "type": "range", "order": "desc" }
                ]
            }"#,
        );

        assert_eq!(
            create_table("ks", "data", &schema).unwrap(),
            "CREATE TABLE \"ks\".\"data\" (\
             \"_del\" timeuuid, \
             \"body\" blob, \
             \"content-length\" varint, \
             \"key\" text, \
             \"latestTid\" timeuuid static, \
             \"restrictions\" set<text>, \
             \"tid\" timeuuid, \
             PRIMARY KEY ((\"key\"), \"tid\")) \
             WITH compaction = { 'class' : 'LeveledCompactionStrategy' } \
             AND CLUSTERING ORDER BY (\"tid\" desc)"
        );
    }

    #[test]
    fn test_multi_range_table() {
        let schema = normalized(
            r#"{
                "table": "multiRangeTable",
                "attributes": { "key": "string", "tid": "timeuuid", "uri": "string" },
                "index": [
                    { "attribute": "key", "type": "hash" },
                    { "attribute": "tid", "type": "range", "order": "desc" },
                    { "attribute": "uri", "type": "range", "order": "desc" }
                ]
            }"#,
        );
        let cql = create_table("ks", "data", &schema).unwrap();

        // The trailing range is not a timeuuid, so a version column is appended.
        // The declared clustering columns keep their order ahead of it.
        assert!(
            cql.contains("PRIMARY KEY ((\"key\"), \"tid\", \"uri\", \"_tid\"))"),
            "{}",
            cql
        );
        assert!(
            cql.ends_with("CLUSTERING ORDER BY (\"tid\" desc, \"uri\" desc, \"_tid\" desc)"),
            "{}",
            cql
        );
    }

    #[test]
    fn test_clustering_follows_declaration_order() {
        let schema = Schema::from_json(
            br#"{
                "table": "multiRangeTable",
                "attributes": { "key": "string", "tid": "timeuuid", "uri": "string" },
                "index": [
                    { "attribute": "key", "type": "hash" },
                    { "attribute": "tid", "type": "range", "order": "desc" },
                    { "attribute": "uri", "type": "range", "order": "desc" }
                ]
            }"#,
        )
        .unwrap();
        let cql = create_table("ks", "data", &schema).unwrap();
        assert!(cql.contains("PRIMARY KEY ((\"key\"), \"tid\", \"uri\"))"), "{}", cql);
        assert!(
            cql.ends_with("CLUSTERING ORDER BY (\"tid\" desc, \"uri\" desc)"),
            "{}",
            cql
        );
    }

    #[test]
    fn test_composite_partition_key() {
        let schema = normalized(
            r#"{
                "table": "t",
                "attributes": { "a": "string", "b": "int", "ts": "timestamp" },
                "index": [
                    { "attribute": "a", "type": "hash" },
                    { "attribute": "b", "type": "hash" },
                    { "attribute": "ts", "type": "range", "order": "asc" }
                ]
            }"#,
        );
        let cql = create_table("ks", "data", &schema).unwrap();
        assert!(cql.contains("PRIMARY KEY ((\"a\", \"b\"), \"ts\", \"_tid\"))"), "{}", cql);
        assert!(cql.contains("(\"ts\" asc, \"_tid\" desc)"), "{}", cql);
    }

    #[test]
    fn test_meta_table_has_no_clustering() {
        let cql = create_table("ks", META_TABLE_NAME, &Schema::meta()).unwrap();
        assert_eq!(
            cql,
            "CREATE TABLE \"ks\".\"meta\" (\"key\" text, \"value\" text, PRIMARY KEY ((\"key\"))) \
             WITH compaction = { 'class' : 'LeveledCompactionStrategy' }"
        );
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let json = r#"{
            "table": "t",
            "attributes": { "z": "string", "a": "blob", "m": "set<uuid>", "k": "string" },
            "index": [{ "attribute": "k", "type": "hash" }]
        }"#;
        let first = create_table("ks", "data", &normalized(json)).unwrap();
        let second = create_table("ks", "data", &normalized(json)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unmapped_type_is_internal_fault() {
        let mut schema = Schema::meta();
        schema
            .attributes
            .insert("score".to_string(), "float".to_string());
        assert!(matches!(
            create_table("ks", "meta", &schema),
            Err(SchemaError::Internal(_))
        ));
    }

    #[test]
    fn test_secondary_index_names() {
        let schema = normalized(
            r#"{
                "table": "t",
                "attributes": { "key": "string", "uri": "string", "body": "blob" },
                "index": [{ "attribute": "key", "type": "hash" }],
                "secondaryIndexes": {
                    "by_uri": [
                        { "attribute": "uri", "type": "hash" },
                        { "attribute": "body", "type": "proj" }
                    ]
                }
            }"#,
        );
        assert_eq!(secondary_index_names(&schema), vec!["by_uri".to_string()]);
        assert!(secondary_index_names(&Schema::meta()).is_empty());
    }
}
