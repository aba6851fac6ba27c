use super::*;

/// Role of an attribute in an index.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexType {
    /// Part of the partition key.
    Hash,
    /// Part of the clustering key.
    Range,
    /// Stored once per partition.
    Static,
    /// Projected into a secondary index.
    Proj,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_cql(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub attribute: String,
    #[serde(rename = "type")]
    pub index_type: IndexType,
    /// Only meaningful for `range` entries, where it defaults to `desc`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl IndexEntry {
    pub fn new(attribute: impl Into<String>, index_type: IndexType) -> Self {
        IndexEntry {
            attribute: attribute.into(),
            index_type,
            order: None,
        }
    }

    pub fn range(attribute: impl Into<String>, order: Order) -> Self {
        IndexEntry {
            attribute: attribute.into(),
            index_type: IndexType::Range,
            order: Some(order),
        }
    }

    pub fn is_key(&self) -> bool {
        matches!(self.index_type, IndexType::Hash | IndexType::Range)
    }
}

/// Storage-neutral description of a logical table.
///
/// Built from a request payload, completed in place by
/// [`validate_and_normalize`](crate::validate_and_normalize) and then rendered
/// by [`create_table`](crate::create_table). The derived fields are never read
/// from the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub table: String,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub index: Vec<IndexEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_indexes: Option<BTreeMap<String, Vec<IndexEntry>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consistency: Option<String>,

    /// Attributes of the `hash` and `range` entries, in index order.
    #[serde(skip_deserializing)]
    pub i_keys: Vec<String>,
    /// Index entry of every indexed attribute.
    #[serde(skip_deserializing)]
    pub i_key_map: BTreeMap<String, IndexEntry>,
    /// Name of the version column.
    #[serde(skip_deserializing)]
    pub tid: String,
    /// Reserved, always false.
    #[serde(skip_deserializing)]
    pub versioned: bool,
}

impl Schema {
    pub fn from_json(bytes: &[u8]) -> SchemaResult<Schema> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Schema of the companion table storing metadata next to every data table:
    /// a JSON `value` per string `key`.
    pub fn meta() -> Schema {
        let index = vec![IndexEntry::new("key", IndexType::Hash)];
        let mut schema = Schema {
            version: SUPPORTED_SCHEMA_VERSION,
            table: META_TABLE_NAME.to_string(),
            attributes: BTreeMap::from([
                ("key".to_string(), "string".to_string()),
                ("value".to_string(), "json".to_string()),
            ]),
            index,
            ..Default::default()
        };
        schema.build_key_index();
        schema
    }

    /// Index entry of `attribute` in the primary index, if any.
    pub fn index_entry(&self, attribute: &str) -> Option<&IndexEntry> {
        self.i_key_map.get(attribute)
    }

    /// Fill `i_keys` and `i_key_map` from the primary index.
    pub(crate) fn build_key_index(&mut self) {
        self.i_keys = self
            .index
            .iter()
            .filter(|entry| entry.is_key())
            .map(|entry| entry.attribute.clone())
            .collect();
        self.i_key_map = self
            .index
            .iter()
            .map(|entry| (entry.attribute.clone(), entry.clone()))
            .collect();
    }
}
