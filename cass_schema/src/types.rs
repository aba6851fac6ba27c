use super::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ScalarType {
    String,
    Blob,
    Boolean,
    Decimal,
    Double,
    /// Arbitrary-precision integer. `int` and `varint` both map here.
    Varint,
    Uuid,
    Timeuuid,
    Timestamp,
    /// JSON documents, stored as text.
    Json,
}

impl ScalarType {
    pub fn parse(name: &str) -> Option<ScalarType> {
        let scalar = match name {
            "string" => ScalarType::String,
            "blob" => ScalarType::Blob,
            "boolean" => ScalarType::Boolean,
            "decimal" => ScalarType::Decimal,
            "double" => ScalarType::Double,
            "int" | "varint" => ScalarType::Varint,
            "uuid" => ScalarType::Uuid,
            "timeuuid" => ScalarType::Timeuuid,
            "timestamp" => ScalarType::Timestamp,
            "json" => ScalarType::Json,
            _ => return None,
        };
        Some(scalar)
    }

    pub fn cql_type(&self) -> &'static str {
        match self {
            ScalarType::String | ScalarType::Json => "text",
            ScalarType::Blob => "blob",
            ScalarType::Boolean => "boolean",
            ScalarType::Decimal => "decimal",
            ScalarType::Double => "double",
            ScalarType::Varint => "varint",
            ScalarType::Uuid => "uuid",
            ScalarType::Timeuuid => "timeuuid",
            ScalarType::Timestamp => "timestamp",
        }
    }
}

/// Storage-neutral attribute type of a schema request.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum AttributeType {
    Scalar(ScalarType),
    Set(ScalarType),
}

impl AttributeType {
    /// Parse `string`, `set<string>`, ... Returns `None` for anything outside
    /// the supported set.
    pub fn parse(name: &str) -> Option<AttributeType> {
        match name
            .strip_prefix("set<")
            .and_then(|rest| rest.strip_suffix('>'))
        {
            Some(inner) => ScalarType::parse(inner).map(AttributeType::Set),
            None => ScalarType::parse(name).map(AttributeType::Scalar),
        }
    }

    pub fn cql_type(&self) -> String {
        match self {
            AttributeType::Scalar(scalar) => scalar.cql_type().to_string(),
            AttributeType::Set(scalar) => format!("set<{}>", scalar.cql_type()),
        }
    }
}

/// CQL column type of an attribute type name. Normalization rejects unknown
/// types, so a failure here means an unnormalized schema reached synthesis.
pub fn cql_type_for(name: &str) -> SchemaResult<String> {
    AttributeType::parse(name)
        .map(|attribute_type| attribute_type.cql_type())
        .ok_or_else(|| SchemaError::Internal(format!("No column type for \"{}\"", name)))
}
