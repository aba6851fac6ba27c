use super::*;

/// Validate a schema request and complete it in place: default range orders,
/// inject the delete marker and the version column, and build the key index.
pub fn validate_and_normalize(schema: &mut Schema) -> SchemaResult<()> {
    if schema.table.is_empty() {
        return Err(SchemaError::validation("Table name required"));
    }

    if schema.version == 0 {
        schema.version = SUPPORTED_SCHEMA_VERSION;
    } else if schema.version != SUPPORTED_SCHEMA_VERSION {
        return Err(SchemaError::validation(format!(
            "Schema version {} expected, got {}",
            SUPPORTED_SCHEMA_VERSION, schema.version
        )));
    }

    validate_attributes(schema)?;
    validate_index(&mut schema.index, "index")?;
    for entry in &schema.index {
        if !schema.attributes.contains_key(&entry.attribute) {
            return Err(SchemaError::validation(format!(
                "Index attribute \"{}\" is not declared",
                entry.attribute
            )));
        }
    }
    validate_reserved_attributes(schema)?;

    if let Some(secondary_indexes) = schema.secondary_indexes.as_mut() {
        if secondary_indexes.is_empty() {
            return Err(SchemaError::validation(
                "secondaryIndexes must not be empty when present",
            ));
        }
        for (name, index) in secondary_indexes.iter_mut() {
            validate_index(index, &format!("secondary index \"{}\"", name))?;
        }
    }

    make_schema_info(schema);
    Ok(())
}

fn validate_attributes(schema: &Schema) -> SchemaResult<()> {
    for (name, attribute_type) in &schema.attributes {
        if AttributeType::parse(attribute_type).is_none() {
            return Err(SchemaError::validation(format!(
                "Attribute \"{}\" has unsupported type \"{}\"",
                name, attribute_type
            )));
        }
    }
    Ok(())
}

/// `_del` is always injected, so it cannot be declared. A declared `_tid` is
/// only accepted where it would be reused as the version column.
fn validate_reserved_attributes(schema: &Schema) -> SchemaResult<()> {
    let declared = |name: &str| {
        schema.attributes.contains_key(name) || schema.index.iter().any(|e| e.attribute == name)
    };

    if declared(DELETE_MARKER_ATTRIBUTE) {
        return Err(SchemaError::validation(format!(
            "Attribute \"{}\" is reserved",
            DELETE_MARKER_ATTRIBUTE
        )));
    }

    if declared(SYNTHETIC_TID_ATTRIBUTE) {
        let reusable = schema.index.last().map_or(false, |entry| {
            entry.attribute == SYNTHETIC_TID_ATTRIBUTE
                && entry.index_type == IndexType::Range
                && entry.order == Some(Order::Desc)
        }) && schema.attributes.get(SYNTHETIC_TID_ATTRIBUTE).map(String::as_str)
            == Some("timeuuid");
        if !reusable {
            return Err(SchemaError::validation(format!(
                "Attribute \"{}\" is reserved unless it is the last range index, \
                 ordered desc, of type timeuuid",
                SYNTHETIC_TID_ATTRIBUTE
            )));
        }
    }
    Ok(())
}

/// Require a hash entry and default the order of range entries.
fn validate_index(index: &mut [IndexEntry], what: &str) -> SchemaResult<()> {
    if index.is_empty() {
        return Err(SchemaError::validation(format!("Invalid {}: no entries", what)));
    }

    let mut have_hash = false;
    for entry in index.iter_mut() {
        match entry.index_type {
            IndexType::Hash => have_hash = true,
            IndexType::Range => {
                if entry.order.is_none() {
                    entry.order = Some(Order::Desc);
                }
            }
            IndexType::Static | IndexType::Proj => {}
        }
    }

    if !have_hash {
        return Err(SchemaError::validation(format!(
            "Invalid {}: indexes without hash are not supported",
            what
        )));
    }
    Ok(())
}

/// Decide the version column and fill in the derived fields.
fn make_schema_info(schema: &mut Schema) {
    schema.versioned = false;
    schema
        .attributes
        .insert(DELETE_MARKER_ATTRIBUTE.to_string(), "timeuuid".to_string());

    let reusable_tid = schema
        .index
        .last()
        .filter(|entry| {
            entry.index_type == IndexType::Range
                && entry.order == Some(Order::Desc)
                && schema.attributes.get(&entry.attribute).map(String::as_str) == Some("timeuuid")
        })
        .map(|entry| entry.attribute.clone());

    schema.tid = match reusable_tid {
        Some(tid) => {
            debug!("Using \"{}\" as version column of {}", tid, schema.table);
            tid
        }
        None => {
            debug!("Injecting {} into {}", SYNTHETIC_TID_ATTRIBUTE, schema.table);
            schema
                .attributes
                .insert(SYNTHETIC_TID_ATTRIBUTE.to_string(), "timeuuid".to_string());
            schema
                .index
                .push(IndexEntry::range(SYNTHETIC_TID_ATTRIBUTE, Order::Desc));
            SYNTHETIC_TID_ATTRIBUTE.to_string()
        }
    };

    schema.build_key_index();
}
