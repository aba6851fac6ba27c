#[macro_use]
extern crate log;

mod common;
mod config;
mod consistency;
mod ddl;
mod identifier;
mod normalize;
mod schema;
mod service;
mod session;
mod tid;
mod types;

pub use common::*;
pub use config::{ServiceConfig, ServiceConfigBuilder};
pub use consistency::{resolve_consistency, Consistency};
pub use ddl::{create_keyspace, create_table, drop_keyspace, secondary_index_names, Replication};
pub use identifier::{hash_key, is_valid_identifier, keyspace_name, make_valid_key, quote_identifier};
pub use normalize::validate_and_normalize;
pub use schema::{IndexEntry, IndexType, Order, Schema};
pub use service::{CreateTableReport, SchemaService};
pub use session::{Connector, EngineError, Session};
pub use tid::tid_from_date;
pub use types::{cql_type_for, AttributeType, ScalarType};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
