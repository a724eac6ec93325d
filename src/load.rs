//! JSON documents describing a computed result.
//!
//! ```json
//! {
//!   "columns": ["propA", "propB", "propG"],
//!   "column_types": ["STRING", "LONG", "DATE"],
//!   "nodes": [{ "name": "node1", "path": "/typeA/node1" }],
//!   "tuples": [[{ "String": "r1c1" }, { "Long": 1 }, { "Timestamp": 1088559550201 }]]
//! }
//! ```
//!
//! A node without a `path` loads fine but fails path resolution.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::debug;

use crate::datatype::{PropertyType, StoredValue, Tuple};
use crate::error::{Result, RowbindError};
use crate::node::{NodeRef, RepositoryNode};
use crate::result::QueryResult;
use crate::settings::AdapterConfig;

#[derive(Debug, Deserialize)]
pub struct ResultDocument {
    pub columns: Vec<String>,
    #[serde(default)]
    pub column_types: Option<Vec<String>>,
    #[serde(default)]
    pub nodes: Vec<NodeDocument>,
    #[serde(default)]
    pub tuples: Vec<Vec<Option<CellDocument>>>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct NodeDocument {
    pub name: String,
    #[serde(default)]
    pub path: Option<String>,
}

/// A non-null cell, tagged with the type it is stored as.
#[derive(Debug, Deserialize)]
pub enum CellDocument {
    Boolean(bool),
    Long(i64),
    Double(f64),
    /// Decimal digits, kept as text to preserve precision.
    Decimal(String),
    /// Milliseconds since the epoch.
    Timestamp(i64),
    /// An RFC 3339 date-time with its offset.
    Date(String),
    /// Text stored as raw bytes.
    Bytes(String),
    String(String),
}

impl CellDocument {
    fn into_stored(self) -> Result<StoredValue> {
        let stored = match self {
            CellDocument::Boolean(b) => StoredValue::Boolean(b),
            CellDocument::Long(l) => StoredValue::Long(l),
            CellDocument::Double(d) => StoredValue::Double(d),
            CellDocument::Decimal(d) => StoredValue::Decimal(
                BigDecimal::from_str(&d).map_err(|e| RowbindError::Load(format!("Bad decimal {}: {}", d, e)))?,
            ),
            CellDocument::Timestamp(ms) => StoredValue::timestamp_millis(ms)
                .ok_or_else(|| RowbindError::Load(format!("Timestamp out of range: {}", ms)))?,
            CellDocument::Date(d) => {
                let parsed = DateTime::parse_from_rfc3339(&d)
                    .map_err(|e| RowbindError::Load(format!("Bad date {}: {}", d, e)))?;
                StoredValue::Timestamp(parsed.with_timezone(&Utc))
            }
            CellDocument::Bytes(s) => StoredValue::Bytes(s.into_bytes()),
            CellDocument::String(s) => StoredValue::String(s),
        };
        Ok(stored)
    }
}

impl ResultDocument {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn into_result(self, config: &AdapterConfig) -> Result<QueryResult> {
        let nodes: Vec<NodeRef> = self
            .nodes
            .into_iter()
            .map(|n| RepositoryNode::shared(n.name, n.path))
            .collect();
        let tuples = self
            .tuples
            .into_iter()
            .map(|cells| {
                cells
                    .into_iter()
                    .map(|cell| cell.map(CellDocument::into_stored).transpose())
                    .collect::<Result<Tuple>>()
            })
            .collect::<Result<Vec<Tuple>>>()?;
        debug!(columns = self.columns.len(), tuples = tuples.len(), "result document loaded");
        let mut result = QueryResult::new(self.columns, nodes, tuples, config)?;
        if let Some(types) = self.column_types {
            let types = types
                .iter()
                .map(|t| t.parse::<PropertyType>())
                .collect::<Result<Vec<_>>>()?;
            result = result.with_column_types(types)?;
        }
        if let Some(plan) = self.plan {
            result = result.with_plan(plan);
        }
        for warning in self.warnings {
            result = result.with_warning(warning);
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::RangeIterator;

    const DOC: &str = r#"{
        "columns": ["propA", "propB", "propC", "propG", "propH"],
        "column_types": ["STRING", "LONG", "PATH", "DATE", "BINARY"],
        "nodes": [{ "name": "node1", "path": "/typeA/node1" }],
        "tuples": [
            [{ "String": "r1c1" }, { "Long": 1 }, null, { "Timestamp": 1088559550201 }, { "Bytes": "Heres my data at r1" }],
            [{ "String": "r2c1" }, { "Long": 2 }, null, { "Date": "2004-06-30T02:39:10.201+01:00" }, null]
        ],
        "plan": "scan typeA"
    }"#;

    #[test]
    fn loads_a_full_document() {
        let result = ResultDocument::from_json(DOC)
            .unwrap()
            .into_result(&AdapterConfig::default())
            .unwrap();
        assert_eq!(result.column_names().len(), 5);
        assert_eq!(result.column_types().unwrap()[2], PropertyType::Path);
        assert_eq!(result.plan(), Some("scan typeA"));
        let mut rows = result.rows();
        assert_eq!(rows.size(), 2);
        let first = rows.next_row().unwrap();
        assert_eq!(first.path().unwrap(), "/typeA/node1");
        assert_eq!(first.value("propH").unwrap().unwrap().binary().unwrap().size(), 19);
        let second = rows.next_row().unwrap();
        assert_eq!(
            first.value("propG").unwrap().unwrap().date().unwrap(),
            second.value("propG").unwrap().unwrap().date().unwrap()
        );
    }

    #[test]
    fn bad_cells_fail_the_load() {
        let doc = r#"{ "columns": ["a"], "tuples": [[{ "Decimal": "one" }]] }"#;
        let err = ResultDocument::from_json(doc)
            .unwrap()
            .into_result(&AdapterConfig::default())
            .unwrap_err();
        assert!(matches!(err, RowbindError::Load(_)));
        assert!(ResultDocument::from_json("{").is_err());
    }
}
