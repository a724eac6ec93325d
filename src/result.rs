//! The computed result of one query, as handed over by the repository.

use std::collections::HashSet;
use std::sync::Arc;
use std::vec;

use chrono_tz::Tz;

use crate::datatype::{PropertyType, Tuple};
use crate::error::{Result, RowbindError};
use crate::node::{NodeRef, NodeSequence};
use crate::sequence::RowSequence;
use crate::settings::AdapterConfig;

#[derive(Debug, Clone)]
pub struct QueryResult {
    columns: Arc<[String]>,
    column_types: Option<Vec<PropertyType>>,
    nodes: Arc<[NodeRef]>,
    tuples: Vec<Tuple>,
    plan: Option<String>,
    warnings: Vec<String>,
    zone: Tz,
}

impl QueryResult {
    /// Column names must be unique; tuples are checked against them lazily, row by row.
    pub fn new(columns: Vec<String>, nodes: Vec<NodeRef>, tuples: Vec<Tuple>, config: &AdapterConfig) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(RowbindError::DuplicateColumn(column.clone()));
            }
        }
        Ok(Self {
            columns: columns.into(),
            column_types: None,
            nodes: nodes.into(),
            tuples,
            plan: None,
            warnings: Vec::new(),
            zone: config.zone()?,
        })
    }
    pub fn with_column_types(mut self, types: Vec<PropertyType>) -> Result<Self> {
        if types.len() != self.columns.len() {
            return Err(RowbindError::Load(format!(
                "expected {} column types, found {}",
                self.columns.len(),
                types.len()
            )));
        }
        self.column_types = Some(types);
        Ok(self)
    }
    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }
    pub fn column_types(&self) -> Option<&[PropertyType]> {
        self.column_types.as_deref()
    }
    /// Names of the bound nodes, which double as selector names.
    pub fn selector_names(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.name()).collect()
    }
    pub fn plan(&self) -> Option<&str> {
        self.plan.as_deref()
    }
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
    pub fn zone(&self) -> Tz {
        self.zone
    }
    pub fn is_empty(&self) -> bool {
        self.tuples.is_empty()
    }

    pub fn nodes(&self) -> NodeSequence {
        NodeSequence::new(Arc::clone(&self.nodes))
    }
    /// A new forward pass over the rows.
    pub fn rows(&self) -> RowSequence<vec::IntoIter<Tuple>> {
        RowSequence::new(
            Arc::clone(&self.columns),
            Arc::clone(&self.nodes),
            self.tuples.clone().into_iter(),
            self.tuples.len() as u64,
            self.zone,
        )
    }
}
