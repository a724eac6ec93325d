use std::sync::Arc;

use chrono_tz::Tz;

use crate::datatype::{StoredValue, Tuple};
use crate::error::{Result, RowbindError};
use crate::node::NodeRef;
use crate::value::Value;

// ------------- Row -------------
/// One tuple bound to the nodes of its result. Immutable once bound; values
/// are only materialized when asked for.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Arc<[String]>,
    nodes: Arc<[NodeRef]>,
    tuple: Arc<[Option<StoredValue>]>,
    zone: Tz,
}

impl Row {
    /// Binds a tuple to its result's columns and nodes. A tuple whose length
    /// differs from the column count cannot be reconciled.
    pub fn bind(columns: Arc<[String]>, nodes: Arc<[NodeRef]>, tuple: Tuple, zone: Tz) -> Result<Self> {
        if tuple.len() != columns.len() {
            return Err(RowbindError::MalformedTuple { expected: columns.len(), found: tuple.len() });
        }
        Ok(Self { columns, nodes, tuple: tuple.into(), zone })
    }

    fn single_node(&self) -> Result<&NodeRef> {
        match &*self.nodes {
            [node] => Ok(node),
            nodes => Err(RowbindError::MultipleSelectors { count: nodes.len() }),
        }
    }
    fn selected(&self, selector: &str) -> Option<&NodeRef> {
        self.nodes.iter().find(|n| n.name() == selector)
    }

    pub fn node(&self) -> Result<NodeRef> {
        self.single_node().cloned()
    }
    /// The bound node named `selector`, or `None` when no node has that name.
    pub fn node_for(&self, selector: &str) -> Option<NodeRef> {
        self.selected(selector).cloned()
    }
    pub fn path(&self) -> Result<String> {
        self.single_node()?.path()
    }
    pub fn path_for(&self, selector: &str) -> Result<Option<String>> {
        self.selected(selector).map(|n| n.path()).transpose()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn len(&self) -> usize {
        self.tuple.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tuple.is_empty()
    }

    /// The value of the named column; `Ok(None)` for a null cell.
    pub fn value(&self, column: &str) -> Result<Option<Value<'_>>> {
        match self.columns.iter().position(|c| c == column) {
            Some(index) => Ok(self.materialize(index)),
            None => Err(RowbindError::ItemNotFound(column.to_owned())),
        }
    }
    pub fn value_at(&self, index: usize) -> Result<Option<Value<'_>>> {
        if index >= self.tuple.len() {
            return Err(RowbindError::ItemNotFound(format!("#{}", index)));
        }
        Ok(self.materialize(index))
    }
    /// Every value in column order.
    pub fn values(&self) -> Vec<Option<Value<'_>>> {
        (0..self.tuple.len()).map(|i| self.materialize(i)).collect()
    }
    fn materialize(&self, index: usize) -> Option<Value<'_>> {
        self.tuple[index].as_ref().map(|stored| Value::new(stored, self.zone))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RepositoryNode;
    use chrono_tz::Europe::London;

    fn columns() -> Arc<[String]> {
        vec!["A".to_owned(), "B".to_owned(), "C".to_owned()].into()
    }
    fn nodes(names: &[&str]) -> Arc<[NodeRef]> {
        names
            .iter()
            .map(|n| RepositoryNode::shared(*n, Some(format!("/root/{}", n))))
            .collect::<Vec<_>>()
            .into()
    }
    fn tuple() -> Tuple {
        vec![Some("x".into()), Some(5i64.into()), None]
    }

    #[test]
    fn single_selector_row() {
        let row = Row::bind(columns(), nodes(&["n1"]), tuple(), London).unwrap();
        assert_eq!(row.node().unwrap().name(), "n1");
        assert_eq!(row.path().unwrap(), "/root/n1");
        assert_eq!(row.value("A").unwrap().unwrap().string(), "x");
        assert_eq!(row.value("B").unwrap().unwrap().long().unwrap(), 5);
        assert!(matches!(
            row.value("B").unwrap().unwrap().boolean(),
            Err(RowbindError::ValueFormat { .. })
        ));
        assert!(row.value("C").unwrap().is_none());
        assert!(matches!(row.value("Z"), Err(RowbindError::ItemNotFound(name)) if name == "Z"));
    }

    #[test]
    fn multi_selector_row() {
        let row = Row::bind(columns(), nodes(&["node1", "node2"]), tuple(), London).unwrap();
        assert!(matches!(row.node(), Err(RowbindError::MultipleSelectors { count: 2 })));
        assert!(matches!(row.path(), Err(RowbindError::MultipleSelectors { count: 2 })));
        assert_eq!(row.node_for("node2").unwrap().name(), "node2");
        assert!(row.node_for("node3").is_none());
        assert_eq!(row.path_for("node1").unwrap().as_deref(), Some("/root/node1"));
        assert_eq!(row.path_for("node3").unwrap(), None);
    }

    #[test]
    fn unresolvable_path_propagates() {
        let orphan: Arc<[NodeRef]> = vec![RepositoryNode::shared("orphan", None)].into();
        let row = Row::bind(columns(), orphan, tuple(), London).unwrap();
        assert!(matches!(row.path(), Err(RowbindError::Repository(_))));
        assert!(matches!(row.path_for("orphan"), Err(RowbindError::Repository(_))));
    }

    #[test]
    fn wrong_length_tuple_is_not_bound() {
        let err = Row::bind(columns(), nodes(&["n1"]), vec![None], London).unwrap_err();
        assert!(matches!(err, RowbindError::MalformedTuple { expected: 3, found: 1 }));
    }

    #[test]
    fn values_follow_column_order() {
        let row = Row::bind(columns(), nodes(&["n1"]), tuple(), London).unwrap();
        let values = row.values();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0].unwrap().string(), "x");
        assert_eq!(values[1].unwrap().long().unwrap(), 5);
        assert!(values[2].is_none());
        assert_eq!(row.value_at(1).unwrap().unwrap().long().unwrap(), 5);
        assert!(matches!(row.value_at(3), Err(RowbindError::ItemNotFound(_))));
    }
}
