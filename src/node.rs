//! Originating nodes and the sequence adapter over them.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, RowbindError};
use crate::range::RangeIterator;

/// An entity a query result row originates from.
pub trait Node: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
    /// Resolves the node's path; resolution failures propagate to the caller.
    fn path(&self) -> Result<String>;
}

pub type NodeRef = Arc<dyn Node>;

// ------------- RepositoryNode -------------
/// A plain in-memory node. Without a path, resolving it fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryNode {
    name: String,
    path: Option<String>,
}

impl RepositoryNode {
    pub fn new(name: impl Into<String>, path: Option<String>) -> Self {
        Self { name: name.into(), path }
    }
    pub fn shared(name: impl Into<String>, path: Option<String>) -> NodeRef {
        Arc::new(Self::new(name, path))
    }
}
impl Node for RepositoryNode {
    fn name(&self) -> &str {
        &self.name
    }
    fn path(&self) -> Result<String> {
        self.path
            .clone()
            .ok_or_else(|| RowbindError::Repository(format!("Node {} has no resolvable path", self.name)))
    }
}

// ------------- NodeSequence -------------
#[derive(Debug, Clone)]
pub struct NodeSequence {
    nodes: Arc<[NodeRef]>,
    position: u64,
}

impl NodeSequence {
    pub fn new(nodes: Arc<[NodeRef]>) -> Self {
        Self { nodes, position: 0 }
    }
    pub fn next_node(&mut self) -> Result<NodeRef> {
        let node = self
            .nodes
            .get(self.position as usize)
            .cloned()
            .ok_or(RowbindError::NoSuchElement)?;
        self.position += 1;
        Ok(node)
    }
}
impl Iterator for NodeSequence {
    type Item = NodeRef;
    fn next(&mut self) -> Option<NodeRef> {
        self.next_node().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.nodes.len() - self.position as usize;
        (left, Some(left))
    }
}
impl ExactSizeIterator for NodeSequence {}
impl RangeIterator for NodeSequence {
    fn consumed(&self) -> u64 {
        self.position
    }
    fn size(&self) -> u64 {
        self.nodes.len() as u64
    }
    fn skip_ahead(&mut self, n: u64) -> Result<()> {
        for _ in 0..n {
            self.next_node()?;
        }
        Ok(())
    }
    fn has_next(&mut self) -> bool {
        (self.position as usize) < self.nodes.len()
    }
}
