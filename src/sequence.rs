//! Lazy adaptation of a raw tuple source into rows.
//!
//! [`RowSequence`] pulls one tuple at a time and binds it into a [`Row`],
//! holding at most one bound row in a lookahead slot. Tuples that cannot be
//! reconciled are dropped and iteration continues. With well-formed tuples
//! (one value per column) binding never fails, so the drop path only sees
//! malformed input.
//!
//! The reported size starts at the declared tuple count and shrinks by one
//! for every dropped tuple; it is never recomputed from the source.

use std::sync::Arc;

use chrono_tz::Tz;
use tracing::{debug, trace};

use crate::datatype::Tuple;
use crate::error::{Result, RowbindError};
use crate::node::NodeRef;
use crate::range::RangeIterator;
use crate::row::Row;

pub struct RowSequence<I> {
    tuples: I,
    columns: Arc<[String]>,
    nodes: Arc<[NodeRef]>,
    zone: Tz,
    pending: Option<Row>,
    // tuples neither yielded, skipped nor dropped, buffered row included
    remaining: u64,
    position: u64,
}

impl<I> RowSequence<I>
where
    I: Iterator<Item = Tuple>,
{
    pub fn new(columns: Arc<[String]>, nodes: Arc<[NodeRef]>, tuples: I, declared: u64, zone: Tz) -> Self {
        Self { tuples, columns, nodes, zone, pending: None, remaining: declared, position: 0 }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn has_selector(&self, selector: &str) -> bool {
        self.nodes.iter().any(|n| n.name() == selector)
    }

    pub fn next_row(&mut self) -> Result<Row> {
        if !self.fill() {
            return Err(RowbindError::NoSuchElement);
        }
        let row = self.pending.take().ok_or(RowbindError::NoSuchElement)?;
        self.remaining = self.remaining.saturating_sub(1);
        self.position += 1;
        trace!(position = self.position, "row yielded");
        Ok(row)
    }

    // Binds tuples until one reconciles or the source runs dry.
    fn fill(&mut self) -> bool {
        if self.pending.is_some() {
            return true;
        }
        while let Some(tuple) = self.tuples.next() {
            match Row::bind(Arc::clone(&self.columns), Arc::clone(&self.nodes), tuple, self.zone) {
                Ok(row) => {
                    self.pending = Some(row);
                    return true;
                }
                Err(e) => {
                    debug!(position = self.position, error = %e, "dropping tuple");
                    self.remaining = self.remaining.saturating_sub(1);
                }
            }
        }
        false
    }
}

impl<I> Iterator for RowSequence<I>
where
    I: Iterator<Item = Tuple>,
{
    type Item = Row;
    fn next(&mut self) -> Option<Row> {
        self.next_row().ok()
    }
}

impl<I> RangeIterator for RowSequence<I>
where
    I: Iterator<Item = Tuple>,
{
    fn consumed(&self) -> u64 {
        self.position
    }
    fn size(&self) -> u64 {
        self.remaining + self.position
    }
    /// A buffered row counts as the first skipped position; the rest are
    /// discarded straight from the source without being bound.
    fn skip_ahead(&mut self, n: u64) -> Result<()> {
        let mut left = n;
        if left > 0 && self.pending.take().is_some() {
            self.remaining = self.remaining.saturating_sub(1);
            self.position += 1;
            left -= 1;
        }
        while left > 0 {
            if self.tuples.next().is_none() {
                debug!(requested = n, missing = left, "skip ran past the last tuple");
                return Err(RowbindError::NoSuchElement);
            }
            self.remaining = self.remaining.saturating_sub(1);
            self.position += 1;
            left -= 1;
        }
        trace!(skipped = n, position = self.position, "tuples skipped");
        Ok(())
    }
    fn has_next(&mut self) -> bool {
        self.fill()
    }
}
