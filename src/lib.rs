//! Rowbind – a row/value adapter over computed query results.
//!
//! A repository that has executed a query hands over three things:
//! * an ordered list of unique column names,
//! * the nodes the result originates from, each with a name and a resolvable path,
//! * a forward-only sequence of raw tuples, one per row, each holding one
//!   loosely typed value per column.
//!
//! Rowbind presents these as a tabular result:
//! * [`node::NodeSequence`] – a positioned, sized, skippable pass over the nodes.
//! * [`sequence::RowSequence`] – a lazy pass over the tuples producing one
//!   [`row::Row`] per tuple, dropping tuples that cannot be reconciled.
//! * [`row::Row`] – node/path lookup (plain for single-selector rows, by
//!   selector name for multi-selector rows) and value lookup by column.
//! * [`value::Value`] – a cell materialized on demand with type-checked
//!   accessors; asking for a representation the stored value does not have
//!   is an error, never a silent conversion.
//!
//! Both sequences implement [`range::RangeIterator`] as well as [`Iterator`].
//!
//! ## Time zones
//! Timestamps are rendered as calendars in one named zone configured for the
//! whole adapter (see [`settings::AdapterConfig`]), defaulting to `Europe/London`.
//!
//! ## Quick Start
//! ```
//! use rowbind::{node::RepositoryNode, result::QueryResult, settings::AdapterConfig};
//! let result = QueryResult::new(
//!     vec!["A".into(), "B".into(), "C".into()],
//!     vec![RepositoryNode::shared("n1", Some("/n1".into()))],
//!     vec![vec![Some("x".into()), Some(5i64.into()), None]],
//!     &AdapterConfig::default(),
//! ).unwrap();
//! let mut rows = result.rows();
//! let row = rows.next_row().unwrap();
//! assert_eq!(row.value("A").unwrap().unwrap().string(), "x");
//! assert_eq!(row.value("B").unwrap().unwrap().long().unwrap(), 5);
//! assert!(row.value("C").unwrap().is_none());
//! assert_eq!(row.node().unwrap().name(), "n1");
//! ```

pub mod binary;
pub mod datatype;
pub mod error;
pub mod load;
pub mod node;
pub mod range;
pub mod result;
pub mod row;
pub mod sequence;
pub mod settings;
pub mod value;

pub use error::{Result, RowbindError};
