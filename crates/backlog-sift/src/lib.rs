//! # Backlog Sift - Fluent In-Memory Query Engine
//!
//! `backlog-sift` filters, sorts, and groups collections of records without
//! copying them. Records expose named fields through the [`Fields`] trait;
//! queries address those fields by dotted path strings (`"workspace.name"`)
//! or accessor functions, and chain like a builder.
//!
//! ## Core Concepts
//!
//! - [`Query`]: chainable façade bound to a borrowed slice; accumulates
//!   predicates and sort keys, then materializes on demand
//! - [`Fields`]: named-field access records implement once; maps get it
//!   for free
//! - [`Selector`]: field address, either a dotted path or a closure
//! - [`Value`]: borrowed runtime value of one field
//! - [`Groups`]: order-preserving buckets from `group_by`
//!
//! Filters AND together. Sort keys are stable with an independent
//! direction per key. Materialization is fail-fast: a path that does not
//! resolve or an impossible comparison aborts the call with a
//! [`SiftError`].
//!
//! ## Quick Start
//!
//! ```rust
//! use backlog_sift::{Dir, Fields, Number, Query, Value};
//!
//! struct Task {
//!     name: String,
//!     points: u32,
//!     done: bool,
//! }
//!
//! impl Fields for Task {
//!     fn field(&self, name: &str) -> Option<Value<'_>> {
//!         match name {
//!             "name" => Some(Value::Str(&self.name)),
//!             "points" => Some(Value::Number(Number::U64(self.points as u64))),
//!             "done" => Some(Value::Bool(self.done)),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! let tasks = vec![
//!     Task { name: "write brief".into(), points: 3, done: false },
//!     Task { name: "ship build".into(), points: 8, done: true },
//!     Task { name: "file report".into(), points: 5, done: false },
//! ];
//!
//! let mut query = Query::new(&tasks);
//! let open = query
//!     .is_false("done")
//!     .sort_by("points", Dir::Desc)
//!     .get_list()?;
//!
//! assert_eq!(open.len(), 2);
//! assert_eq!(open[0].name, "file report");
//!
//! // Group the full collection by completion state
//! let by_state = query.group_by("done")?;
//! assert_eq!(by_state.len(), 2);
//! # Ok::<(), backlog_sift::SiftError>(())
//! ```
//!
//! ## View Narrowing
//!
//! A query holds a *view*, initially the whole collection.
//! [`Query::get_list`] materializes without touching it;
//! [`Query::set_view`] narrows it so every later call works on the subset;
//! [`Query::new_view`] hands back a fresh query over the original
//! collection.

pub mod error;
pub mod fields;
pub mod group;
pub mod predicate;
pub mod query;
pub mod selector;
pub mod sort;
pub mod value;

pub use error::{Result, SiftError};
pub use fields::{AsValue, Fields};
pub use group::{Groups, Key};
pub use predicate::{Cond, Matcher, Operand, Predicate};
pub use query::Query;
pub use selector::{Accessor, Selector};
pub use sort::{Dir, SortKey};
pub use value::{Number, Timestamp, Value};
