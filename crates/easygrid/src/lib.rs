//! Configuration-driven data grid columns
//!
//! This crate turns a loosely-typed column configuration into a column with
//! exactly one resolved filter and exactly one resolved formatter, and
//! renders grid cells by composing per-row value extraction with that
//! formatter.
//!
//! # Features
//!
//! - **Configuration**: typed builder or JSON mapping, unknown keys rejected
//! - **Filter resolution**: disabled, default text input, or a custom filter
//!   selected by token through a [`FilterRegistry`]
//! - **Formatter resolution**: `text`, `html`, `image`, `url` tokens or a
//!   caller-supplied [`Formatter`]
//! - **Column kinds**: attribute ([`DataColumn`]), nested path
//!   ([`RelationColumn`]) and row actions ([`ActionColumn`])
//!
//! The grid orchestrator that iterates rows and assembles the table markup
//! lives outside this crate.
//!
//! # Architecture
//!
//! A [`ColumnConfig`] is resolved exactly once into a [`ColumnBase`]: the
//! filter first, then the formatter. Column kinds wrap the base and only
//! decide how a value is read from a [`Row`]. See [`ColumnBase`] for the
//! resolution diagram.
//!
//! # Example
//!
//! ```rust
//! use easygrid::{Column, ColumnConfig, DataColumn, FilterRegistry};
//! use serde_json::json;
//!
//! let registry = FilterRegistry::with_defaults();
//! let column = DataColumn::new(ColumnConfig::new().with_attribute("email"), &registry).unwrap();
//!
//! assert_eq!(column.label(), "Email");
//! assert_eq!(column.filter().name(), Some("email"));
//! assert_eq!(column.render(&json!({"email": "a@b.com"})).unwrap(), "a@b.com");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod row;

// Re-exports for convenience
pub use column::{Action, ActionColumn, Column, ColumnBase, DataColumn, RelationColumn};
pub use config::{ColumnConfig, ColumnValue};
pub use error::{GridError, Result};
pub use filter::{Filter, FilterParams, FilterRegistry, FilterSpec};
pub use format::{FormatSpec, Formatter, FormatterKind};
pub use row::Row;
