//! Grid column kinds

pub mod action;
pub mod base;
pub mod data;
pub mod relation;

pub use action::{Action, ActionColumn};
pub use base::{Column, ColumnBase};
pub use data::DataColumn;
pub use relation::RelationColumn;
