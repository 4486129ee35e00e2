//! Column following a dotted path into related objects

use serde_json::Value;

use super::{Column, ColumnBase};
use crate::config::ColumnConfig;
use crate::error::{GridError, Result};
use crate::filter::FilterRegistry;
use crate::row::Row;

/// Column reading a nested field such as `author.name`
///
/// The attribute is split on `.` and each segment is looked up in the
/// object found by the previous one. A missing link renders an empty cell.
#[derive(Debug)]
pub struct RelationColumn {
	base: ColumnBase,
}

impl RelationColumn {
	/// Creates a relation column
	///
	/// # Errors
	///
	/// Besides the usual resolution errors, the configuration must name an
	/// attribute path and must not carry a `value` override.
	pub fn new(config: ColumnConfig, registry: &FilterRegistry) -> Result<Self> {
		match config.attribute.as_deref() {
			None | Some("") => {
				return Err(GridError::Configuration(
					"relation column needs an attribute path".to_string(),
				));
			}
			Some(path) if path.split('.').any(str::is_empty) => {
				return Err(GridError::Configuration(format!(
					"invalid relation path '{path}'"
				)));
			}
			Some(_) => {}
		}
		if config.value.is_some() {
			return Err(GridError::Configuration(
				"relation column reads its value from the attribute path".to_string(),
			));
		}
		Ok(Self {
			base: ColumnBase::resolve(config, registry)?,
		})
	}

	/// Path segments of the attribute
	pub fn segments(&self) -> impl Iterator<Item = &str> {
		self.base.attribute().unwrap_or_default().split('.')
	}
}

impl Column for RelationColumn {
	fn base(&self) -> &ColumnBase {
		&self.base
	}

	fn value(&self, row: &dyn Row) -> Result<Value> {
		Ok(self
			.base
			.attribute()
			.and_then(|path| row.path(path))
			.cloned()
			.unwrap_or(Value::Null))
	}
}
