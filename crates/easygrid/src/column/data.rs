//! Attribute-bound data column

use serde_json::Value;

use super::{Column, ColumnBase};
use crate::config::ColumnConfig;
use crate::error::Result;
use crate::filter::FilterRegistry;
use crate::row::Row;

/// Column reading a single row field
///
/// A configured `value` takes precedence over the attribute: a literal is
/// shown in every row, a value function is called per row. Missing fields
/// render as empty cells.
///
/// # Example
///
/// ```rust
/// use easygrid::{Column, ColumnConfig, DataColumn, FilterRegistry};
/// use serde_json::json;
///
/// let column = DataColumn::new(
///     ColumnConfig::new().with_attribute("email"),
///     &FilterRegistry::with_defaults(),
/// )
/// .unwrap();
///
/// let row = json!({"email": "a@b.com"});
/// assert_eq!(column.render(&row).unwrap(), "a@b.com");
/// ```
#[derive(Debug)]
pub struct DataColumn {
	base: ColumnBase,
}

impl DataColumn {
	/// Creates a data column, resolving its filter and formatter
	pub fn new(config: ColumnConfig, registry: &FilterRegistry) -> Result<Self> {
		Ok(Self {
			base: ColumnBase::resolve(config, registry)?,
		})
	}

	/// Creates a data column from a JSON configuration mapping
	pub fn from_json(config: Value, registry: &FilterRegistry) -> Result<Self> {
		Self::new(ColumnConfig::from_json(config)?, registry)
	}
}

impl Column for DataColumn {
	fn base(&self) -> &ColumnBase {
		&self.base
	}

	fn value(&self, row: &dyn Row) -> Result<Value> {
		let attribute = self.base.attribute();
		if let Some(value) = self.base.value() {
			return value.evaluate(row, attribute);
		}
		Ok(attribute
			.and_then(|name| row.field(name))
			.cloned()
			.unwrap_or(Value::Null))
	}
}
