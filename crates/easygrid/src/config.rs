//! Column configuration
//!
//! [`ColumnConfig`] is the unresolved form of a column: every field is
//! optional and may still hold tokens. Columns consume it once and resolve
//! it into concrete capabilities.
//!
//! Configuration can be built in code or loaded from a JSON mapping using
//! camelCase keys (`label`, `attribute`, `value`, `filter`, `filterData`,
//! `format`, `width`, `suppressFormat`). Unknown keys are rejected. Value
//! functions and capability instances can only be supplied through the
//! builder methods.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{GridError, Result};
use crate::filter::{Filter, FilterSpec};
use crate::format::{FormatSpec, Formatter};
use crate::row::Row;

/// Function computing a cell value from a row
pub type ValueFn = Arc<dyn Fn(&dyn Row) -> anyhow::Result<Value> + Send + Sync>;

/// Override for the value a column extracts from a row
#[derive(Clone)]
pub enum ColumnValue {
	/// The same value for every row
	Literal(Value),
	/// A value computed per row
	Function(ValueFn),
}

impl ColumnValue {
	/// Evaluates the override against a row
	///
	/// Failures of a value function are reported as
	/// [`GridError::Render`] tagged with `attribute`.
	pub fn evaluate(&self, row: &dyn Row, attribute: Option<&str>) -> Result<Value> {
		match self {
			Self::Literal(value) => Ok(value.clone()),
			Self::Function(function) => function(row).map_err(|source| GridError::Render {
				attribute: attribute.unwrap_or_default().to_string(),
				source,
			}),
		}
	}
}

impl fmt::Debug for ColumnValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
			Self::Function(_) => f.write_str("Function(..)"),
		}
	}
}

/// Unresolved column configuration
///
/// # Examples
///
/// ```
/// use easygrid::ColumnConfig;
/// use serde_json::json;
///
/// let config = ColumnConfig::new()
///     .with_attribute("status")
///     .with_filter_token("select")
///     .with_filter_data(json!({"1": "Active"}))
///     .with_width("120px");
/// assert_eq!(config.attribute.as_deref(), Some("status"));
/// ```
#[derive(Debug, Default)]
pub struct ColumnConfig {
	/// Header title
	pub label: Option<String>,
	/// Row field key
	pub attribute: Option<String>,
	/// Value override
	pub value: Option<ColumnValue>,
	/// Filter selection
	pub filter: Option<FilterSpec>,
	/// Value handed to token-selected filters
	pub filter_data: Option<Value>,
	/// Formatter selection
	pub format: Option<FormatSpec>,
	/// Layout width hint
	pub width: Option<String>,
	/// Forces (`true`) or prevents (`false`) the stub formatter
	///
	/// When unset, the stub formatter is used exactly when the filter was
	/// selected by token.
	pub suppress_format: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RawColumnConfig {
	label: Option<String>,
	attribute: Option<String>,
	value: Option<Value>,
	filter: Option<RawFilter>,
	filter_data: Option<Value>,
	format: Option<Value>,
	width: Option<RawWidth>,
	suppress_format: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawWidth {
	Text(String),
	Number(serde_json::Number),
}

impl From<RawWidth> for String {
	fn from(width: RawWidth) -> Self {
		match width {
			RawWidth::Text(text) => text,
			RawWidth::Number(number) => number.to_string(),
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawFilter {
	Flag(bool),
	Token(String),
}

impl ColumnConfig {
	/// Creates an empty configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Loads a configuration from a JSON mapping
	///
	/// # Errors
	///
	/// Fails on unknown keys, on values of the wrong type and on
	/// `filter: true`, which has no meaning. A numeric `width` is accepted
	/// and kept as its decimal text.
	///
	/// # Examples
	///
	/// ```
	/// use easygrid::ColumnConfig;
	/// use serde_json::json;
	///
	/// let config = ColumnConfig::from_json(json!({"attribute": "email", "format": "url"})).unwrap();
	/// assert_eq!(config.attribute.as_deref(), Some("email"));
	///
	/// assert!(ColumnConfig::from_json(json!({"attribute": "email", "sortable": true})).is_err());
	/// ```
	pub fn from_json(value: Value) -> Result<Self> {
		let raw: RawColumnConfig = serde_json::from_value(value)?;
		Self::from_raw(raw)
	}

	/// Loads a configuration from JSON text
	pub fn from_json_str(source: &str) -> Result<Self> {
		let raw: RawColumnConfig = serde_json::from_str(source)?;
		Self::from_raw(raw)
	}

	fn from_raw(raw: RawColumnConfig) -> Result<Self> {
		let filter = match raw.filter {
			None => None,
			Some(RawFilter::Flag(false)) => Some(FilterSpec::Disabled),
			Some(RawFilter::Flag(true)) => {
				return Err(GridError::Configuration(format!(
					"filter for column '{}' must be false, null or a filter name",
					raw.attribute.unwrap_or_default()
				)));
			}
			Some(RawFilter::Token(token)) => Some(FilterSpec::Token(token)),
		};
		Ok(Self {
			label: raw.label,
			attribute: raw.attribute,
			value: raw.value.map(ColumnValue::Literal),
			filter,
			filter_data: raw.filter_data,
			format: raw.format.map(FormatSpec::from),
			width: raw.width.map(String::from),
			suppress_format: raw.suppress_format,
		})
	}

	/// Sets the header title
	pub fn with_label(mut self, label: impl Into<String>) -> Self {
		self.label = Some(label.into());
		self
	}

	/// Sets the row field key
	pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
		self.attribute = Some(attribute.into());
		self
	}

	/// Uses the same literal value for every row
	pub fn with_value(mut self, value: Value) -> Self {
		self.value = Some(ColumnValue::Literal(value));
		self
	}

	/// Computes the value per row
	///
	/// # Examples
	///
	/// ```
	/// use easygrid::{ColumnConfig, Row};
	/// use serde_json::{json, Value};
	///
	/// let config = ColumnConfig::new()
	///     .with_attribute("full_name")
	///     .with_value_fn(|row: &dyn Row| {
	///         let first = row.field("first").cloned().unwrap_or(Value::Null);
	///         Ok(first)
	///     });
	/// assert!(config.value.is_some());
	/// ```
	pub fn with_value_fn<F>(mut self, function: F) -> Self
	where
		F: Fn(&dyn Row) -> anyhow::Result<Value> + Send + Sync + 'static,
	{
		self.value = Some(ColumnValue::Function(Arc::new(function)));
		self
	}

	/// Uses an already built filter
	pub fn with_filter(mut self, filter: impl Filter + 'static) -> Self {
		self.filter = Some(FilterSpec::Filter(Box::new(filter)));
		self
	}

	/// Selects a registered filter by token
	pub fn with_filter_token(mut self, token: impl Into<String>) -> Self {
		self.filter = Some(FilterSpec::Token(token.into()));
		self
	}

	/// Disables filtering for the column
	pub fn without_filter(mut self) -> Self {
		self.filter = Some(FilterSpec::Disabled);
		self
	}

	/// Sets the value handed to a token-selected filter
	pub fn with_filter_data(mut self, data: Value) -> Self {
		self.filter_data = Some(data);
		self
	}

	/// Selects a formatter by token or raw value
	pub fn with_format(mut self, format: impl Into<FormatSpec>) -> Self {
		self.format = Some(format.into());
		self
	}

	/// Uses an already built formatter
	pub fn with_formatter(mut self, formatter: impl Formatter + 'static) -> Self {
		self.format = Some(FormatSpec::Formatter(Box::new(formatter)));
		self
	}

	/// Sets the width hint
	pub fn with_width(mut self, width: impl Into<String>) -> Self {
		self.width = Some(width.into());
		self
	}

	/// Forces or prevents the stub formatter
	pub fn with_suppress_format(mut self, suppress: bool) -> Self {
		self.suppress_format = Some(suppress);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::format::HtmlFormatter;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_from_json_full() {
		let config = ColumnConfig::from_json(json!({
			"label": "Status",
			"attribute": "status",
			"value": "fixed",
			"filter": "select",
			"filterData": {"1": "On"},
			"format": "html",
			"width": "80px",
			"suppressFormat": false
		}))
		.unwrap();
		assert_eq!(config.label.as_deref(), Some("Status"));
		assert_eq!(config.attribute.as_deref(), Some("status"));
		assert!(matches!(config.value, Some(ColumnValue::Literal(ref v)) if v == "fixed"));
		assert!(matches!(config.filter, Some(FilterSpec::Token(ref t)) if t == "select"));
		assert_eq!(config.filter_data, Some(json!({"1": "On"})));
		assert!(matches!(config.format, Some(FormatSpec::Token(ref t)) if t == "html"));
		assert_eq!(config.width.as_deref(), Some("80px"));
		assert_eq!(config.suppress_format, Some(false));
	}

	#[rstest]
	fn test_from_json_filter_false() {
		let config = ColumnConfig::from_json(json!({"attribute": "id", "filter": false})).unwrap();
		assert!(matches!(config.filter, Some(FilterSpec::Disabled)));
	}

	#[rstest]
	#[case(json!("120px"), "120px")]
	#[case(json!(120), "120")]
	#[case(json!(33.5), "33.5")]
	fn test_from_json_width_accepts_text_and_numbers(#[case] width: Value, #[case] expected: &str) {
		let config = ColumnConfig::from_json(json!({"attribute": "id", "width": width})).unwrap();
		assert_eq!(config.width.as_deref(), Some(expected));
	}

	#[rstest]
	#[case(json!(true))]
	#[case(json!(["120px"]))]
	fn test_from_json_width_rejects_other_types(#[case] width: Value) {
		let err = ColumnConfig::from_json(json!({"attribute": "id", "width": width})).unwrap_err();
		assert!(err.is_configuration());
	}

	#[rstest]
	fn test_from_json_nulls_are_absent() {
		let config =
			ColumnConfig::from_json(json!({"attribute": "id", "filter": null, "format": null}))
				.unwrap();
		assert!(config.filter.is_none());
		assert!(config.format.is_none());
	}

	#[rstest]
	fn test_from_json_filter_true_rejected() {
		let err = ColumnConfig::from_json(json!({"attribute": "id", "filter": true})).unwrap_err();
		assert!(matches!(err, GridError::Configuration(_)));
	}

	#[rstest]
	fn test_from_json_raw_format_kept_unresolved() {
		let config = ColumnConfig::from_json(json!({"attribute": "id", "format": 3})).unwrap();
		assert!(matches!(config.format, Some(FormatSpec::Raw(ref v)) if v == &json!(3)));
	}

	#[rstest]
	#[case(json!({"attribute": "id", "sortable": true}))]
	#[case(json!({"attribute": 5}))]
	#[case(json!({"attribute": "id", "filter": 1}))]
	#[case(json!("attribute"))]
	fn test_from_json_rejects_malformed(#[case] raw: Value) {
		let err = ColumnConfig::from_json(raw).unwrap_err();
		assert!(err.is_configuration());
	}

	#[rstest]
	fn test_from_json_str() {
		let config = ColumnConfig::from_json_str(r#"{"attribute": "email"}"#).unwrap();
		assert_eq!(config.attribute.as_deref(), Some("email"));
		assert!(ColumnConfig::from_json_str("{").is_err());
	}

	#[rstest]
	fn test_builder() {
		let config = ColumnConfig::new()
			.with_attribute("bio")
			.with_formatter(HtmlFormatter)
			.without_filter();
		assert!(matches!(config.format, Some(FormatSpec::Formatter(_))));
		assert!(matches!(config.filter, Some(FilterSpec::Disabled)));
	}

	#[rstest]
	fn test_value_fn_error_becomes_render_error() {
		let config = ColumnConfig::new()
			.with_attribute("total")
			.with_value_fn(|_| Err(anyhow::anyhow!("no price")));
		let value = config.value.unwrap();
		let err = value.evaluate(&json!({}), Some("total")).unwrap_err();
		assert!(matches!(err, GridError::Render { ref attribute, .. } if attribute == "total"));
	}

	#[rstest]
	fn test_literal_value() {
		let value = ColumnValue::Literal(json!("same"));
		assert_eq!(value.evaluate(&json!({"a": 1}), None).unwrap(), json!("same"));
		assert_eq!(format!("{value:?}"), r#"Literal(String("same"))"#);
	}
}
