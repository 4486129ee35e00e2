//! Column trait and resolved column state

use std::borrow::Cow;
use std::fmt::Debug;

use serde_json::Value;

use crate::config::{ColumnConfig, ColumnValue};
use crate::error::{GridError, Result};
use crate::filter::{Filter, FilterRegistry, ResolvedFilter, resolve_filter};
use crate::format::{FormatSpec, Formatter, StubFormatter, resolve_formatter};
use crate::row::Row;

/// Trait for grid column definitions
///
/// Each column is responsible for:
/// - Providing a header label and the attribute it is bound to
/// - Extracting the cell value from a row
/// - Rendering that value through its resolved formatter
/// - Exposing its resolved filter for the header filter row
pub trait Column: Debug {
	/// Returns the resolved state shared by all column kinds
	fn base(&self) -> &ColumnBase;

	/// Extracts the raw cell value from a row
	///
	/// Every column kind decides on its own how the value is obtained.
	fn value(&self, row: &dyn Row) -> Result<Value>;

	/// Renders the cell for the given row
	///
	/// Always equals `formatter().format(&value(row)?)`.
	fn render(&self, row: &dyn Row) -> Result<String> {
		let value = self.value(row)?;
		Ok(self.base().format_to(&value))
	}

	/// Returns the header text
	fn label(&self) -> Cow<'_, str> {
		self.base().label()
	}

	/// Returns the row field key, if any
	fn attribute(&self) -> Option<&str> {
		self.base().attribute()
	}

	/// Returns the resolved filter
	fn filter(&self) -> &dyn Filter {
		self.base().filter()
	}

	/// Returns the resolved formatter
	fn formatter(&self) -> &dyn Formatter {
		self.base().formatter()
	}

	/// Returns the HTML attribute fragment for the column's `<td>`/`<th>`
	fn render_html_options(&self) -> String {
		self.base().render_html_options()
	}
}

#[cfg_attr(doc, aquamarine::aquamarine)]
/// Fully resolved column state
///
/// Built once from a [`ColumnConfig`]. Filter resolution always runs before
/// formatter resolution because a token filter changes the formatter.
///
/// ```mermaid
/// graph TD
///     F{filter} -->|false| S[StubFilter]
///     F -->|absent| T[TextFilter named after attribute]
///     F -->|token| R[FilterRegistry factory]
///     F -->|instance| I[kept]
///     R -->|suppressFormat unset or true| SF[StubFormatter]
///     T --> X{format}
///     S --> X
///     I --> X
///     R -->|suppressFormat false| X
///     X -->|absent or unknown token| TF[TextFormatter]
///     X -->|html / image / url| K[matching formatter]
///     X -->|instance| KI[kept]
///     X -->|other value| E[UnresolvedCapability error]
/// ```
///
/// # Example
///
/// ```rust
/// use easygrid::column::ColumnBase;
/// use easygrid::{ColumnConfig, FilterRegistry};
///
/// let base = ColumnBase::resolve(
///     ColumnConfig::new().with_attribute("email"),
///     &FilterRegistry::with_defaults(),
/// )
/// .unwrap();
///
/// assert_eq!(base.label(), "Email");
/// assert_eq!(base.filter().name(), Some("email"));
/// assert_eq!(base.formatter().name(), "text");
/// ```
#[derive(Debug)]
pub struct ColumnBase {
	label: Option<String>,
	attribute: Option<String>,
	value: Option<ColumnValue>,
	filter: Box<dyn Filter>,
	formatter: Box<dyn Formatter>,
	width: Option<String>,
}

impl ColumnBase {
	/// Resolves a configuration into concrete filter and formatter
	///
	/// # Errors
	///
	/// Returns a configuration error when the column has neither label nor
	/// attribute, when the filter cannot be resolved, or when `format` holds
	/// a value that is neither a token nor a formatter.
	pub fn resolve(config: ColumnConfig, registry: &FilterRegistry) -> Result<Self> {
		let ColumnConfig {
			label,
			attribute,
			value,
			filter,
			filter_data,
			format,
			width,
			suppress_format,
		} = config;

		if label.is_none() && attribute.is_none() {
			return Err(GridError::Configuration(
				"column needs a label or an attribute".to_string(),
			));
		}

		let ResolvedFilter { filter, from_token } =
			resolve_filter(filter, attribute.as_deref(), filter_data, registry)?;

		let format = if suppress_format.unwrap_or(from_token) {
			tracing::debug!(
				attribute = attribute.as_deref().unwrap_or_default(),
				from_token,
				"Formatting suppressed, using stub formatter"
			);
			Some(FormatSpec::Formatter(Box::new(StubFormatter)))
		} else {
			format
		};
		let formatter = resolve_formatter(format, attribute.as_deref())?;

		tracing::debug!(
			attribute = attribute.as_deref().unwrap_or_default(),
			formatter = formatter.name(),
			"Resolved column"
		);

		Ok(Self {
			label,
			attribute,
			value,
			filter,
			formatter,
			width,
		})
	}

	/// Header text: the label, or the attribute with its first letter
	/// upper-cased
	pub fn label(&self) -> Cow<'_, str> {
		match (&self.label, &self.attribute) {
			(Some(label), _) => Cow::Borrowed(label.as_str()),
			(None, Some(attribute)) => Cow::Owned(capitalize_first(attribute)),
			(None, None) => Cow::Borrowed(""),
		}
	}

	/// Row field key
	pub fn attribute(&self) -> Option<&str> {
		self.attribute.as_deref()
	}

	/// Configured value override
	pub fn value(&self) -> Option<&ColumnValue> {
		self.value.as_ref()
	}

	/// Resolved filter
	pub fn filter(&self) -> &dyn Filter {
		self.filter.as_ref()
	}

	/// Resolved formatter
	pub fn formatter(&self) -> &dyn Formatter {
		self.formatter.as_ref()
	}

	/// Width hint
	pub fn width(&self) -> Option<&str> {
		self.width.as_deref()
	}

	/// Formats a value with the resolved formatter
	pub fn format_to(&self, value: &Value) -> String {
		self.formatter.format(value)
	}

	/// Returns `width='<width>'`, or an empty string without a width
	///
	/// # Examples
	///
	/// ```rust
	/// use easygrid::column::ColumnBase;
	/// use easygrid::{ColumnConfig, FilterRegistry};
	///
	/// let registry = FilterRegistry::new();
	/// let sized = ColumnBase::resolve(
	///     ColumnConfig::new().with_attribute("id").without_filter().with_width("120px"),
	///     &registry,
	/// )
	/// .unwrap();
	/// assert_eq!(sized.render_html_options(), "width='120px'");
	/// ```
	pub fn render_html_options(&self) -> String {
		match &self.width {
			Some(width) => format!(
				"width='{}'",
				html_escape::encode_single_quoted_attribute(width)
			),
			None => String::new(),
		}
	}
}

fn capitalize_first(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::filter::{FilterParams, TextFilter};
	use crate::format::HtmlFormatter;
	use rstest::{fixture, rstest};
	use serde_json::json;

	#[fixture]
	fn registry() -> FilterRegistry {
		FilterRegistry::with_defaults()
	}

	fn resolve(config: ColumnConfig, registry: &FilterRegistry) -> ColumnBase {
		ColumnBase::resolve(config, registry).unwrap()
	}

	#[rstest]
	fn test_defaults(registry: FilterRegistry) {
		let base = resolve(ColumnConfig::new().with_attribute("email"), &registry);
		assert_eq!(base.label(), "Email");
		assert_eq!(base.attribute(), Some("email"));
		assert_eq!(base.filter().name(), Some("email"));
		assert!(!base.filter().is_stub());
		assert_eq!(base.formatter().name(), "text");
		assert_eq!(base.render_html_options(), "");
	}

	#[rstest]
	#[case(Some("E-mail"), Some("email"), "E-mail")]
	#[case(None, Some("email"), "Email")]
	#[case(None, Some("created_at"), "Created_at")]
	#[case(None, Some("état"), "État")]
	#[case(Some("Actions"), None, "Actions")]
	fn test_label(
		#[case] label: Option<&str>,
		#[case] attribute: Option<&str>,
		#[case] expected: &str,
	) {
		let mut config = ColumnConfig::new().without_filter();
		config.label = label.map(String::from);
		config.attribute = attribute.map(String::from);
		let base = resolve(config, &FilterRegistry::new());
		assert_eq!(base.label(), expected);
	}

	#[rstest]
	fn test_label_and_attribute_missing(registry: FilterRegistry) {
		let err = ColumnBase::resolve(ColumnConfig::new().without_filter(), &registry).unwrap_err();
		assert!(matches!(err, GridError::Configuration(_)));
	}

	#[rstest]
	fn test_token_filter_forces_stub_formatter(registry: FilterRegistry) {
		let base = resolve(
			ColumnConfig::new()
				.with_attribute("status")
				.with_filter_token("select")
				.with_format("html"),
			&registry,
		);
		assert_eq!(base.formatter().name(), "stub");
	}

	#[rstest]
	fn test_token_filter_discards_unresolvable_format(registry: FilterRegistry) {
		let base = resolve(
			ColumnConfig::new()
				.with_attribute("status")
				.with_filter_token("text")
				.with_format(json!(12)),
			&registry,
		);
		assert_eq!(base.formatter().name(), "stub");
	}

	#[rstest]
	fn test_suppress_format_false_keeps_format(registry: FilterRegistry) {
		let base = resolve(
			ColumnConfig::new()
				.with_attribute("status")
				.with_filter_token("select")
				.with_format("html")
				.with_suppress_format(false),
			&registry,
		);
		assert_eq!(base.formatter().name(), "html");
	}

	#[rstest]
	fn test_suppress_format_true_without_token(registry: FilterRegistry) {
		let base = resolve(
			ColumnConfig::new()
				.with_attribute("widget")
				.with_format("url")
				.with_suppress_format(true),
			&registry,
		);
		assert_eq!(base.formatter().name(), "stub");
	}

	#[rstest]
	fn test_disabled_filter_keeps_format(registry: FilterRegistry) {
		let base = resolve(
			ColumnConfig::new()
				.with_attribute("avatar")
				.without_filter()
				.with_format("image"),
			&registry,
		);
		assert!(base.filter().is_stub());
		assert_eq!(base.formatter().name(), "image");
	}

	#[rstest]
	fn test_instances_are_kept(registry: FilterRegistry) {
		let base = resolve(
			ColumnConfig::new()
				.with_attribute("bio")
				.with_filter(TextFilter::new(FilterParams::new("about")))
				.with_formatter(HtmlFormatter),
			&registry,
		);
		assert_eq!(base.filter().name(), Some("about"));
		assert_eq!(base.formatter().name(), "html");
	}

	#[rstest]
	fn test_unresolvable_format_fails(registry: FilterRegistry) {
		let err = ColumnBase::resolve(
			ColumnConfig::new()
				.with_attribute("price")
				.with_format(json!({"currency": "EUR"})),
			&registry,
		)
		.unwrap_err();
		assert!(matches!(err, GridError::UnresolvedCapability { .. }));
	}

	#[rstest]
	fn test_unknown_filter_token_fails(registry: FilterRegistry) {
		let err = ColumnBase::resolve(
			ColumnConfig::new()
				.with_attribute("price")
				.with_filter_token("range"),
			&registry,
		)
		.unwrap_err();
		assert!(err.is_configuration());
	}

	#[rstest]
	#[case("120px", "width='120px'")]
	#[case("10%", "width='10%'")]
	fn test_render_html_options(#[case] width: &str, #[case] expected: &str) {
		let base = resolve(
			ColumnConfig::new()
				.with_attribute("id")
				.without_filter()
				.with_width(width),
			&FilterRegistry::new(),
		);
		assert_eq!(base.width(), Some(width));
		assert_eq!(base.render_html_options(), expected);
	}

	#[rstest]
	fn test_render_html_options_escapes_quote() {
		let base = resolve(
			ColumnConfig::new()
				.with_attribute("id")
				.without_filter()
				.with_width("1'0"),
			&FilterRegistry::new(),
		);
		let options = base.render_html_options();
		assert!(options.starts_with("width='1&"));
		assert!(!options.contains("1'0"));
	}

	#[rstest]
	fn test_format_to(registry: FilterRegistry) {
		let base = resolve(
			ColumnConfig::new().with_attribute("site").with_format("url"),
			&registry,
		);
		assert_eq!(
			base.format_to(&json!("https://a.io")),
			r#"<a href="https://a.io">https://a.io</a>"#
		);
	}
}
