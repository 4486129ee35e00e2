//! Built-in column filters

use serde_json::Value;

use super::{Filter, FilterParams};
use crate::row::display_value;

/// Filter that renders no UI at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StubFilter;

impl Filter for StubFilter {
	fn name(&self) -> Option<&str> {
		None
	}

	fn value(&self) -> Option<&Value> {
		None
	}

	fn render(&self) -> String {
		String::new()
	}

	fn is_stub(&self) -> bool {
		true
	}
}

/// Free-text input, the default filter of every column
///
/// # Examples
///
/// ```
/// use easygrid::filter::{Filter, FilterParams, TextFilter};
///
/// let filter = TextFilter::new(FilterParams::new("email"));
/// assert_eq!(
///     filter.render(),
///     r#"<input type="text" name="email" value="" class="form-control">"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextFilter {
	name: String,
	value: Option<Value>,
}

impl TextFilter {
	/// Creates a text filter from its construction parameters
	pub fn new(params: FilterParams) -> Self {
		Self {
			name: params.name,
			value: params.value,
		}
	}
}

impl Filter for TextFilter {
	fn name(&self) -> Option<&str> {
		Some(&self.name)
	}

	fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	fn render(&self) -> String {
		let value = self.value.as_ref().map(display_value).unwrap_or_default();
		format!(
			r#"<input type="text" name="{}" value="{}" class="form-control">"#,
			html_escape::encode_double_quoted_attribute(&self.name),
			html_escape::encode_double_quoted_attribute(&value)
		)
	}
}

/// Drop-down filter whose options come from `filterData`
///
/// An object maps option values to labels. An array uses each element as
/// both value and label. Any other shape yields only the empty option.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectFilter {
	name: String,
	value: Option<Value>,
	options: Vec<(String, String)>,
}

impl SelectFilter {
	/// Creates a select filter from its construction parameters
	pub fn new(params: FilterParams) -> Self {
		let options = match &params.value {
			Some(Value::Object(map)) => map
				.iter()
				.map(|(key, label)| (key.clone(), display_value(label).into_owned()))
				.collect(),
			Some(Value::Array(items)) => items
				.iter()
				.map(|item| {
					let text = display_value(item).into_owned();
					(text.clone(), text)
				})
				.collect(),
			_ => Vec::new(),
		};
		Self {
			name: params.name,
			value: params.value,
			options,
		}
	}

	/// Option `(value, label)` pairs in display order
	pub fn options(&self) -> &[(String, String)] {
		&self.options
	}
}

impl Filter for SelectFilter {
	fn name(&self) -> Option<&str> {
		Some(&self.name)
	}

	fn value(&self) -> Option<&Value> {
		self.value.as_ref()
	}

	fn render(&self) -> String {
		let mut html = format!(
			r#"<select name="{}" class="form-control"><option value=""></option>"#,
			html_escape::encode_double_quoted_attribute(&self.name)
		);
		for (value, label) in &self.options {
			html.push_str(&format!(
				r#"<option value="{}">{}</option>"#,
				html_escape::encode_double_quoted_attribute(value),
				html_escape::encode_text(label)
			));
		}
		html.push_str("</select>");
		html
	}
}
