//! Built-in cell formatters

use serde_json::Value;

use super::Formatter;
use crate::row::display_value;

/// Plain text, HTML-escaped
///
/// # Examples
///
/// ```
/// use easygrid::format::{Formatter, TextFormatter};
/// use serde_json::json;
///
/// assert_eq!(TextFormatter.format(&json!("a@b.com")), "a@b.com");
/// assert_eq!(TextFormatter.format(&json!("<b>")), "&lt;b&gt;");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextFormatter;

impl Formatter for TextFormatter {
	fn name(&self) -> &'static str {
		"text"
	}

	fn format(&self, value: &Value) -> String {
		html_escape::encode_quoted_attribute(&display_value(value)).into_owned()
	}
}

/// Trusted markup, emitted unescaped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlFormatter;

impl Formatter for HtmlFormatter {
	fn name(&self) -> &'static str {
		"html"
	}

	fn format(&self, value: &Value) -> String {
		display_value(value).into_owned()
	}
}

/// Renders the value as the source of an `<img>` tag
///
/// Empty values render as an empty cell rather than a broken image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageFormatter;

impl Formatter for ImageFormatter {
	fn name(&self) -> &'static str {
		"image"
	}

	fn format(&self, value: &Value) -> String {
		let src = display_value(value);
		if src.is_empty() {
			return String::new();
		}
		format!(
			r#"<img src="{}">"#,
			html_escape::encode_double_quoted_attribute(&src)
		)
	}
}

/// Renders the value as a link pointing to itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlFormatter;

impl Formatter for UrlFormatter {
	fn name(&self) -> &'static str {
		"url"
	}

	fn format(&self, value: &Value) -> String {
		let href = display_value(value);
		if href.is_empty() {
			return String::new();
		}
		format!(
			r#"<a href="{}">{}</a>"#,
			html_escape::encode_double_quoted_attribute(&href),
			html_escape::encode_text(&href)
		)
	}
}

/// No-op formatter: the value passes through untouched
///
/// Selected when a custom filter takes over the cell UI. The output is NOT
/// HTML-escaped, so a column that renders untrusted row data through a
/// custom filter should set `suppressFormat: false` to keep the escaping
/// text formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StubFormatter;

impl Formatter for StubFormatter {
	fn name(&self) -> &'static str {
		"stub"
	}

	fn format(&self, value: &Value) -> String {
		display_value(value).into_owned()
	}
}
