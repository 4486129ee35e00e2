//! Formatting capability and formatter resolution
//!
//! A column renders every cell through exactly one [`Formatter`]. The
//! configured `format` value is resolved into that formatter once, while the
//! column is being built:
//!
//! | `format` value        | resolved formatter      |
//! |-----------------------|-------------------------|
//! | absent                | [`TextFormatter`]       |
//! | formatter instance    | kept as is              |
//! | `text`/`html`/`image`/`url` | matching formatter |
//! | any other token       | [`TextFormatter`]       |
//! | any other raw value   | error                   |

mod formatters;

use std::fmt::Debug;

use serde_json::Value;

use crate::error::{GridError, Result};

pub use formatters::{HtmlFormatter, ImageFormatter, StubFormatter, TextFormatter, UrlFormatter};

/// Formatting capability: turns a cell value into renderable output
pub trait Formatter: Debug + Send + Sync {
	/// Short identifier of the formatter, e.g. `"text"`
	fn name(&self) -> &'static str;

	/// Renders a single cell value
	fn format(&self, value: &Value) -> String;
}

/// Formatters selectable by token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterKind {
	/// `text`
	Text,
	/// `html`
	Html,
	/// `image`
	Image,
	/// `url`
	Url,
}

impl FormatterKind {
	/// Looks up a format token
	///
	/// # Examples
	///
	/// ```
	/// use easygrid::format::FormatterKind;
	///
	/// assert_eq!(FormatterKind::from_token("html"), Some(FormatterKind::Html));
	/// assert_eq!(FormatterKind::from_token("currency"), None);
	/// ```
	pub fn from_token(token: &str) -> Option<Self> {
		match token {
			"text" => Some(Self::Text),
			"html" => Some(Self::Html),
			"image" => Some(Self::Image),
			"url" => Some(Self::Url),
			_ => None,
		}
	}

	/// Token selecting this formatter
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Html => "html",
			Self::Image => "image",
			Self::Url => "url",
		}
	}

	/// Instantiates the formatter
	pub fn build(self) -> Box<dyn Formatter> {
		match self {
			Self::Text => Box::new(TextFormatter),
			Self::Html => Box::new(HtmlFormatter),
			Self::Image => Box::new(ImageFormatter),
			Self::Url => Box::new(UrlFormatter),
		}
	}
}

/// Unresolved `format` configuration value
#[derive(Debug)]
pub enum FormatSpec {
	/// A token looked up through [`FormatterKind`]
	Token(String),
	/// A formatter supplied by the caller
	Formatter(Box<dyn Formatter>),
	/// A raw configuration value of any other shape
	Raw(Value),
}

impl From<&str> for FormatSpec {
	fn from(token: &str) -> Self {
		Self::Token(token.to_string())
	}
}

impl From<String> for FormatSpec {
	fn from(token: String) -> Self {
		Self::Token(token)
	}
}

impl From<FormatterKind> for FormatSpec {
	fn from(kind: FormatterKind) -> Self {
		Self::Token(kind.as_str().to_string())
	}
}

impl From<Value> for FormatSpec {
	fn from(value: Value) -> Self {
		match value {
			Value::String(token) => Self::Token(token),
			other => Self::Raw(other),
		}
	}
}

/// Resolves a `format` value into a concrete formatter
///
/// `attribute` only labels log lines and errors.
///
/// # Examples
///
/// ```
/// use easygrid::format::{resolve_formatter, FormatSpec};
///
/// let formatter = resolve_formatter(Some(FormatSpec::from("url")), Some("site")).unwrap();
/// assert_eq!(formatter.name(), "url");
///
/// let fallback = resolve_formatter(Some(FormatSpec::from("currency")), Some("price")).unwrap();
/// assert_eq!(fallback.name(), "text");
/// ```
pub fn resolve_formatter(
	spec: Option<FormatSpec>,
	attribute: Option<&str>,
) -> Result<Box<dyn Formatter>> {
	let attribute = attribute.unwrap_or_default();
	match spec {
		None | Some(FormatSpec::Raw(Value::Null)) => Ok(Box::new(TextFormatter)),
		Some(FormatSpec::Formatter(formatter)) => Ok(formatter),
		Some(FormatSpec::Token(token)) => match FormatterKind::from_token(&token) {
			Some(kind) => Ok(kind.build()),
			None => {
				tracing::debug!(
					attribute,
					token = %token,
					"Unknown format token, falling back to text"
				);
				Ok(Box::new(TextFormatter))
			}
		},
		Some(FormatSpec::Raw(other)) => Err(GridError::UnresolvedCapability {
			attribute: attribute.to_string(),
			found: other.to_string(),
		}),
	}
}
