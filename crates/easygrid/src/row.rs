//! Row access for column value extraction
//!
//! Columns never own row data. The orchestrator borrows each row to the
//! column for the duration of a single `render` call.

use std::borrow::Cow;
use std::collections::HashMap;

use serde_json::{Map, Value};

/// A data row exposing its fields by name
///
/// # Examples
///
/// ```
/// use easygrid::Row;
/// use serde_json::json;
///
/// let row = json!({"email": "a@b.com"});
/// assert_eq!(row.field("email"), Some(&json!("a@b.com")));
/// assert_eq!(row.field("missing"), None);
/// ```
pub trait Row {
	/// Returns the value stored under `name`, if any
	fn field(&self, name: &str) -> Option<&Value>;

	/// Follows a dotted path (`author.name`) through nested objects
	///
	/// The first segment is looked up on the row itself, every following
	/// segment on the object found so far. Returns `None` as soon as a link
	/// is missing or is not an object.
	fn path(&self, path: &str) -> Option<&Value> {
		let mut segments = path.split('.');
		let mut current = self.field(segments.next()?)?;
		for segment in segments {
			current = current.as_object()?.get(segment)?;
		}
		Some(current)
	}
}

impl Row for Map<String, Value> {
	fn field(&self, name: &str) -> Option<&Value> {
		self.get(name)
	}
}

impl Row for HashMap<String, Value> {
	fn field(&self, name: &str) -> Option<&Value> {
		self.get(name)
	}
}

impl Row for Value {
	fn field(&self, name: &str) -> Option<&Value> {
		self.as_object().and_then(|object| object.get(name))
	}
}

/// Converts a cell value to its plain display text
///
/// `null` renders as an empty string and strings are taken verbatim.
/// Everything else uses its JSON representation.
pub fn display_value(value: &Value) -> Cow<'_, str> {
	match value {
		Value::Null => Cow::Borrowed(""),
		Value::String(s) => Cow::Borrowed(s.as_str()),
		other => Cow::Owned(other.to_string()),
	}
}
