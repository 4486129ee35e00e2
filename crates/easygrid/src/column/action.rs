//! Row action links (view / update / delete)

use serde_json::Value;

use super::{Column, ColumnBase};
use crate::config::ColumnConfig;
use crate::error::{GridError, Result};
use crate::filter::FilterRegistry;
use crate::format::HtmlFormatter;
use crate::row::{Row, display_value};

/// Action offered for each row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
	/// Show the record
	View,
	/// Edit the record
	Update,
	/// Delete the record
	Delete,
}

impl Action {
	/// URL segment of the action
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::View => "view",
			Self::Update => "update",
			Self::Delete => "delete",
		}
	}

	/// Link text of the action
	pub fn title(&self) -> &'static str {
		match self {
			Self::View => "View",
			Self::Update => "Update",
			Self::Delete => "Delete",
		}
	}
}

/// Column rendering one link per action, pointing at `<url>/<action>/<key>`
///
/// The key is percent-encoded as a single path segment. Action columns never
/// filter and always emit markup, so only `label` and `width` can be
/// configured. The label defaults to `Actions`.
///
/// # Example
///
/// ```rust
/// use easygrid::{ActionColumn, Column};
/// use serde_json::json;
///
/// let column = ActionColumn::new("/users").unwrap();
/// let html = column.render(&json!({"id": 7})).unwrap();
/// assert!(html.contains(r#"<a href="/users/view/7">View</a>"#));
/// assert_eq!(column.filter().render(), "");
/// ```
#[derive(Debug)]
pub struct ActionColumn {
	base: ColumnBase,
	url: String,
	key: String,
	actions: Vec<Action>,
}

impl ActionColumn {
	/// Creates an action column with all actions, keyed by `id`
	pub fn new(url: impl Into<String>) -> Result<Self> {
		Self::with_config(url, ColumnConfig::new())
	}

	/// Creates an action column from a configuration
	///
	/// Only `label` and `width` are accepted. Any other setting is a
	/// configuration error.
	pub fn with_config(url: impl Into<String>, mut config: ColumnConfig) -> Result<Self> {
		let rejected = [
			("attribute", config.attribute.is_some()),
			("value", config.value.is_some()),
			("filter", config.filter.is_some()),
			("filterData", config.filter_data.is_some()),
			("format", config.format.is_some()),
			("suppressFormat", config.suppress_format.is_some()),
		];
		if let Some((key, _)) = rejected.into_iter().find(|(_, set)| *set) {
			return Err(GridError::Configuration(format!(
				"action column does not accept '{key}'"
			)));
		}
		if config.label.is_none() {
			config.label = Some("Actions".to_string());
		}
		let config = config.without_filter().with_formatter(HtmlFormatter);
		Ok(Self {
			base: ColumnBase::resolve(config, &FilterRegistry::new())?,
			url: url.into(),
			key: "id".to_string(),
			actions: vec![Action::View, Action::Update, Action::Delete],
		})
	}

	/// Sets the row field holding the record key
	pub fn with_key(mut self, key: impl Into<String>) -> Self {
		self.key = key.into();
		self
	}

	/// Replaces the offered actions
	pub fn with_actions(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
		self.actions = actions.into_iter().collect();
		self
	}

	/// Offered actions in display order
	pub fn actions(&self) -> &[Action] {
		&self.actions
	}

	fn link(&self, action: Action, key: &str) -> String {
		let href = format!(
			"{}/{}/{}",
			self.url.trim_end_matches('/'),
			action.as_str(),
			urlencoding::encode(key)
		);
		format!(
			r#"<a href="{}">{}</a>"#,
			html_escape::encode_double_quoted_attribute(&href),
			action.title()
		)
	}
}

impl Column for ActionColumn {
	fn base(&self) -> &ColumnBase {
		&self.base
	}

	fn value(&self, row: &dyn Row) -> Result<Value> {
		let key = match row.field(&self.key) {
			Some(key) if !key.is_null() => display_value(key).into_owned(),
			_ => {
				return Err(GridError::Render {
					attribute: self.key.clone(),
					source: anyhow::anyhow!("row has no '{}' field", self.key),
				});
			}
		};
		let links: Vec<String> = self
			.actions
			.iter()
			.map(|action| self.link(*action, &key))
			.collect();
		Ok(Value::String(links.join(" ")))
	}
}
