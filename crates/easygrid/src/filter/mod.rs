//! Filtering capability and filter resolution
//!
//! Every column carries exactly one filter after it has been built. The
//! configured `filter` value is resolved in this order:
//!
//! 1. disabled → [`StubFilter`], nothing else is consulted
//! 2. absent → [`TextFilter`] named after the column attribute
//! 3. token → factory from the [`FilterRegistry`], built from the attribute
//!    and `filterData`; the column then defaults to the stub formatter
//! 4. filter instance → kept unchanged

mod filters;
mod registry;

use std::fmt::Debug;

use serde_json::Value;

use crate::error::{GridError, Result};

pub use filters::{SelectFilter, StubFilter, TextFilter};
pub use registry::{FilterFactory, FilterRegistry};

/// Filtering capability rendered in the grid's header filter row
pub trait Filter: Debug + Send + Sync {
	/// Input name, usually the column attribute
	fn name(&self) -> Option<&str>;

	/// Value the filter was constructed with
	fn value(&self) -> Option<&Value>;

	/// Renders the filter input
	fn render(&self) -> String;

	/// Returns true for filters that render no UI
	fn is_stub(&self) -> bool {
		false
	}
}

/// Construction parameters shared by all filters
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
	/// Input name
	pub name: String,
	/// Initial value, taken from `filterData`
	pub value: Option<Value>,
}

impl FilterParams {
	/// Creates parameters without a value
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: None,
		}
	}

	/// Sets the value
	pub fn with_value(mut self, value: Value) -> Self {
		self.value = Some(value);
		self
	}
}

/// Unresolved `filter` configuration value
#[derive(Debug)]
pub enum FilterSpec {
	/// `filter: false`
	Disabled,
	/// A token looked up in the [`FilterRegistry`]
	Token(String),
	/// A filter supplied by the caller
	Filter(Box<dyn Filter>),
}

impl From<&str> for FilterSpec {
	fn from(token: &str) -> Self {
		Self::Token(token.to_string())
	}
}

impl From<String> for FilterSpec {
	fn from(token: String) -> Self {
		Self::Token(token)
	}
}

/// Outcome of filter resolution
#[derive(Debug)]
pub struct ResolvedFilter {
	/// The concrete filter
	pub filter: Box<dyn Filter>,
	/// Set when the filter came from a registry token
	///
	/// Token filters render their own cell UI, so the column falls back to
	/// the stub formatter unless told otherwise.
	pub from_token: bool,
}

/// Resolves a `filter` value into a concrete filter
///
/// # Errors
///
/// Returns [`GridError::Configuration`] when a default or token filter
/// needs a name but the column has no attribute, or when the token is not
/// registered.
pub fn resolve_filter(
	spec: Option<FilterSpec>,
	attribute: Option<&str>,
	filter_data: Option<Value>,
	registry: &FilterRegistry,
) -> Result<ResolvedFilter> {
	let (filter, from_token): (Box<dyn Filter>, bool) = match spec {
		Some(FilterSpec::Disabled) => (Box::new(StubFilter), false),
		None => {
			let name = require_attribute(attribute, "the default text filter")?;
			(Box::new(TextFilter::new(FilterParams::new(name))), false)
		}
		Some(FilterSpec::Token(token)) => {
			let name = require_attribute(attribute, "a token filter")?;
			let params = FilterParams {
				name: name.to_string(),
				value: filter_data,
			};
			(registry.create(&token, params)?, true)
		}
		Some(FilterSpec::Filter(filter)) => (filter, false),
	};
	tracing::debug!(
		attribute = attribute.unwrap_or_default(),
		stub = filter.is_stub(),
		from_token,
		"Resolved column filter"
	);
	Ok(ResolvedFilter { filter, from_token })
}

fn require_attribute<'a>(attribute: Option<&'a str>, purpose: &str) -> Result<&'a str> {
	attribute.ok_or_else(|| {
		GridError::Configuration(format!("attribute is required to name {purpose}"))
	})
}
