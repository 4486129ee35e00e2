//! Token-to-factory registry for custom filters.
//!
//! A column configured with `filter: "<token>"` gets its filter from the
//! factory registered under that token. The registry is populated once at
//! startup and handed to every column built afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::{Filter, FilterParams, SelectFilter, TextFilter};
use crate::error::{GridError, Result};

/// Builds a filter from its `{name, value}` parameters.
pub type FilterFactory = Arc<dyn Fn(FilterParams) -> Box<dyn Filter> + Send + Sync>;

/// Registry of filter factories keyed by token.
///
/// # Example
///
/// ```
/// use easygrid::filter::{FilterParams, FilterRegistry, TextFilter};
///
/// let mut registry = FilterRegistry::new();
/// registry.register("search", |params| Box::new(TextFilter::new(params)));
///
/// assert!(registry.contains("search"));
/// let filter = registry.create("search", FilterParams::new("title")).unwrap();
/// assert_eq!(filter.name(), Some("title"));
/// assert!(registry.create("range", FilterParams::new("price")).is_err());
/// ```
#[derive(Clone, Default)]
pub struct FilterRegistry {
	factories: HashMap<String, FilterFactory>,
}

impl FilterRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding the built-in `text` and `select` filters.
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry.register("text", |params| Box::new(TextFilter::new(params)));
		registry.register("select", |params| Box::new(SelectFilter::new(params)));
		registry
	}

	/// Registers a factory, replacing any previous one under the same token.
	pub fn register<F>(&mut self, token: impl Into<String>, factory: F) -> &mut Self
	where
		F: Fn(FilterParams) -> Box<dyn Filter> + Send + Sync + 'static,
	{
		let token = token.into();
		if self.factories.insert(token.clone(), Arc::new(factory)).is_some() {
			tracing::warn!(token = %token, "Filter factory replaced");
		}
		self
	}

	/// Checks whether a token is registered.
	pub fn contains(&self, token: &str) -> bool {
		self.factories.contains_key(token)
	}

	/// Returns all registered tokens, sorted.
	pub fn tokens(&self) -> Vec<&str> {
		let mut tokens: Vec<&str> = self.factories.keys().map(String::as_str).collect();
		tokens.sort_unstable();
		tokens
	}

	/// Number of registered factories.
	pub fn len(&self) -> usize {
		self.factories.len()
	}

	/// Returns true if no factory is registered.
	pub fn is_empty(&self) -> bool {
		self.factories.is_empty()
	}

	/// Builds the filter registered under `token`.
	///
	/// Unknown tokens are a configuration error.
	pub fn create(&self, token: &str, params: FilterParams) -> Result<Box<dyn Filter>> {
		let factory = self.factories.get(token).ok_or_else(|| {
			GridError::Configuration(format!(
				"unknown filter '{}' for column '{}' (registered: {})",
				token,
				params.name,
				self.tokens().join(", ")
			))
		})?;
		Ok(factory(params))
	}
}

impl fmt::Debug for FilterRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FilterRegistry")
			.field("tokens", &self.tokens())
			.finish()
	}
}
