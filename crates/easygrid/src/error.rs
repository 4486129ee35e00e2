//! Error types for column resolution and rendering

use thiserror::Error;

/// Errors raised while resolving or rendering a grid column
#[derive(Debug, Error)]
pub enum GridError {
	/// The column configuration is invalid
	///
	/// Covers unregistered filter tokens, a missing attribute on a path that
	/// needs one, and malformed or unknown configuration keys.
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// The `format` value is neither empty, a token nor a formatter
	#[error("Unresolved formatter for column '{attribute}': {found}")]
	UnresolvedCapability {
		/// Attribute of the offending column (empty when absent)
		attribute: String,
		/// Raw configuration value that could not be resolved
		found: String,
	},

	/// Extracting the cell value failed
	#[error("Failed to render column '{attribute}': {source}")]
	Render {
		/// Attribute of the failing column (empty when absent)
		attribute: String,
		/// Underlying failure reported by the value function
		#[source]
		source: anyhow::Error,
	},

	/// Configuration JSON could not be parsed
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

impl GridError {
	/// Returns true when the error stems from the column configuration
	///
	/// Configuration errors are deterministic: they are raised while the
	/// column is being built, before any row is rendered.
	pub fn is_configuration(&self) -> bool {
		matches!(
			self,
			Self::Configuration(_) | Self::UnresolvedCapability { .. } | Self::Json(_)
		)
	}
}

/// Result type for grid operations
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_configuration_display() {
		let err = GridError::Configuration("unknown filter 'range'".to_string());
		assert_eq!(err.to_string(), "Configuration error: unknown filter 'range'");
		assert!(err.is_configuration());
	}

	#[rstest]
	fn test_unresolved_capability_is_configuration() {
		let err = GridError::UnresolvedCapability {
			attribute: "price".to_string(),
			found: "42".to_string(),
		};
		assert_eq!(err.to_string(), "Unresolved formatter for column 'price': 42");
		assert!(err.is_configuration());
	}

	#[rstest]
	fn test_render_error_keeps_source() {
		let err = GridError::Render {
			attribute: "total".to_string(),
			source: anyhow::anyhow!("division by zero"),
		};
		assert!(!err.is_configuration());
		assert_eq!(
			err.to_string(),
			"Failed to render column 'total': division by zero"
		);
		assert!(std::error::Error::source(&err).is_some());
	}

	#[rstest]
	fn test_json_error_from() {
		let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
		let err: GridError = parse.into();
		assert!(err.is_configuration());
		assert!(err.to_string().starts_with("JSON error:"));
	}
}
