//! Error types for razor-dom

use std::fmt;

use thiserror::Error;

use crate::storage::StorageArea;

/// An exception raised by the host environment (the browser, or a test double).
///
/// Carries the exception `name` (`SyntaxError`, `QuotaExceededError`, ...) and
/// its message so the failure can be reported unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostError {
	/// Exception name as reported by the host.
	pub name: String,
	/// Human readable message.
	pub message: String,
}

impl HostError {
	/// Creates a host error from an exception name and message.
	pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			message: message.into(),
		}
	}

	/// `SyntaxError`, raised for malformed selectors and empty class tokens.
	pub fn syntax(message: impl Into<String>) -> Self {
		Self::new("SyntaxError", message)
	}

	/// `InvalidCharacterError`, raised for class tokens containing whitespace.
	pub fn invalid_character(message: impl Into<String>) -> Self {
		Self::new("InvalidCharacterError", message)
	}

	/// `QuotaExceededError`, raised when a storage area is full.
	pub fn quota_exceeded(message: impl Into<String>) -> Self {
		Self::new("QuotaExceededError", message)
	}
}

impl fmt::Display for HostError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}: {}", self.name, self.message)
	}
}

impl std::error::Error for HostError {}

/// Error type for selection, mutation and storage operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
	/// An argument from an untyped caller had the wrong type.
	///
	/// Raised before any host access takes place.
	#[error("{0}")]
	InvalidArgument(&'static str),

	/// The host rejected the selector.
	#[error("invalid selector `{selector}`: {source}")]
	InvalidSelector {
		/// The selector as given by the caller.
		selector: String,
		/// Host exception.
		source: HostError,
	},

	/// The host rejected a style property/value pair.
	#[error("style `{property}: {value}` rejected: {source}")]
	StyleRejected {
		/// Property name as given by the caller.
		property: String,
		/// Value as given by the caller.
		value: String,
		/// Host exception.
		source: HostError,
	},

	/// The host rejected a class token.
	#[error("class token `{token}` rejected: {source}")]
	InvalidClassToken {
		/// The token as given by the caller.
		token: String,
		/// Host exception.
		source: HostError,
	},

	/// A storage area failed a read or write (quota, security policy).
	#[error("{area} storage failed: {source}")]
	Storage {
		/// The area that was accessed.
		area: StorageArea,
		/// Host exception.
		source: HostError,
	},

	/// A required host object (window, document, storage area) does not exist.
	#[error("{0} is not available in this environment")]
	HostUnavailable(&'static str),
}

impl DomError {
	/// Returns the underlying host exception, if the error originated in the host.
	pub fn host_error(&self) -> Option<&HostError> {
		match self {
			Self::InvalidSelector { source, .. }
			| Self::StyleRejected { source, .. }
			| Self::InvalidClassToken { source, .. }
			| Self::Storage { source, .. } => Some(source),
			Self::InvalidArgument(_) | Self::HostUnavailable(_) => None,
		}
	}
}

/// Result type for razor-dom operations
pub type Result<T> = std::result::Result<T, DomError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_argument_message_is_verbatim() {
		let err = DomError::InvalidArgument("key must be a string");
		assert_eq!(err.to_string(), "key must be a string");
		assert!(err.host_error().is_none());
	}

	#[rstest]
	fn test_host_error_is_exposed() {
		let err = DomError::Storage {
			area: StorageArea::Session,
			source: HostError::quota_exceeded("the quota has been exceeded"),
		};

		assert_eq!(
			err.to_string(),
			"session storage failed: QuotaExceededError: the quota has been exceeded"
		);
		assert_eq!(err.host_error().map(|e| e.name.as_str()), Some("QuotaExceededError"));
	}

	#[rstest]
	fn test_selector_error_display() {
		let err = DomError::InvalidSelector {
			selector: "div[".to_string(),
			source: HostError::syntax("'div[' is not a valid selector"),
		};
		assert_eq!(
			err.to_string(),
			"invalid selector `div[`: SyntaxError: 'div[' is not a valid selector"
		);
	}
}
