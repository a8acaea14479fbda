//! Runtime argument guards for untyped callers
//!
//! Rust callers of [`write_state`](crate::write_state) are type-checked by
//! the compiler. JavaScript callers and JSON-carried arguments are not, so the
//! storage helpers are also offered in a form that accepts any
//! [`UntypedValue`] and rejects non-strings before storage is touched.

use crate::error::{DomError, Result};
use crate::host::StorageProvider;
use crate::storage::{StorageArea, read_state_in, write_state_in};

/// Message for a write whose key or value is not a string.
pub const WRITE_ARGUMENT_ERROR: &str = "both key and value must be strings";

/// Message for a read whose key is not a string.
pub const READ_ARGUMENT_ERROR: &str = "key must be a string";

/// A dynamically typed argument.
pub trait UntypedValue {
	/// Returns the string content if, and only if, the value is a string.
	///
	/// No coercion: numbers, booleans and null are not strings.
	fn as_string_value(&self) -> Option<String>;
}

impl UntypedValue for serde_json::Value {
	fn as_string_value(&self) -> Option<String> {
		self.as_str().map(str::to_owned)
	}
}

#[cfg(target_arch = "wasm32")]
impl UntypedValue for wasm_bindgen::JsValue {
	fn as_string_value(&self) -> Option<String> {
		self.as_string()
	}
}

/// [`write_state_in`] for untyped arguments.
///
/// # Errors
///
/// [`DomError::InvalidArgument`] with [`WRITE_ARGUMENT_ERROR`] if `key` or
/// `value` is not a string; the provider is not consulted in that case.
pub fn write_untyped_state<P, K, V>(provider: &P, key: &K, value: &V, area: StorageArea) -> Result<()>
where
	P: StorageProvider,
	K: UntypedValue + ?Sized,
	V: UntypedValue + ?Sized,
{
	let (Some(key), Some(value)) = (key.as_string_value(), value.as_string_value()) else {
		return Err(DomError::InvalidArgument(WRITE_ARGUMENT_ERROR));
	};
	write_state_in(provider, &key, &value, area)
}

/// [`read_state_in`] for an untyped key.
///
/// # Errors
///
/// [`DomError::InvalidArgument`] with [`READ_ARGUMENT_ERROR`] if `key` is not
/// a string.
pub fn read_untyped_state<P, K>(provider: &P, key: &K, area: StorageArea) -> Result<Option<String>>
where
	P: StorageProvider,
	K: UntypedValue + ?Sized,
{
	let key = key
		.as_string_value()
		.ok_or(DomError::InvalidArgument(READ_ARGUMENT_ERROR))?;
	read_state_in(provider, &key, area)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::MockStorageProvider;
	use rstest::rstest;
	use serde_json::{Value, json};

	#[rstest]
	#[case(json!(1), json!("v"))]
	#[case(json!("k"), json!(2))]
	#[case(json!(null), json!("v"))]
	#[case(json!("k"), json!(true))]
	#[case(json!(["k"]), json!({"v": 1}))]
	fn test_write_rejects_non_strings_before_storage(#[case] key: Value, #[case] value: Value) {
		let provider = MockStorageProvider::new();

		let err = write_untyped_state(&provider, &key, &value, StorageArea::Persistent).unwrap_err();

		assert_eq!(err, DomError::InvalidArgument(WRITE_ARGUMENT_ERROR));
		assert_eq!(err.to_string(), "both key and value must be strings");
		assert_eq!(provider.storage_requests(), 0);
		assert_eq!(provider.persistent().accesses(), 0);
	}

	#[rstest]
	fn test_read_rejects_non_string_key() {
		let provider = MockStorageProvider::new();

		let err = read_untyped_state(&provider, &json!(42), StorageArea::Session).unwrap_err();

		assert_eq!(err.to_string(), "key must be a string");
		assert_eq!(provider.storage_requests(), 0);
	}

	#[rstest]
	fn test_string_arguments_pass_through() {
		let provider = MockStorageProvider::new();

		write_untyped_state(&provider, &json!("k"), &json!("v"), StorageArea::Session).unwrap();

		assert_eq!(
			read_untyped_state(&provider, &json!("k"), StorageArea::Session).unwrap(),
			Some("v".to_string())
		);
		assert_eq!(provider.persistent().length(), 0);
	}

	#[rstest]
	fn test_empty_string_is_a_string() {
		let provider = MockStorageProvider::new();
		write_untyped_state(&provider, &json!(""), &json!(""), StorageArea::Persistent).unwrap();
		assert_eq!(
			read_untyped_state(&provider, &json!(""), StorageArea::Persistent).unwrap(),
			Some(String::new())
		);
	}
}
