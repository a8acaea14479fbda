//! Host environment seam
//!
//! Everything razor-dom does is delegated to the host through these traits:
//! element queries, inline style and class-list mutation, and key-value
//! storage. The browser implementations live in [`crate::browser`]; the
//! in-memory doubles used by tests live in `crate::testing`.

use crate::error::{HostError, Result};
use crate::storage::StorageArea;

/// A single host UI element that can receive batch mutations.
pub trait HostElement: Clone {
	/// Assigns `value` to the inline style property `property`.
	///
	/// `property` is always in CSS form (`background-color`, `--accent`).
	/// Unknown property names are left to the host, which typically ignores them.
	fn set_style_property(&self, property: &str, value: &str) -> std::result::Result<(), HostError>;

	/// Replaces the whole inline style declaration with the declarations
	/// parsed from `text`, as assigning `style.cssText` does.
	fn set_css_text(&self, text: &str) -> std::result::Result<(), HostError>;

	/// Adds `token` to the element's class set.
	fn add_class(&self, token: &str) -> std::result::Result<(), HostError>;

	/// Removes `token` from the element's class set.
	fn remove_class(&self, token: &str) -> std::result::Result<(), HostError>;
}

/// A document that can be queried with CSS selectors.
pub trait HostDocument {
	/// Element type produced by queries.
	type Element: HostElement;

	/// Returns every element matching `selector`, in document order.
	///
	/// Malformed selectors are reported by the host as a `SyntaxError`.
	fn query_selector_all(&self, selector: &str) -> std::result::Result<Vec<Self::Element>, HostError>;
}

/// A string key-value storage area.
pub trait HostStorage {
	/// Returns the value stored under `key`, or `None` when absent.
	fn get_item(&self, key: &str) -> std::result::Result<Option<String>, HostError>;

	/// Stores `value` under `key`, replacing any previous value.
	fn set_item(&self, key: &str, value: &str) -> std::result::Result<(), HostError>;
}

/// Hands out the storage area selected by a [`StorageArea`].
pub trait StorageProvider {
	/// Storage type for both areas.
	type Storage: HostStorage;

	/// Returns the storage for `area`.
	///
	/// Fails with [`crate::DomError::HostUnavailable`] when the host does not
	/// expose the area, or with [`crate::DomError::Storage`] when access is
	/// denied.
	fn storage(&self, area: StorageArea) -> Result<Self::Storage>;
}
