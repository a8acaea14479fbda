//! Browser implementations of the host traits
//!
//! On WASM these wrap `web_sys` handles. On native targets the element and
//! document types are uninhabited and every entry point fails with
//! [`DomError::HostUnavailable`], so code written against the browser API
//! still compiles for server-side builds.

use crate::error::{DomError, Result};
#[cfg(target_arch = "wasm32")]
use crate::error::HostError;
use crate::host::{HostDocument, HostElement, HostStorage, StorageProvider};
use crate::storage::StorageArea;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use web_sys::{CssStyleDeclaration, Document, Element, Storage, window};

/// Converts a thrown JavaScript value into a [`HostError`].
///
/// `DOMException`s are `Error`s in every supported browser, so name and
/// message are taken from the `Error` interface when possible.
#[cfg(target_arch = "wasm32")]
pub(crate) fn host_error(value: JsValue) -> HostError {
	if let Some(error) = value.dyn_ref::<js_sys::Error>() {
		return HostError::new(String::from(error.name()), String::from(error.message()));
	}
	let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
	HostError::new("Error", message)
}

/// A DOM element.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserElement {
	element: Element,
}

#[cfg(target_arch = "wasm32")]
impl BrowserElement {
	/// Wraps a DOM element.
	pub fn new(element: Element) -> Self {
		Self { element }
	}

	/// The underlying DOM element.
	pub fn element(&self) -> &Element {
		&self.element
	}

	/// Inline style declaration, read from the element's `style` property so
	/// that every `ElementCSSInlineStyle` element (HTML, SVG, MathML) is covered.
	fn style(&self) -> std::result::Result<CssStyleDeclaration, HostError> {
		js_sys::Reflect::get(&self.element, &JsValue::from_str("style"))
			.map_err(host_error)?
			.dyn_into::<CssStyleDeclaration>()
			.map_err(|_| {
				HostError::new(
					"TypeError",
					format!(
						"<{}> has no inline style declaration",
						self.element.tag_name().to_lowercase()
					),
				)
			})
	}
}

#[cfg(target_arch = "wasm32")]
impl From<Element> for BrowserElement {
	fn from(element: Element) -> Self {
		Self::new(element)
	}
}

#[cfg(target_arch = "wasm32")]
impl HostElement for BrowserElement {
	fn set_style_property(&self, property: &str, value: &str) -> std::result::Result<(), HostError> {
		self.style()?.set_property(property, value).map_err(host_error)
	}

	fn set_css_text(&self, text: &str) -> std::result::Result<(), HostError> {
		self.style()?.set_css_text(text);
		Ok(())
	}

	fn add_class(&self, token: &str) -> std::result::Result<(), HostError> {
		self.element.class_list().add_1(token).map_err(host_error)
	}

	fn remove_class(&self, token: &str) -> std::result::Result<(), HostError> {
		self.element.class_list().remove_1(token).map_err(host_error)
	}
}

/// A DOM document.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct BrowserDocument {
	document: Document,
}

#[cfg(target_arch = "wasm32")]
impl BrowserDocument {
	/// The document of the current window.
	pub fn current() -> Result<Self> {
		let window = window().ok_or(DomError::HostUnavailable("window"))?;
		let document = window
			.document()
			.ok_or(DomError::HostUnavailable("document"))?;
		Ok(Self { document })
	}

	/// Wraps a specific document.
	pub fn new(document: Document) -> Self {
		Self { document }
	}
}

#[cfg(target_arch = "wasm32")]
impl HostDocument for BrowserDocument {
	type Element = BrowserElement;

	fn query_selector_all(&self, selector: &str) -> std::result::Result<Vec<BrowserElement>, HostError> {
		let node_list = self
			.document
			.query_selector_all(selector)
			.map_err(host_error)?;

		let mut elements = Vec::with_capacity(node_list.length() as usize);
		for i in 0..node_list.length() {
			if let Some(element) = node_list
				.item(i)
				.and_then(|node| node.dyn_into::<Element>().ok())
			{
				elements.push(BrowserElement::new(element));
			}
		}
		Ok(elements)
	}
}

#[cfg(target_arch = "wasm32")]
impl HostStorage for Storage {
	fn get_item(&self, key: &str) -> std::result::Result<Option<String>, HostError> {
		Storage::get_item(self, key).map_err(host_error)
	}

	fn set_item(&self, key: &str, value: &str) -> std::result::Result<(), HostError> {
		Storage::set_item(self, key, value).map_err(host_error)
	}
}

/// `localStorage` and `sessionStorage` of the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl StorageProvider for BrowserStorage {
	type Storage = Storage;

	fn storage(&self, area: StorageArea) -> Result<Storage> {
		let window = window().ok_or(DomError::HostUnavailable("window"))?;
		let storage = match area {
			StorageArea::Persistent => window.local_storage(),
			StorageArea::Session => window.session_storage(),
		};
		// access throws SecurityError when storage is disabled for the origin
		storage
			.map_err(|e| DomError::Storage {
				area,
				source: host_error(e),
			})?
			.ok_or(DomError::HostUnavailable(area.host_name()))
	}
}

/// A DOM element (uninhabited outside WASM).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserElement {}

#[cfg(not(target_arch = "wasm32"))]
impl HostElement for BrowserElement {
	fn set_style_property(&self, _: &str, _: &str) -> std::result::Result<(), crate::error::HostError> {
		match *self {}
	}

	fn set_css_text(&self, _: &str) -> std::result::Result<(), crate::error::HostError> {
		match *self {}
	}

	fn add_class(&self, _: &str) -> std::result::Result<(), crate::error::HostError> {
		match *self {}
	}

	fn remove_class(&self, _: &str) -> std::result::Result<(), crate::error::HostError> {
		match *self {}
	}
}

/// A DOM document (uninhabited outside WASM).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub enum BrowserDocument {}

#[cfg(not(target_arch = "wasm32"))]
impl BrowserDocument {
	/// Always fails: there is no document outside WASM.
	pub fn current() -> Result<Self> {
		Err(DomError::HostUnavailable("document"))
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl HostDocument for BrowserDocument {
	type Element = BrowserElement;

	fn query_selector_all(&self, _: &str) -> std::result::Result<Vec<BrowserElement>, crate::error::HostError> {
		match *self {}
	}
}

/// A browser storage area (uninhabited outside WASM).
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub enum BrowserStorageArea {}

#[cfg(not(target_arch = "wasm32"))]
impl HostStorage for BrowserStorageArea {
	fn get_item(&self, _: &str) -> std::result::Result<Option<String>, crate::error::HostError> {
		match *self {}
	}

	fn set_item(&self, _: &str, _: &str) -> std::result::Result<(), crate::error::HostError> {
		match *self {}
	}
}

#[cfg(not(target_arch = "wasm32"))]
impl StorageProvider for BrowserStorage {
	type Storage = BrowserStorageArea;

	fn storage(&self, _area: StorageArea) -> Result<BrowserStorageArea> {
		Err(DomError::HostUnavailable("window"))
	}
}
