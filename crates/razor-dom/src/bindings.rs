//! JavaScript surface
//!
//! Exposes the selection and storage helpers to JavaScript through
//! `wasm-bindgen`:
//!
//! ```text
//! import { select, writeState, readState } from "razor_dom";
//!
//! select(".item").setStyle({ color: "red" }).setStyle({ fontWeight: "bold" });
//! select(".item").addClass("seen");
//! writeState("theme", "dark");          // localStorage
//! readState("draft", true);             // sessionStorage, null when absent
//! ```
//!
//! JavaScript callers are untyped, so storage arguments go through the
//! runtime guards in [`crate::untyped`] and fail with a `TypeError`. Host
//! exceptions are rethrown as an `Error` carrying the host's name and message.

use js_sys::{Array, JsString, Object, TypeError};
use wasm_bindgen::prelude::*;

use crate::browser::{BrowserElement, BrowserStorage};
use crate::error::DomError;
use crate::selection::Selection;
use crate::storage::StorageArea;
use crate::style::StyleSpec;
use crate::untyped::{read_untyped_state, write_untyped_state};

impl From<DomError> for JsValue {
	fn from(err: DomError) -> Self {
		if let DomError::InvalidArgument(message) = err {
			return TypeError::new(message).into();
		}
		match err.host_error() {
			Some(host) => {
				let error = js_sys::Error::new(&host.message);
				error.set_name(&host.name);
				error.into()
			}
			None => js_sys::Error::new(&err.to_string()).into(),
		}
	}
}

/// Elements matched by [`select`], with batch mutation methods.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct RazorNodeList {
	selection: Selection<BrowserElement>,
}

#[wasm_bindgen]
impl RazorNodeList {
	/// Number of matched elements.
	#[wasm_bindgen(getter)]
	pub fn length(&self) -> u32 {
		// a NodeList length is an unsigned long
		self.selection.len() as u32
	}

	/// Assigns every property of `style` on every element and returns a list
	/// over the same elements for chaining.
	#[wasm_bindgen(js_name = setStyle)]
	pub fn set_style(&self, style: &JsValue) -> Result<RazorNodeList, JsValue> {
		let spec = style_from_js(style)?;
		self.selection.set_style(&spec)?;
		Ok(self.clone())
	}

	/// Adds a class to every element.
	#[wasm_bindgen(js_name = addClass)]
	pub fn add_class(&self, name: &str) -> Result<(), JsValue> {
		Ok(self.selection.add_class(name)?)
	}

	/// Removes a class from every element.
	#[wasm_bindgen(js_name = removeClass)]
	pub fn remove_class(&self, name: &str) -> Result<(), JsValue> {
		Ok(self.selection.remove_class(name)?)
	}
}

impl From<Selection<BrowserElement>> for RazorNodeList {
	fn from(selection: Selection<BrowserElement>) -> Self {
		Self { selection }
	}
}

#[wasm_bindgen]
extern "C" {
	/// The global `String` function, i.e. JavaScript `ToString`.
	#[wasm_bindgen(js_name = String, catch)]
	fn js_to_string(value: &JsValue) -> Result<JsString, JsValue>;
}

/// Reads the own enumerable properties of `style` into a [`StyleSpec`].
///
/// Values are converted the way a property assignment on a
/// `CSSStyleDeclaration` converts them: `null` becomes the empty string
/// (which clears the property), strings are kept, and everything else goes
/// through `ToString`, so `undefined` is the text `"undefined"` and the host
/// ignores it. Only symbols, which `ToString` rejects, fail.
fn style_from_js(style: &JsValue) -> Result<StyleSpec, JsValue> {
	if style.is_null() || style.is_undefined() {
		return Err(TypeError::new("Cannot convert undefined or null to object").into());
	}

	let mut spec = StyleSpec::new();
	for entry in Object::entries(style.unchecked_ref::<Object>()).iter() {
		let pair: Array = entry.unchecked_into();
		let Some(property) = pair.get(0).as_string() else {
			continue;
		};
		let raw = pair.get(1);
		if raw.is_undefined() {
			crate::warn_log!("setStyle: `{}` is undefined and will not change the property", property);
		}
		spec.set(property, style_value_from_js(&raw)?);
	}
	Ok(spec)
}

fn style_value_from_js(raw: &JsValue) -> Result<String, JsValue> {
	if raw.is_null() {
		return Ok(String::new());
	}
	if let Some(text) = raw.as_string() {
		return Ok(text);
	}
	if raw.is_symbol() {
		return Err(TypeError::new("Cannot convert a Symbol value to a string").into());
	}
	Ok(js_to_string(raw)?.into())
}

/// Selects every element of the current document matching `selector`.
#[wasm_bindgen(js_name = select)]
pub fn select_js(selector: &str) -> Result<RazorNodeList, JsValue> {
	Ok(crate::select(selector)?.into())
}

/// Stores `value` under `key`; `useSessionStorage` picks `sessionStorage`.
#[wasm_bindgen(js_name = writeState)]
pub fn write_state_js(key: JsValue, value: JsValue, use_session_storage: Option<bool>) -> Result<(), JsValue> {
	let area = StorageArea::from_session_flag(use_session_storage.unwrap_or(false));
	Ok(write_untyped_state(&BrowserStorage, &key, &value, area)?)
}

/// Returns the value stored under `key`, or `null`.
#[wasm_bindgen(js_name = readState)]
pub fn read_state_js(key: JsValue, use_session_storage: Option<bool>) -> Result<JsValue, JsValue> {
	let area = StorageArea::from_session_flag(use_session_storage.unwrap_or(false));
	Ok(match read_untyped_state(&BrowserStorage, &key, area)? {
		Some(value) => JsValue::from_str(&value),
		None => JsValue::NULL,
	})
}

/// Installs the panic hook when the `console_error_panic_hook` feature is on.
#[wasm_bindgen(js_name = init)]
pub fn init_js() {
	crate::init();
}
