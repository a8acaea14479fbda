//! Selector-and-wrap entry points

use crate::browser::{BrowserDocument, BrowserElement};
use crate::error::{DomError, Result};
use crate::host::HostDocument;
use crate::selection::Selection;

/// Queries `document` for every element matching `selector` and wraps the
/// result, in document order. An empty match is not an error.
///
/// The selector is not validated here; a malformed selector is reported by
/// the host and surfaces as [`DomError::InvalidSelector`].
pub fn select_in<D: HostDocument>(document: &D, selector: &str) -> Result<Selection<D::Element>> {
	let elements = document.query_selector_all(selector).map_err(|source| {
		crate::error_log!("select `{}` failed: {}", selector, source);
		DomError::InvalidSelector {
			selector: selector.to_string(),
			source,
		}
	})?;
	crate::debug_log!("select `{}` matched {} elements", selector, elements.len());
	Ok(Selection::new(elements))
}

/// Queries the current browser document.
///
/// # Example
///
/// ```ignore
/// use razor_dom::{select, StyleSpec};
///
/// select("nav a")?.set_style(&StyleSpec::from([("color", "inherit")]))?;
/// ```
///
/// # Errors
///
/// [`DomError::HostUnavailable`] outside a window with a document (always the
/// case on non-WASM targets), and [`DomError::InvalidSelector`] for malformed
/// selectors.
pub fn select(selector: &str) -> Result<Selection<BrowserElement>> {
	let document = BrowserDocument::current()?;
	select_in(&document, selector)
}
