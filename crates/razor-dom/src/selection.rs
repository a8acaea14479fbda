//! The batch-mutation wrapper around an element collection
//!
//! A [`Selection`] owns the elements produced by one selector query and
//! applies style and class mutations to all of them at once:
//!
//! ```ignore
//! use razor_dom::{select, StyleSpec};
//!
//! let items = select(".item")?;
//! items
//!     .set_style(&StyleSpec::from([("color", "red")]))?
//!     .set_style(&StyleSpec::from([("fontWeight", "bold")]))?;
//! items.add_class("highlighted")?;
//! ```
//!
//! Mutations run in collection order and stop at the first host failure.
//! Elements processed before the failure keep their new state; there is no
//! rollback.

use crate::error::{DomError, Result};
use crate::host::HostElement;
use crate::style::{StyleSpec, normalize_property_name};

const CSS_TEXT: &str = "cssText";

/// An immutable, ordered collection of elements with batch mutation methods.
#[derive(Debug, Clone)]
pub struct Selection<E> {
	elements: Vec<E>,
}

impl<E> Selection<E> {
	/// Wraps `elements`. The collection cannot be changed afterwards.
	pub fn new(elements: Vec<E>) -> Self {
		Self { elements }
	}

	/// Creates an empty selection.
	pub fn empty() -> Self {
		Self {
			elements: Vec::new(),
		}
	}

	/// Number of elements in the selection.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Whether the selection matched nothing.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Iterates the elements in collection order.
	pub fn iter(&self) -> std::slice::Iter<'_, E> {
		self.elements.iter()
	}

	/// The elements as a slice.
	pub fn elements(&self) -> &[E] {
		&self.elements
	}

	/// Consumes the selection and returns its elements.
	pub fn into_elements(self) -> Vec<E> {
		self.elements
	}
}

impl<E: HostElement> Selection<E> {
	/// Applies every property/value pair of `style` to every element.
	///
	/// Pairs are applied in `style` order; for each pair, elements are visited
	/// in collection order. Returns `self` so calls can be chained.
	///
	/// The pseudo-property `cssText` replaces each element's whole inline
	/// declaration instead of setting a single property.
	///
	/// # Errors
	///
	/// [`DomError::StyleRejected`] if the host rejects a pair. Remaining
	/// pairs and elements are left untouched.
	pub fn set_style(&self, style: &StyleSpec) -> Result<&Self> {
		for (property, value) in style.iter() {
			let css_name = normalize_property_name(property);
			self.for_each_element(|element| {
				let written = if property == CSS_TEXT {
					element.set_css_text(value)
				} else {
					element.set_style_property(&css_name, value)
				};
				written.map_err(|source| DomError::StyleRejected {
					property: property.to_string(),
					value: value.to_string(),
					source,
				})
			})?;
		}
		Ok(self)
	}

	/// Adds the class `name` to every element.
	///
	/// Elements that already carry the class are unchanged.
	///
	/// # Errors
	///
	/// [`DomError::InvalidClassToken`] if the host rejects `name` (empty, or
	/// containing whitespace).
	pub fn add_class(&self, name: &str) -> Result<()> {
		self.for_each_element(|element| {
			element
				.add_class(name)
				.map_err(|source| class_token_error(name, source))
		})
	}

	/// Removes the class `name` from every element.
	///
	/// Elements without the class are unchanged.
	///
	/// # Errors
	///
	/// [`DomError::InvalidClassToken`] if the host rejects `name`.
	pub fn remove_class(&self, name: &str) -> Result<()> {
		self.for_each_element(|element| {
			element
				.remove_class(name)
				.map_err(|source| class_token_error(name, source))
		})
	}

	fn for_each_element<F>(&self, mut f: F) -> Result<()>
	where
		F: FnMut(&E) -> Result<()>,
	{
		for (index, element) in self.elements.iter().enumerate() {
			if let Err(err) = f(element) {
				crate::error_log!("batch mutation stopped at element {}: {}", index, err);
				return Err(err);
			}
		}
		Ok(())
	}
}

fn class_token_error(token: &str, source: crate::error::HostError) -> DomError {
	DomError::InvalidClassToken {
		token: token.to_string(),
		source,
	}
}

impl<E> Default for Selection<E> {
	fn default() -> Self {
		Self::empty()
	}
}

impl<E> From<Vec<E>> for Selection<E> {
	fn from(elements: Vec<E>) -> Self {
		Self::new(elements)
	}
}

impl<E> IntoIterator for Selection<E> {
	type Item = E;
	type IntoIter = std::vec::IntoIter<E>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.into_iter()
	}
}

impl<'a, E> IntoIterator for &'a Selection<E> {
	type Item = &'a E;
	type IntoIter = std::slice::Iter<'a, E>;

	fn into_iter(self) -> Self::IntoIter {
		self.elements.iter()
	}
}
