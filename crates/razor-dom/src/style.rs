//! Style specifications for batch style assignment
//!
//! A [`StyleSpec`] is an ordered list of property/value pairs consumed by
//! [`Selection::set_style`](crate::Selection::set_style). Property names can be
//! written the way DOM style properties are named (`backgroundColor`) or in
//! CSS form (`background-color`); [`normalize_property_name`] maps both to the
//! CSS form handed to the host.
//!
//! ```ignore
//! use razor_dom::StyleSpec;
//!
//! let style = StyleSpec::new()
//!     .with("color", "red")
//!     .with("backgroundColor", "black");
//! ```

use std::borrow::Cow;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Vendor prefixes that DOM style properties spell without a leading dash.
const VENDOR_PREFIXES: &[&str] = &["webkit", "moz", "ms", "o"];

/// Ordered mapping from style property name to value.
///
/// Setting a property twice keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSpec {
	entries: Vec<(String, String)>,
}

impl StyleSpec {
	/// Creates an empty style specification.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builder form of [`StyleSpec::set`].
	pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
		self.set(property, value);
		self
	}

	/// Sets `property` to `value`.
	pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
		let property = property.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(name, _)| *name == property) {
			Some(entry) => entry.1 = value,
			None => self.entries.push((property, value)),
		}
	}

	/// Returns the value set for `property`, if any.
	pub fn get(&self, property: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(name, _)| name == property)
			.map(|(_, value)| value.as_str())
	}

	/// Iterates property/value pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Number of properties.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether no property is set.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for StyleSpec
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut spec = Self::new();
		for (property, value) in iter {
			spec.set(property, value);
		}
		spec
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for StyleSpec
where
	K: Into<String>,
	V: Into<String>,
{
	fn from(pairs: [(K, V); N]) -> Self {
		pairs.into_iter().collect()
	}
}

impl Serialize for StyleSpec {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (property, value) in &self.entries {
			map.serialize_entry(property, value)?;
		}
		map.end()
	}
}

impl<'de> Deserialize<'de> for StyleSpec {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		struct StyleSpecVisitor;

		impl<'de> Visitor<'de> for StyleSpecVisitor {
			type Value = StyleSpec;

			fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str("a map of style property names to string values")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
				let mut spec = StyleSpec::new();
				while let Some((property, value)) = access.next_entry::<String, String>()? {
					spec.set(property, value);
				}
				Ok(spec)
			}
		}

		deserializer.deserialize_map(StyleSpecVisitor)
	}
}

/// Converts a style property name to the CSS form expected by the host.
///
/// - custom properties (`--accent`) and names already containing a dash are
///   returned unchanged
/// - `cssFloat` becomes `float`
/// - camelCase names are hyphenated: `backgroundColor` becomes
///   `background-color`, `webkitTransform` and `WebkitTransform` become
///   `-webkit-transform`
///
/// `cssText` is not a property and has no CSS form;
/// [`crate::Selection::set_style`] handles it before normalization.
pub fn normalize_property_name(property: &str) -> Cow<'_, str> {
	if property.contains('-') || !property.chars().any(|c| c.is_ascii_uppercase()) {
		return Cow::Borrowed(property);
	}
	if property == "cssFloat" {
		return Cow::Borrowed("float");
	}

	let mut out = String::with_capacity(property.len() + 4);
	if VENDOR_PREFIXES.iter().any(|prefix| {
		property
			.strip_prefix(prefix)
			.is_some_and(|rest| rest.starts_with(|c: char| c.is_ascii_uppercase()))
	}) {
		out.push('-');
	}
	for c in property.chars() {
		if c.is_ascii_uppercase() {
			out.push('-');
			out.push(c.to_ascii_lowercase());
		} else {
			out.push(c);
		}
	}
	Cow::Owned(out)
}
