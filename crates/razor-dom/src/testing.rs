//! In-memory host doubles
//!
//! These types implement the [`crate::host`] traits without a browser so that
//! selection, mutation and storage logic can be tested natively.
//! [`MockDocument`] parses and matches with `scraper`, so selectors behave as
//! they do in a browser, combinators and pseudo-classes included.
//!
//! # Example
//!
//! ```ignore
//! use razor_dom::testing::{MockDocument, MockStorageProvider};
//! use razor_dom::{select_in, StorageArea, write_state_in, read_state_in};
//!
//! let document = MockDocument::parse(r#"<ul><li class="item"></li><li class="item"></li></ul>"#);
//! assert_eq!(select_in(&document, "ul > .item")?.len(), 2);
//!
//! let storage = MockStorageProvider::new();
//! write_state_in(&storage, "k", "v", StorageArea::Persistent)?;
//! assert_eq!(read_state_in(&storage, "k", StorageArea::Persistent)?, Some("v".into()));
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use scraper::{ElementRef, Html, Selector};

use crate::error::{DomError, HostError, Result};
use crate::host::{HostDocument, HostElement, HostStorage, StorageProvider};
use crate::storage::StorageArea;
use crate::style::normalize_property_name;

/// Attribute carrying an element's position in document order while the
/// document is rendered for matching.
const NODE_MARKER: &str = "data-razor-node";

/// Elements that have no end tag and no children.
const VOID_ELEMENTS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
	"wbr",
];

thread_local! {
	static WRITE_CLOCK: Cell<u64> = const { Cell::new(0) };
}

fn tick() -> u64 {
	WRITE_CLOCK.with(|clock| {
		let next = clock.get() + 1;
		clock.set(next);
		next
	})
}

fn validate_token(token: &str) -> std::result::Result<(), HostError> {
	if token.is_empty() {
		return Err(HostError::syntax("the token provided must not be empty"));
	}
	if token.chars().any(|c| c.is_ascii_whitespace()) {
		return Err(HostError::invalid_character(format!(
			"the token provided ('{}') contains HTML space characters",
			token
		)));
	}
	Ok(())
}

/// Splits `color: red; margin: 0` into `(name, value)` pairs.
fn parse_declarations(text: &str) -> Vec<(String, String)> {
	text.split(';')
		.filter_map(|declaration| declaration.split_once(':'))
		.map(|(name, value)| (name.trim().to_string(), value.trim().to_string()))
		.filter(|(name, _)| !name.is_empty())
		.collect()
}

fn escape_attribute(value: &str) -> String {
	value
		.replace('&', "&amp;")
		.replace('"', "&quot;")
		.replace('<', "&lt;")
}

#[derive(Debug, Default)]
struct ElementState {
	tag: String,
	id: Option<String>,
	classes: Vec<String>,
	attributes: Vec<(String, String)>,
	styles: Vec<(String, String)>,
	writes: Vec<(String, String, u64)>,
	rejected_properties: Vec<String>,
	children: Vec<MockElement>,
}

impl ElementState {
	fn check_writable(&self, property: &str) -> std::result::Result<(), HostError> {
		if self.rejected_properties.iter().any(|p| p == property) {
			return Err(HostError::new(
				"NoModificationAllowedError",
				format!("cannot set '{}'", property),
			));
		}
		Ok(())
	}

	fn add_class(&mut self, class: &str) {
		if !self.classes.iter().any(|c| c == class) {
			self.classes.push(class.to_string());
		}
	}
}

/// Mock element with attributes, an inline style map, a class set and
/// child elements.
///
/// Clones share state, like references to the same DOM node.
#[derive(Debug, Clone)]
pub struct MockElement {
	state: Rc<RefCell<ElementState>>,
}

impl MockElement {
	/// Creates an element with the given tag name.
	pub fn new(tag: impl Into<String>) -> Self {
		Self {
			state: Rc::new(RefCell::new(ElementState {
				tag: tag.into().to_ascii_lowercase(),
				..ElementState::default()
			})),
		}
	}

	/// Sets the element id.
	pub fn with_id(self, id: impl Into<String>) -> Self {
		self.state.borrow_mut().id = Some(id.into());
		self
	}

	/// Adds an initial class.
	pub fn with_class(self, class: impl Into<String>) -> Self {
		self.state.borrow_mut().add_class(&class.into());
		self
	}

	/// Appends a child element.
	pub fn with_child(self, child: MockElement) -> Self {
		self.state.borrow_mut().children.push(child);
		self
	}

	/// Makes the element reject writes to `property` (CSS form, or `cssText`),
	/// as a host would for a read-only or invalid declaration.
	pub fn rejecting_style(self, property: impl Into<String>) -> Self {
		self.state
			.borrow_mut()
			.rejected_properties
			.push(property.into());
		self
	}

	/// Tag name, lowercased.
	pub fn tag(&self) -> String {
		self.state.borrow().tag.clone()
	}

	/// Element id.
	pub fn id(&self) -> Option<String> {
		self.state.borrow().id.clone()
	}

	/// Reads an inline style property. Accepts camelCase or CSS names.
	pub fn style(&self, property: &str) -> Option<String> {
		let name = normalize_property_name(property);
		self.state
			.borrow()
			.styles
			.iter()
			.find(|(n, _)| *n == name)
			.map(|(_, v)| v.clone())
	}

	/// Every style write received, in order, as `(property, value)`.
	pub fn style_writes(&self) -> Vec<(String, String)> {
		self.state
			.borrow()
			.writes
			.iter()
			.map(|(p, v, _)| (p.clone(), v.clone()))
			.collect()
	}

	/// Position of the last write to `property` on a clock shared by all
	/// mock elements of the current thread.
	pub fn write_sequence(&self, property: &str) -> Option<u64> {
		let name = normalize_property_name(property);
		self.state
			.borrow()
			.writes
			.iter()
			.rev()
			.find(|(p, _, _)| *p == name)
			.map(|(_, _, seq)| *seq)
	}

	/// Class names in insertion order.
	pub fn class_names(&self) -> Vec<String> {
		self.state.borrow().classes.clone()
	}

	/// Whether the element carries `class`.
	pub fn has_class(&self, class: &str) -> bool {
		self.state.borrow().classes.iter().any(|c| c == class)
	}

	fn from_parsed(parsed: ElementRef<'_>) -> Self {
		let element = MockElement::new(parsed.value().name());
		{
			let mut state = element.state.borrow_mut();
			for (name, value) in parsed.value().attrs() {
				match name {
					"id" => state.id = Some(value.to_string()),
					"class" => value
						.split_ascii_whitespace()
						.for_each(|class| state.add_class(class)),
					"style" => state.styles = parse_declarations(value),
					_ => state
						.attributes
						.push((name.to_string(), value.to_string())),
				}
			}
			state.children = parsed
				.children()
				.filter_map(ElementRef::wrap)
				.map(Self::from_parsed)
				.collect();
		}
		element
	}

	/// Writes the element as HTML, tagging it with its index in `nodes`.
	fn render(&self, out: &mut String, nodes: &mut Vec<MockElement>) {
		let index = nodes.len();
		nodes.push(self.clone());

		let state = self.state.borrow();
		out.push_str(&format!("<{} {}=\"{}\"", state.tag, NODE_MARKER, index));
		if let Some(id) = &state.id {
			out.push_str(&format!(" id=\"{}\"", escape_attribute(id)));
		}
		if !state.classes.is_empty() {
			out.push_str(&format!(" class=\"{}\"", escape_attribute(&state.classes.join(" "))));
		}
		if !state.styles.is_empty() {
			let declarations: Vec<_> = state
				.styles
				.iter()
				.map(|(name, value)| format!("{}: {}", name, value))
				.collect();
			out.push_str(&format!(" style=\"{}\"", escape_attribute(&declarations.join("; "))));
		}
		for (name, value) in &state.attributes {
			out.push_str(&format!(" {}=\"{}\"", name, escape_attribute(value)));
		}
		out.push('>');

		if VOID_ELEMENTS.contains(&state.tag.as_str()) {
			return;
		}
		for child in &state.children {
			child.render(out, nodes);
		}
		out.push_str(&format!("</{}>", state.tag));
	}

	fn collect(&self, nodes: &mut Vec<MockElement>) {
		nodes.push(self.clone());
		for child in &self.state.borrow().children {
			child.collect(nodes);
		}
	}
}

impl PartialEq for MockElement {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.state, &other.state)
	}
}

impl HostElement for MockElement {
	fn set_style_property(&self, property: &str, value: &str) -> std::result::Result<(), HostError> {
		let mut state = self.state.borrow_mut();
		state.check_writable(property)?;
		match state.styles.iter_mut().find(|(n, _)| n == property) {
			Some(entry) => entry.1 = value.to_string(),
			None => state.styles.push((property.to_string(), value.to_string())),
		}
		state
			.writes
			.push((property.to_string(), value.to_string(), tick()));
		Ok(())
	}

	fn set_css_text(&self, text: &str) -> std::result::Result<(), HostError> {
		let mut state = self.state.borrow_mut();
		state.check_writable("cssText")?;
		state.styles = parse_declarations(text);
		state
			.writes
			.push(("cssText".to_string(), text.to_string(), tick()));
		Ok(())
	}

	fn add_class(&self, token: &str) -> std::result::Result<(), HostError> {
		validate_token(token)?;
		self.state.borrow_mut().add_class(token);
		Ok(())
	}

	fn remove_class(&self, token: &str) -> std::result::Result<(), HostError> {
		validate_token(token)?;
		self.state.borrow_mut().classes.retain(|c| c != token);
		Ok(())
	}
}

/// Mock document: a tree of [`MockElement`]s matched with `scraper`.
///
/// Every query renders the current tree, mutations included, as HTML and
/// runs the selector over the parsed result, so any selector `scraper`
/// understands works and malformed ones fail with `SyntaxError`.
#[derive(Debug, Clone, Default)]
pub struct MockDocument {
	roots: Vec<MockElement>,
}

impl MockDocument {
	/// Creates an empty document.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a document from an HTML fragment. `id`, `class` and `style`
	/// attributes seed the element state; text content is dropped.
	pub fn parse(html: &str) -> Self {
		let fragment = Html::parse_fragment(html);
		Self {
			roots: fragment
				.root_element()
				.children()
				.filter_map(ElementRef::wrap)
				.map(MockElement::from_parsed)
				.collect(),
		}
	}

	/// Appends a top-level element.
	pub fn with_element(mut self, element: MockElement) -> Self {
		self.roots.push(element);
		self
	}

	/// Appends a top-level element.
	pub fn push(&mut self, element: MockElement) {
		self.roots.push(element);
	}

	/// Every element in document order.
	pub fn elements(&self) -> Vec<MockElement> {
		let mut nodes = Vec::new();
		for root in &self.roots {
			root.collect(&mut nodes);
		}
		nodes
	}
}

impl HostDocument for MockDocument {
	type Element = MockElement;

	fn query_selector_all(&self, selector: &str) -> std::result::Result<Vec<MockElement>, HostError> {
		let parsed = Selector::parse(selector)
			.map_err(|_| HostError::syntax(format!("'{}' is not a valid selector", selector)))?;

		let mut markup = String::new();
		let mut nodes = Vec::new();
		for root in &self.roots {
			root.render(&mut markup, &mut nodes);
		}

		Ok(Html::parse_fragment(&markup)
			.select(&parsed)
			.filter_map(|found| found.value().attr(NODE_MARKER)?.parse::<usize>().ok())
			.filter_map(|index| nodes.get(index).cloned())
			.collect())
	}
}

/// In-memory storage area with an optional size quota.
///
/// Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MockStorage {
	data: Rc<RefCell<HashMap<String, String>>>,
	quota: Option<usize>,
	accesses: Rc<Cell<usize>>,
}

impl MockStorage {
	/// Creates an empty storage area.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a storage area holding `data`.
	pub fn with_data(data: HashMap<String, String>) -> Self {
		Self {
			data: Rc::new(RefCell::new(data)),
			..Self::default()
		}
	}

	/// Limits the total size of keys and values, in bytes.
	pub fn with_quota(mut self, bytes: usize) -> Self {
		self.quota = Some(bytes);
		self
	}

	/// Number of stored entries.
	pub fn length(&self) -> usize {
		self.data.borrow().len()
	}

	/// Number of `get_item`/`set_item` calls received through [`HostStorage`].
	pub fn accesses(&self) -> usize {
		self.accesses.get()
	}

	/// Stored `(key, value)` pairs, in no particular order.
	pub fn entries(&self) -> Vec<(String, String)> {
		self.data
			.borrow()
			.iter()
			.map(|(k, v)| (k.clone(), v.clone()))
			.collect()
	}

	/// Removes every entry, as `Storage.clear()` does.
	pub fn clear(&self) {
		self.data.borrow_mut().clear();
	}

	fn size_with(&self, key: &str, value: &str) -> usize {
		let data = self.data.borrow();
		data.iter()
			.filter(|(k, _)| k.as_str() != key)
			.map(|(k, v)| k.len() + v.len())
			.sum::<usize>()
			+ key.len()
			+ value.len()
	}
}

impl HostStorage for MockStorage {
	fn get_item(&self, key: &str) -> std::result::Result<Option<String>, HostError> {
		self.accesses.set(self.accesses.get() + 1);
		Ok(self.data.borrow().get(key).cloned())
	}

	fn set_item(&self, key: &str, value: &str) -> std::result::Result<(), HostError> {
		self.accesses.set(self.accesses.get() + 1);
		if let Some(quota) = self.quota
			&& self.size_with(key, value) > quota
		{
			return Err(HostError::quota_exceeded(format!(
				"setting the value of '{}' exceeded the quota",
				key
			)));
		}
		self.data
			.borrow_mut()
			.insert(key.to_string(), value.to_string());
		Ok(())
	}
}

/// Mock pair of persistent and session storage areas.
#[derive(Debug, Clone, Default)]
pub struct MockStorageProvider {
	persistent: MockStorage,
	session: MockStorage,
	missing: Option<StorageArea>,
	requests: Rc<Cell<usize>>,
}

impl MockStorageProvider {
	/// Creates a provider with two empty areas.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a provider from existing areas.
	pub fn with_areas(persistent: MockStorage, session: MockStorage) -> Self {
		Self {
			persistent,
			session,
			..Self::default()
		}
	}

	/// Makes `area` unavailable, as in a context with storage disabled.
	pub fn without(mut self, area: StorageArea) -> Self {
		self.missing = Some(area);
		self
	}

	/// The persistent area.
	pub fn persistent(&self) -> &MockStorage {
		&self.persistent
	}

	/// The session area.
	pub fn session(&self) -> &MockStorage {
		&self.session
	}

	/// Number of times a storage area was requested.
	pub fn storage_requests(&self) -> usize {
		self.requests.get()
	}
}

impl StorageProvider for MockStorageProvider {
	type Storage = MockStorage;

	fn storage(&self, area: StorageArea) -> Result<MockStorage> {
		self.requests.set(self.requests.get() + 1);
		if self.missing == Some(area) {
			return Err(DomError::HostUnavailable(area.host_name()));
		}
		Ok(match area {
			StorageArea::Persistent => self.persistent.clone(),
			StorageArea::Session => self.session.clone(),
		})
	}
}
