//! razor-dom - selector-based batch DOM mutation and Web Storage helpers
//!
//! A thin convenience layer over browser APIs for WebAssembly front ends:
//!
//! - [`select`] queries the document with a CSS selector and returns a
//!   [`Selection`] that applies style and class mutations to every match
//! - [`write_state`] / [`read_state`] store strings in `localStorage` or
//!   `sessionStorage`, picked by [`StorageArea`]
//!
//! ## Architecture
//!
//! - [`host`]: traits for the host environment (document, element, storage)
//! - [`browser`]: `web-sys` implementations of the host traits
//! - [`selection`]: the batch-mutation wrapper
//! - [`style`]: style specifications and property-name normalization
//! - [`storage`]: storage areas and read/write helpers
//! - [`untyped`]: runtime argument guards for untyped callers
//! - `bindings`: the `wasm-bindgen` JavaScript surface (WASM only)
//! - `testing`: in-memory host doubles (`testing` feature)
//!
//! Every operation is synchronous. Host failures are returned as
//! [`DomError`] and never retried or rolled back.
//!
//! ## Example
//!
//! ```ignore
//! use razor_dom::{read_state, select, write_state, StorageArea, StyleSpec};
//!
//! let cards = select(".card")?;
//! cards
//!     .set_style(&StyleSpec::from([("borderColor", "gold")]))?
//!     .add_class("featured")?;
//!
//! write_state("last-featured", &cards.len().to_string(), StorageArea::Session)?;
//! let previous = read_state("last-featured", StorageArea::Session)?;
//! ```

#![warn(missing_docs)]

pub mod browser;
pub mod error;
pub mod host;
pub mod logging;
pub mod select;
pub mod selection;
pub mod storage;
pub mod style;
pub mod untyped;

#[cfg(target_arch = "wasm32")]
pub mod bindings;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use browser::{BrowserDocument, BrowserElement, BrowserStorage};
pub use error::{DomError, HostError, Result};
pub use host::{HostDocument, HostElement, HostStorage, StorageProvider};
pub use select::{select, select_in};
pub use selection::Selection;
pub use storage::{StorageArea, read_state, read_state_in, write_state, write_state_in};
pub use style::{StyleSpec, normalize_property_name};
pub use untyped::{UntypedValue, read_untyped_state, write_untyped_state};

#[doc(hidden)]
pub mod __private {
	pub use ::web_sys;
}

/// Installs the console panic hook when the `console_error_panic_hook`
/// feature is enabled. Safe to call more than once.
pub fn init() {
	#[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))]
	console_error_panic_hook::set_once();
	crate::info_log!("razor-dom initialized");
}
