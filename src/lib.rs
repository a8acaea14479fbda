//! # Razor
//!
//! Selector-based batch DOM mutation and Web Storage helpers for Rust
//! WebAssembly front ends.
//!
//! ## Feature Flags
//!
//! - `dom` (default) - selection, batch style/class mutation, storage helpers
//! - `testing` - in-memory host doubles under `razor::dom::testing`
//! - `debug-hooks` - `debug_log!` output in debug builds
//! - `console_error_panic_hook` - readable panics in the browser console,
//!   installed by `razor::dom::init()`
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use razor::prelude::*;
//!
//! select(".item")?
//!     .set_style(&StyleSpec::from([("color", "red")]))?
//!     .add_class("active")?;
//!
//! write_state("k", "v", StorageArea::default())?;
//! assert_eq!(read_state("k", StorageArea::Persistent)?, Some("v".to_string()));
//! ```

#![warn(missing_docs)]

#[cfg(feature = "dom")]
pub mod dom;

/// Commonly used items
#[cfg(feature = "dom")]
pub mod prelude {
	pub use crate::dom::{
		DomError, Selection, StorageArea, StyleSpec, read_state, select, write_state,
	};
}
