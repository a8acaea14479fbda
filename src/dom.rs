//! Selector-based batch DOM mutation and Web Storage helpers
//!
//! This module provides access to razor-dom.
//!
//! ## Architecture
//!
//! - **Selection**: `select` wraps every element matching a CSS selector
//! - **Batch mutation**: `set_style`, `add_class` and `remove_class` apply to
//!   the whole selection, in document order
//! - **Storage**: `write_state` / `read_state` over `localStorage` and
//!   `sessionStorage`
//!
//! ## Example
//!
//! ```rust,ignore
//! use razor::dom::{select, read_state, write_state, StorageArea, StyleSpec};
//!
//! let rows = select("table.results tr")?;
//! rows.set_style(&StyleSpec::from([("backgroundColor", "#fafafa")]))?;
//! rows.remove_class("loading")?;
//!
//! write_state("results-seen", "true", StorageArea::Persistent)?;
//! ```

// Re-export all razor-dom functionality
pub use razor_dom::*;
