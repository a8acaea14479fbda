//! Read/write helpers for the browser's key-value storage areas
//!
//! Two areas exist: [`StorageArea::Persistent`] (`localStorage`, kept across
//! sessions) and [`StorageArea::Session`] (`sessionStorage`, cleared when the
//! browsing session ends). Both are owned by the host; this module never
//! creates, clears or migrates them.
//!
//! ```ignore
//! use razor_dom::{read_state, write_state, StorageArea};
//!
//! write_state("theme", "dark", StorageArea::Persistent)?;
//! assert_eq!(read_state("theme", StorageArea::default())?, Some("dark".to_string()));
//! assert_eq!(read_state("theme", StorageArea::Session)?, None);
//! ```

use std::fmt;

use crate::browser::BrowserStorage;
use crate::error::{DomError, Result};
use crate::host::{HostStorage, StorageProvider};

/// Selects one of the two host storage areas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StorageArea {
	/// `localStorage`
	#[default]
	Persistent,
	/// `sessionStorage`
	Session,
}

impl StorageArea {
	/// Maps the "use session storage" flag of the JavaScript surface.
	pub fn from_session_flag(use_session: bool) -> Self {
		if use_session {
			Self::Session
		} else {
			Self::Persistent
		}
	}

	/// Name of the area on the browser `Window`.
	pub fn host_name(self) -> &'static str {
		match self {
			Self::Persistent => "localStorage",
			Self::Session => "sessionStorage",
		}
	}
}

impl fmt::Display for StorageArea {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Persistent => f.write_str("persistent"),
			Self::Session => f.write_str("session"),
		}
	}
}

/// Stores `value` under `key` in `area` of `provider`, replacing any
/// previous value.
///
/// # Errors
///
/// [`DomError::HostUnavailable`] if the area does not exist and
/// [`DomError::Storage`] if the host refuses the write (quota, policy).
pub fn write_state_in<P: StorageProvider>(
	provider: &P,
	key: &str,
	value: &str,
	area: StorageArea,
) -> Result<()> {
	let storage = provider.storage(area)?;
	storage.set_item(key, value).map_err(|source| {
		crate::error_log!("{} write of `{}` failed: {}", area, key, source);
		DomError::Storage { area, source }
	})
}

/// Returns the value stored under `key` in `area` of `provider`, or `None`
/// when there is no entry.
pub fn read_state_in<P: StorageProvider>(
	provider: &P,
	key: &str,
	area: StorageArea,
) -> Result<Option<String>> {
	let storage = provider.storage(area)?;
	storage
		.get_item(key)
		.map_err(|source| DomError::Storage { area, source })
}

/// Stores `value` under `key` in the browser storage area `area`.
///
/// On non-WASM targets there is no browser storage and this always fails
/// with [`DomError::HostUnavailable`]. See [`write_state_in`].
pub fn write_state(key: &str, value: &str, area: StorageArea) -> Result<()> {
	write_state_in(&BrowserStorage, key, value, area)
}

/// Reads a value from the browser storage area `area`.
///
/// See [`read_state_in`].
pub fn read_state(key: &str, area: StorageArea) -> Result<Option<String>> {
	read_state_in(&BrowserStorage, key, area)
}
