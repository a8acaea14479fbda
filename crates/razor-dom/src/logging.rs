//! Logging macros for razor-dom
//!
//! The macros write to the browser console on WASM and to stderr on native
//! targets. All of them compile to no-ops in release builds.
//!
//! | Macro | Debug Assertions | Feature Required | WASM | Non-WASM |
//! |-------|------------------|------------------|------|----------|
//! | `debug_log!` | Required | `debug-hooks` | `console.debug` | `eprintln!` |
//! | `info_log!` | Required | None | `console.info` | `eprintln!` |
//! | `warn_log!` | Required | None | `console.warn` | `eprintln!` |
//! | `error_log!` | Required | None | `console.error` | `eprintln!` |
//!
//! ## Example
//!
//! ```ignore
//! use razor_dom::{debug_log, error_log, info_log, warn_log};
//!
//! // Only logged when both `debug-hooks` and `debug_assertions` are enabled
//! debug_log!("select `{}` matched {} elements", selector, count);
//!
//! // Logged when `debug_assertions` are enabled
//! info_log!("razor-dom initialized");
//! warn_log!("setStyle: `{}` is undefined", property);
//! error_log!("{} write of `{}` failed: {}", area, key, source);
//! ```

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
///
/// For tracing selector queries and batch mutations while developing.
/// Compiles to a no-op unless both conditions hold.
///
/// # Arguments
///
/// Format arguments, as for `format!`.
///
/// # Example
///
/// ```ignore
/// debug_log!("select `{}` matched {} elements", ".card", 4);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", target_arch = "wasm32"))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::debug_1(&format!($($arg)*).into());
	}};
}

/// Logs a debug message (requires `debug-hooks` feature + `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, feature = "debug-hooks", not(target_arch = "wasm32")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{
		eprintln!("[DEBUG] {}", format!($($arg)*));
	}};
}

/// No-op debug_log when conditions are not met
#[macro_export]
#[cfg(not(all(debug_assertions, feature = "debug-hooks")))]
macro_rules! debug_log {
	($($arg:tt)*) => {{}};
}

/// Logs an info message (requires `debug_assertions`)
///
/// For one-off lifecycle events such as initialization. Compiles to a no-op
/// in release builds.
///
/// # Arguments
///
/// Format arguments, as for `format!`.
///
/// # Example
///
/// ```ignore
/// info_log!("razor-dom initialized");
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::info_1(&format!($($arg)*).into());
	}};
}

/// Logs an info message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! info_log {
	($($arg:tt)*) => {{
		eprintln!("[INFO] {}", format!($($arg)*));
	}};
}

/// No-op info_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! info_log {
	($($arg:tt)*) => {{}};
}

/// Logs a warning message (requires `debug_assertions`)
///
/// For input that is accepted but will have no visible effect. Compiles to
/// a no-op in release builds.
///
/// # Arguments
///
/// Format arguments, as for `format!`.
///
/// # Example
///
/// ```ignore
/// warn_log!("setStyle: `{}` is undefined and will not change the property", "color");
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::warn_1(&format!($($arg)*).into());
	}};
}

/// Logs a warning message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! warn_log {
	($($arg:tt)*) => {{
		eprintln!("[WARN] {}", format!($($arg)*));
	}};
}

/// No-op warn_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! warn_log {
	($($arg:tt)*) => {{}};
}

/// Logs an error message (requires `debug_assertions`)
///
/// Emitted right before a host failure is returned to the caller; the
/// error itself is still propagated. Compiles to a no-op in release builds.
///
/// # Arguments
///
/// Format arguments, as for `format!`.
///
/// # Example
///
/// ```ignore
/// error_log!("select `{}` failed: {}", "li[", source);
/// ```
#[macro_export]
#[cfg(all(debug_assertions, target_arch = "wasm32"))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		$crate::__private::web_sys::console::error_1(&format!($($arg)*).into());
	}};
}

/// Logs an error message (requires `debug_assertions`)
#[macro_export]
#[cfg(all(debug_assertions, not(target_arch = "wasm32")))]
macro_rules! error_log {
	($($arg:tt)*) => {{
		eprintln!("[ERROR] {}", format!($($arg)*));
	}};
}

/// No-op error_log in release builds
#[macro_export]
#[cfg(not(debug_assertions))]
macro_rules! error_log {
	($($arg:tt)*) => {{}};
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	// Import macros from crate root
	use crate::{debug_log, error_log, info_log, warn_log};

	#[rstest]
	fn test_logging_macros_compile() {
		debug_log!("select `{}` matched {} elements", ".item", 3);
		info_log!("storage area: {}", "persistent");
		warn_log!("setStyle: `{}` is undefined", "color");
		error_log!("host failure: {}", "SyntaxError");
	}

	#[rstest]
	fn test_logging_macros_no_args() {
		debug_log!("Simple debug");
		info_log!("Simple info");
		warn_log!("Simple warning");
		error_log!("Simple error");
	}
}
