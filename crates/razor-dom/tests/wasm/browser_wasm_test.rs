//! Browser tests for the web-sys host implementation
//!
//! Run with `wasm-pack test --chrome --headless crates/razor-dom`.

#[cfg(target_arch = "wasm32")]
mod wasm_browser_tests {
	use js_sys::{Object, Reflect};
	use razor_dom::bindings::{read_state_js, select_js, write_state_js};
	use razor_dom::{DomError, StorageArea, StyleSpec, read_state, select, write_state};
	use wasm_bindgen::{JsCast, JsValue};
	use wasm_bindgen_test::*;
	use web_sys::{CssStyleDeclaration, Element, window};

	const MATHML_NS: &str = "http://www.w3.org/1998/Math/MathML";

	wasm_bindgen_test_configure!(run_in_browser);

	/// Appends `count` elements with class `class` to a fresh container.
	fn mount(class: &str, count: usize) -> Element {
		let document = window().unwrap().document().unwrap();
		let container = document.create_element("div").unwrap();
		for _ in 0..count {
			let child = document.create_element("span").unwrap();
			child.set_class_name(class);
			container.append_child(&child).unwrap();
		}
		document.body().unwrap().append_child(&container).unwrap();
		container
	}

	fn inline_style(element: &Element, property: &str) -> String {
		Reflect::get(element, &JsValue::from_str("style"))
			.unwrap()
			.unchecked_into::<CssStyleDeclaration>()
			.get_property_value(property)
			.unwrap()
	}

	/// Builds a plain JS object, as a caller of `setStyle` would pass it.
	fn js_object(pairs: &[(&str, JsValue)]) -> JsValue {
		let object = Object::new();
		for (key, value) in pairs {
			Reflect::set(&object, &JsValue::from_str(key), value).unwrap();
		}
		object.into()
	}

	fn error_name(err: &JsValue) -> Option<String> {
		Reflect::get(err, &JsValue::from_str("name")).ok()?.as_string()
	}

	#[wasm_bindgen_test]
	fn test_select_counts_matches() {
		let container = mount("wasm-count", 3);

		assert_eq!(select(".wasm-count").unwrap().len(), 3);
		assert_eq!(select(".wasm-none").unwrap().len(), 0);

		container.remove();
	}

	#[wasm_bindgen_test]
	fn test_chained_set_style_last_write_wins() {
		let container = mount("wasm-style", 2);

		let spans = select(".wasm-style").unwrap();
		spans
			.set_style(&StyleSpec::from([("color", "red"), ("fontWeight", "bold")]))
			.unwrap()
			.set_style(&StyleSpec::from([("color", "blue")]))
			.unwrap();

		for span in &spans {
			assert_eq!(inline_style(span.element(), "color"), "blue");
			assert_eq!(inline_style(span.element(), "font-weight"), "bold");
		}
		container.remove();
	}

	#[wasm_bindgen_test]
	fn test_class_mutation() {
		let container = mount("wasm-class", 2);

		let spans = select(".wasm-class").unwrap();
		spans.add_class("on").unwrap();
		spans.add_class("on").unwrap();
		spans.remove_class("missing").unwrap();

		for span in &spans {
			assert_eq!(span.element().class_name(), "wasm-class on");
		}
		assert!(matches!(spans.add_class(""), Err(DomError::InvalidClassToken { .. })));
		container.remove();
	}

	#[wasm_bindgen_test]
	fn test_malformed_selector() {
		let err = select("div[").unwrap_err();
		assert_eq!(err.host_error().map(|e| e.name.as_str()), Some("SyntaxError"));
	}

	#[wasm_bindgen_test]
	fn test_storage_areas_are_isolated() {
		write_state("razor-wasm-key", "local", StorageArea::Persistent).unwrap();
		assert_eq!(read_state("razor-wasm-key", StorageArea::Session).unwrap(), None);

		write_state("razor-wasm-key", "tab", StorageArea::Session).unwrap();
		assert_eq!(
			read_state("razor-wasm-key", StorageArea::Persistent).unwrap().as_deref(),
			Some("local")
		);
	}

	#[wasm_bindgen_test]
	fn test_js_surface_type_checks() {
		let err = write_state_js(JsValue::from_f64(1.0), JsValue::from_str("v"), None).unwrap_err();
		assert!(err.is_instance_of::<js_sys::TypeError>());

		let err = read_state_js(JsValue::NULL, Some(true)).unwrap_err();
		assert!(err.is_instance_of::<js_sys::TypeError>());

		assert!(read_state_js(JsValue::from_str("razor-absent"), None).unwrap().is_null());
	}

	#[wasm_bindgen_test]
	fn test_js_set_style_converts_values_like_assignment() {
		let container = mount("wasm-js-style", 2);

		let list = select_js(".wasm-js-style").unwrap();
		assert_eq!(list.length(), 2);
		list.set_style(&js_object(&[
			("color", JsValue::from_str("red")),
			("opacity", JsValue::from_str("0.5")),
		]))
		.unwrap()
		.set_style(&js_object(&[
			// "undefined" is not a color, so the previous value stays
			("color", JsValue::UNDEFINED),
			("opacity", JsValue::NULL),
			("zIndex", JsValue::from_f64(3.0)),
			("marginTop", JsValue::from_str("2px")),
		]))
		.unwrap();

		for span in &select(".wasm-js-style").unwrap() {
			assert_eq!(inline_style(span.element(), "color"), "red");
			assert_eq!(inline_style(span.element(), "opacity"), "");
			assert_eq!(inline_style(span.element(), "z-index"), "3");
			assert_eq!(inline_style(span.element(), "margin-top"), "2px");
		}
		container.remove();
	}

	#[wasm_bindgen_test]
	fn test_js_set_style_accepts_any_value_type() {
		let container = mount("wasm-js-any", 1);

		let list = select_js(".wasm-js-any").unwrap();
		list.set_style(&js_object(&[("color", JsValue::from_str("blue"))]))
			.unwrap();
		let chained = list
			.set_style(&js_object(&[
				("color", JsValue::TRUE),
				("width", Object::new().into()),
			]))
			.unwrap();

		assert_eq!(chained.length(), 1);
		assert_eq!(inline_style(&container.first_element_child().unwrap(), "color"), "blue");
		assert!(list.set_style(&JsValue::NULL).unwrap_err().is_instance_of::<js_sys::TypeError>());
		container.remove();
	}

	#[wasm_bindgen_test]
	fn test_js_class_methods() {
		let container = mount("wasm-js-class", 2);

		let list = select_js(".wasm-js-class").unwrap();
		list.add_class("on").unwrap();
		list.remove_class("wasm-js-class").unwrap();
		assert_eq!(select_js(".on").unwrap().length(), 2);

		let err = list.add_class("").unwrap_err();
		assert_eq!(error_name(&err).as_deref(), Some("SyntaxError"));
		container.remove();
	}

	#[wasm_bindgen_test]
	fn test_js_select_rethrows_host_error() {
		let err = select_js("div[").unwrap_err();

		assert!(err.is_instance_of::<js_sys::Error>());
		assert_eq!(error_name(&err).as_deref(), Some("SyntaxError"));
		assert_eq!(select_js(".wasm-nothing").unwrap().length(), 0);
	}

	#[wasm_bindgen_test]
	fn test_mathml_elements_take_inline_style() {
		let document = window().unwrap().document().unwrap();
		let math = document.create_element_ns(Some(MATHML_NS), "math").unwrap();
		let identifier = document.create_element_ns(Some(MATHML_NS), "mi").unwrap();
		identifier.set_class_name("wasm-math");
		math.append_child(&identifier).unwrap();
		document.body().unwrap().append_child(&math).unwrap();

		select(".wasm-math")
			.unwrap()
			.set_style(&StyleSpec::from([("color", "green")]))
			.unwrap();

		assert_eq!(inline_style(&identifier, "color"), "green");
		math.remove();
	}

	#[wasm_bindgen_test]
	fn test_element_without_style_declaration_fails() {
		let document = window().unwrap().document().unwrap();
		let container = mount("wasm-plain-host", 0);
		let plain = document.create_element_ns(Some("urn:razor:test"), "thing").unwrap();
		plain.set_class_name("wasm-plain");
		container.append_child(&plain).unwrap();

		let err = select(".wasm-plain")
			.unwrap()
			.set_style(&StyleSpec::from([("color", "red")]))
			.unwrap_err();

		assert!(matches!(err, DomError::StyleRejected { .. }));
		assert_eq!(err.host_error().map(|e| e.name.as_str()), Some("TypeError"));
		container.remove();
	}
}
