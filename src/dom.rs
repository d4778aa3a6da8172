//! Small browser lookups shared by the page features.
//!
//! Everything here returns `Option`: a missing window, document or element
//! just leaves the calling feature inert.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, FocusOptions, HtmlElement, Window};

pub fn window() -> Option<Window> {
	web_sys::window()
}

pub fn document() -> Option<Document> {
	window()?.document()
}

/// Current viewport size in CSS pixels.
pub fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	let w = window.inner_width().ok()?.as_f64()?;
	let h = window.inner_height().ok()?.as_f64()?;
	Some((w, h))
}

/// Vertical scroll offset of the page.
pub fn scroll_y() -> f64 {
	window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Full scrollable height of the document.
pub fn document_height() -> Option<f64> {
	Some(document()?.document_element()?.scroll_height() as f64)
}

/// Top offset of the element with the given id, relative to its offset parent.
pub fn offset_top(id: &str) -> Option<f64> {
	let element: HtmlElement = document()?.get_element_by_id(id)?.dyn_into().ok()?;
	Some(element.offset_top() as f64)
}

/// The URL fragment without its leading `#`, if there is one.
pub fn location_fragment() -> Option<String> {
	let hash = window()?.location().hash().ok()?;
	let id = hash.strip_prefix('#')?;
	(!id.is_empty()).then(|| id.to_string())
}

/// The element that currently has keyboard focus, if it can take focus back later.
pub fn focused_element() -> Option<HtmlElement> {
	document()?.active_element()?.dyn_into().ok()
}

/// Whether `target` is, or sits inside, an `<a>` element.
pub fn is_within_link(target: Option<EventTarget>) -> bool {
	target
		.and_then(|t| t.dyn_into::<Element>().ok())
		.and_then(|el| el.closest("a").ok().flatten())
		.is_some()
}

/// Whether the event hit `element` itself rather than one of its children.
pub fn is_same_target(target: Option<EventTarget>, element: &HtmlElement) -> bool {
	let element: &EventTarget = element.as_ref();
	target.is_some_and(|t| t == *element)
}

/// Move keyboard focus without scrolling the page to the element.
pub fn focus_without_scroll(element: &HtmlElement) {
	let options = FocusOptions::new();
	options.set_prevent_scroll(true);
	let _ = element.focus_with_options(&options);
}

/// Add or remove a class on `<body>`.
pub fn toggle_body_class(class: &str, on: bool) {
	let Some(body) = document().and_then(|d| d.body()) else {
		return;
	};
	let _ = body.class_list().toggle_with_force(class, on);
}
