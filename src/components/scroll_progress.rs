//! Reading-progress bar pinned to the top of the page.

use leptos::ev;
use leptos::prelude::*;

use crate::dom;

/// Percentage of the scrollable range already scrolled past, in `[0, 100]`.
///
/// A page that does not scroll (`document_height <= viewport_height`) reports 0.
pub fn scroll_progress(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
	let progress = scroll_top / (document_height - viewport_height) * 100.0;
	if progress.is_finite() && document_height > viewport_height {
		progress.clamp(0.0, 100.0)
	} else {
		0.0
	}
}

fn measure() -> f64 {
	let Some(window) = dom::window() else {
		return 0.0;
	};
	let viewport = dom::viewport_size(&window).map_or(0.0, |(_, h)| h);
	let document = dom::document_height().unwrap_or(viewport);
	scroll_progress(dom::scroll_y(), document, viewport)
}

/// Thin bar whose width tracks scroll position.
#[component]
pub fn ScrollProgress() -> impl IntoView {
	let progress = RwSignal::new(0.0_f64);

	Effect::new(move |_| progress.set(measure()));
	let on_scroll = window_event_listener(ev::scroll, move |_| progress.set(measure()));
	let on_resize = window_event_listener(ev::resize, move |_| progress.set(measure()));
	let on_load = window_event_listener(ev::load, move |_| progress.set(measure()));
	on_cleanup(move || {
		on_scroll.remove();
		on_resize.remove();
		on_load.remove();
	});

	view! {
		<div class="scroll-progress" aria-hidden="true">
			<div
				id="scroll-progress-bar"
				class="scroll-progress-bar"
				style:width=move || format!("{}%", progress.get())
			/>
		</div>
	}
}
