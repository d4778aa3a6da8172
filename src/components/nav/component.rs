//! Site header: desktop links, the mobile drawer and active-link tracking.

use leptos::ev;
use leptos::prelude::*;
use web_sys::KeyboardEvent;

use super::drawer::DrawerState;
use super::sections::SectionTracker;
use crate::dom;
use crate::types::Section;

/// Re-measure section offsets and recompute the active one.
fn refresh_from_scroll(tracker: RwSignal<SectionTracker>) {
	let offsets: Vec<Option<f64>> = tracker.with_untracked(|t| {
		t.sections()
			.iter()
			.map(|id| dom::offset_top(id))
			.collect()
	});
	let scroll_y = dom::scroll_y();
	tracker.maybe_update(|t| t.update_from_scroll(scroll_y, &offsets));
}

fn refresh_from_fragment(tracker: RwSignal<SectionTracker>) -> bool {
	let Some(fragment) = dom::location_fragment() else {
		return false;
	};
	let mut known = false;
	tracker.maybe_update(|t| {
		known = t.sections().iter().any(|s| *s == fragment);
		t.activate_fragment(&fragment)
	});
	known
}

fn nav_links(
	sections: &[Section],
	tracker: RwSignal<SectionTracker>,
	drawer: Option<RwSignal<DrawerState>>,
) -> impl IntoView + use<> {
	sections
		.iter()
		.map(|section| {
			let href = format!("#{}", section.id);
			let href_active = href.clone();
			view! {
				<a
					class="nav-link"
					href=href
					class:active=move || tracker.with(|t| t.is_link_active(&href_active))
					on:click=move |_| {
						if let Some(drawer) = drawer {
							drawer.update(DrawerState::close);
						}
					}
				>
					{section.title.clone()}
				</a>
			}
		})
		.collect_view()
}

/// Header with section links, a mobile drawer toggle and the drawer itself.
///
/// Links to the section currently in view carry the `active` class, in both
/// the header and the drawer.
#[component]
pub fn SiteNav(
	/// Page sections in document order.
	sections: Vec<Section>,
	/// Brand text shown at the start of the header.
	#[prop(into)]
	brand: String,
) -> impl IntoView {
	let tracker = RwSignal::new(SectionTracker::new(sections.iter().map(|s| s.id.clone())));
	let drawer = RwSignal::new(DrawerState::default());

	Effect::new(move |_| {
		if !refresh_from_fragment(tracker) {
			refresh_from_scroll(tracker);
		}
	});

	let on_scroll = window_event_listener(ev::scroll, move |_| refresh_from_scroll(tracker));
	let on_load = window_event_listener(ev::load, move |_| {
		if !refresh_from_fragment(tracker) {
			refresh_from_scroll(tracker);
		}
	});
	let on_hash = window_event_listener(ev::hashchange, move |_| {
		refresh_from_fragment(tracker);
	});
	// Wheel, touch, pointer and keys are user scrolling; anchor jumps are not.
	let release = move || {
		if tracker.with_untracked(SectionTracker::is_pinned) {
			tracker.update_untracked(SectionTracker::release_pin);
		}
	};
	let on_wheel = window_event_listener(ev::wheel, move |_| release());
	let on_touch = window_event_listener(ev::touchstart, move |_| release());
	let on_mouse = window_event_listener(ev::mousedown, move |_| release());
	let on_key = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
		release();
		if ev.key() == "Escape" && drawer.get_untracked().is_open() {
			drawer.update(DrawerState::close);
		}
	});
	on_cleanup(move || {
		on_scroll.remove();
		on_load.remove();
		on_hash.remove();
		on_wheel.remove();
		on_touch.remove();
		on_mouse.remove();
		on_key.remove();
	});

	view! {
		<header class="site-header">
			<a class="brand" href="#top">{brand}</a>
			<nav class="site-nav" aria-label="Primary">
				{nav_links(&sections, tracker, None)}
			</nav>
			<button
				type="button"
				id="navToggle"
				class="nav-toggle"
				aria-controls="navDrawer"
				aria-label="Menu"
				aria-expanded=move || drawer.get().aria_expanded()
				on:click=move |_| drawer.update(DrawerState::toggle)
			>
				<span class="nav-toggle-bar" />
				<span class="nav-toggle-bar" />
				<span class="nav-toggle-bar" />
			</button>
			<nav
				id="navDrawer"
				class="nav-drawer"
				aria-label="Mobile"
				hidden=move || !drawer.get().is_open()
			>
				{nav_links(&sections, tracker, Some(drawer))}
			</nav>
		</header>
	}
}
