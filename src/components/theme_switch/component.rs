//! Theme selector button with its options panel.

use leptos::prelude::*;

use super::preference::{LocalThemeStore, Theme, ThemePreference, apply_theme};

/// Button that opens a small panel of named themes plus a reset option.
///
/// Choosing a theme applies and persists it; reset reverts to the default
/// theme and forgets the stored choice. The panel closes after either.
#[component]
pub fn ThemeSwitch() -> impl IntoView {
	let preference = RwSignal::new(ThemePreference::load(LocalThemeStore));
	let panel_open = RwSignal::new(false);

	let select = move |theme: Theme| {
		preference.update(|p| p.select(theme));
		apply_theme(Some(theme));
		panel_open.set(false);
	};
	let reset = move || {
		preference.update(|p| p.reset());
		apply_theme(None);
		panel_open.set(false);
	};

	let options = Theme::ALL
		.into_iter()
		.map(|theme| {
			view! {
				<button
					type="button"
					class="theme-option"
					data-theme-name=theme.as_str()
					class:selected=move || preference.with(|p| p.current() == Some(theme))
					on:click=move |_| select(theme)
				>
					{theme.label()}
				</button>
			}
		})
		.collect_view();

	view! {
		<div class="theme-switch">
			<button
				type="button"
				id="themeToggle"
				class="theme-toggle"
				aria-haspopup="true"
				aria-controls="themeOptions"
				aria-expanded=move || if panel_open.get() { "true" } else { "false" }
				on:click=move |_| panel_open.update(|open| *open = !*open)
			>
				"Theme"
			</button>
			<div id="themeOptions" class="theme-options" hidden=move || !panel_open.get()>
				{options}
				<button type="button" class="theme-reset" on:click=move |_| reset()>
					"Default"
				</button>
			</div>
		</div>
	}
}
