//! Project cards and the detail dialog they expand into.
//!
//! The dialog is rendered from the same `Project` the card was built from,
//! so "cloning" a card is just rendering it again with its details shown.

use leptos::ev;
use leptos::prelude::*;
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};

use super::state::{ClickOutcome, ModalClick, ModalState};
use crate::dom;
use crate::types::Project;

const DIALOG_TITLE_ID: &str = "project-modal-title";

/// Card content shared by the summary card and the dialog.
fn card_body(project: &Project, detailed: bool) -> impl IntoView + use<> {
	let title_id = detailed.then_some(DIALOG_TITLE_ID);
	let details = detailed.then(|| {
		project
			.details
			.iter()
			.map(|p| view! { <p class="project-detail">{p.clone()}</p> })
			.collect_view()
	});
	let tags = project
		.tags
		.iter()
		.map(|t| view! { <li class="project-tag">{t.clone()}</li> })
		.collect_view();
	let links = project
		.links
		.iter()
		.map(|l| {
			view! {
				<a class="project-link" href=l.href.clone() target="_blank" rel="noopener">
					{l.label.clone()}
				</a>
			}
		})
		.collect_view();

	view! {
		<h3 class="project-title" id=title_id>{project.title.clone()}</h3>
		<p class="project-summary">{project.summary.clone()}</p>
		{details}
		<ul class="project-tags">{tags}</ul>
		<div class="project-links">{links}</div>
	}
}

/// Grid of project cards plus the overlay that shows one of them in full.
///
/// Clicking a card (anywhere but on one of its links) or pressing Enter/Space
/// on it opens the dialog. The backdrop, the close button and Escape close
/// it, returning focus to wherever it was before.
#[component]
pub fn ProjectGallery(projects: Vec<Project>) -> impl IntoView {
	let projects = StoredValue::new(projects);
	let modal = RwSignal::new_local(ModalState::<HtmlElement>::default());
	let host_ref = NodeRef::<leptos::html::Div>::new();
	let dialog_ref = NodeRef::<leptos::html::Article>::new();

	let open = move |idx: usize| {
		let focused = dom::focused_element();
		modal.update(|m| m.open(idx, focused));
		log::debug!("modal: open card {}", idx);
	};
	let close = move || {
		let mut restore = None;
		modal.maybe_update(|m| {
			let was_open = m.is_open();
			restore = m.close();
			was_open
		});
		if let Some(el) = restore {
			dom::focus_without_scroll(&el);
		}
	};
	let is_open = move || modal.with(|m| m.is_open());

	Effect::new(move |_| dom::toggle_body_class("modal-open", is_open()));
	Effect::new(move |_| {
		if !is_open() {
			return;
		}
		if let Some(dialog) = dialog_ref.get() {
			dom::focus_without_scroll(&dialog);
		}
	});

	let on_key = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
		if ev.key() == "Escape" {
			close();
		}
	});
	on_cleanup(move || on_key.remove());

	let cards = projects.with_value(|list| {
		list.iter()
			.enumerate()
			.map(|(idx, project)| {
				view! {
					<article
						class="project-card"
						tabindex="0"
						aria-haspopup="dialog"
						aria-expanded=move || {
							if modal.with(|m| m.open_card() == Some(idx)) { "true" } else { "false" }
						}
						on:click=move |ev: MouseEvent| {
							let click = ModalClick::Card { on_link: dom::is_within_link(ev.target()) };
							if click.outcome() == ClickOutcome::Open {
								open(idx);
							}
						}
						on:keydown=move |ev: KeyboardEvent| {
							let key = ev.key();
							if (key == "Enter" || key == " ") && !dom::is_within_link(ev.target()) {
								ev.prevent_default();
								open(idx);
							}
						}
					>
						{card_body(project, false)}
					</article>
				}
			})
			.collect_view()
	});

	let dialog = move || {
		let idx = modal.with(|m| m.open_card())?;
		let body = projects.with_value(|list| list.get(idx).map(|p| card_body(p, true)))?;
		Some(view! {
			<article
				node_ref=dialog_ref
				class="project-card project-modal-card"
				role="dialog"
				aria-modal="true"
				aria-labelledby=DIALOG_TITLE_ID
				tabindex="-1"
				on:click=|ev: MouseEvent| {
					let click = ModalClick::Dialog { on_link: dom::is_within_link(ev.target()) };
					if click.outcome() == ClickOutcome::Contain {
						ev.stop_propagation();
					}
				}
			>
				<button
					type="button"
					class="project-modal-close"
					aria-label="Close"
					on:click=move |ev: MouseEvent| {
						ev.stop_propagation();
						close();
					}
				>
					"×"
				</button>
				{body}
			</article>
		})
	};

	view! {
		<div class="project-grid">{cards}</div>
		<div
			id="projectOverlay"
			class="project-overlay"
			class:active=is_open
			aria-hidden=move || if is_open() { "false" } else { "true" }
			on:click=move |_| close()
		/>
		<div
			node_ref=host_ref
			id="projectModalHost"
			class="project-modal-host"
			hidden=move || !is_open()
			on:click=move |ev: MouseEvent| {
				let Some(host) = host_ref.get_untracked() else {
					return;
				};
				let click = ModalClick::Host { on_backdrop: dom::is_same_target(ev.target(), &host) };
				if click.outcome() == ClickOutcome::Close {
					close();
				}
			}
		>
			{dialog}
		</div>
	}
}
