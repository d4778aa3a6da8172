//! portfolio-fx: interactive decoration for a single-page portfolio.
//!
//! This crate provides a WASM client that renders the portfolio page from a
//! JSON description and layers on a scroll progress bar, a mobile navigation
//! drawer with active-section highlighting, an animated particle background,
//! a project detail dialog and a persisted theme switch.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub mod components;
mod dom;
pub mod types;

pub use components::nav::SiteNav;
pub use components::particle_field::{ParticleCanvas, ParticleStyle};
pub use components::project_modal::ProjectGallery;
pub use components::scroll_progress::ScrollProgress;
pub use components::theme_switch::{ThemeSwitch, apply_persisted_theme};
pub use types::{PortfolioData, Project, Section};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Parse page content from the JSON text of the data block.
pub fn parse_portfolio_data(json_text: &str) -> Result<PortfolioData, serde_json::Error> {
	serde_json::from_str(json_text)
}

/// Load page content from a script element with id="portfolio-data".
/// Expected format: JSON with { owner, sections: [...], projects: [...] }
fn load_portfolio_data() -> Option<PortfolioData> {
	let element = dom::document()?.get_element_by_id("portfolio-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match parse_portfolio_data(&json_text) {
		Ok(data) => {
			info!(
				"portfolio-fx: loaded {} sections, {} projects",
				data.sections.len(),
				data.projects.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse page data: {}", e);
			None
		}
	}
}

fn current_year() -> u32 {
	js_sys::Date::new_0().get_full_year()
}

/// Main application component.
/// Loads page content from the DOM and renders every section with its decorations.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let data = load_portfolio_data().unwrap_or_else(|| {
		warn!("portfolio-fx: no usable page data, rendering default sections");
		PortfolioData::default()
	});
	let particle_style = if data.dense_particles {
		ParticleStyle::dense()
	} else {
		ParticleStyle::default()
	};
	if !data.projects.is_empty()
		&& !data.section_ids().any(|id| id == PortfolioData::PROJECTS_SECTION)
	{
		warn!("portfolio-fx: no \"projects\" section, project cards not shown");
	}

	let PortfolioData {
		owner,
		tagline,
		sections,
		mut projects,
		..
	} = data;

	let section_views = sections
		.iter()
		.map(|section| {
			let paragraphs = section
				.paragraphs
				.iter()
				.map(|p| view! { <p>{p.clone()}</p> })
				.collect_view();
			let gallery = (section.id == PortfolioData::PROJECTS_SECTION)
				.then(|| view! { <ProjectGallery projects=std::mem::take(&mut projects) /> });
			view! {
				<section id=section.id.clone() class="section">
					<h2 class="section-title">{section.title.clone()}</h2>
					{paragraphs}
					{gallery}
				</section>
			}
		})
		.collect_view();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=format!("{owner} | Portfolio") />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<ScrollProgress />
		<ParticleCanvas style=particle_style />
		<SiteNav sections=sections.clone() brand=owner.clone() />
		<ThemeSwitch />
		<main id="top" class="page">
			{tagline.map(|t| view! { <p class="tagline">{t}</p> })}
			{section_views}
		</main>
		<footer class="site-footer">
			<span>"© "</span>
			<span id="year">{current_year()}</span>
			<span>" " {owner}</span>
		</footer>
	}
}
