//! Client entrypoint for the CSR build.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use leptos::prelude::*;
use portfolio_fx::{App, apply_persisted_theme, init_logging};

fn main() {
	init_logging();
	// Before mounting, so the first paint already has the saved theme.
	if let Some(theme) = apply_persisted_theme() {
		log::info!("portfolio-fx: restored theme {}", theme);
	}

	mount_to_body(|| {
		view! { <App /> }
	})
}
