//! Property-based invariant tests for the page behaviours.
//!
//! Verifies:
//! 1. Scroll progress is always within [0, 100], 0 at the top, 100 at the bottom
//! 2. Scroll progress is non-decreasing in scroll position
//! 3. Stepping never leaves a particle beyond the wrap margin
//! 4. Link strength decreases with distance and vanishes at the threshold
//! 5. Drawer: any toggle sequence followed by a link click ends closed
//! 6. Section tracker: exactly the links to the active section are active
//! 7. Modal: closing always ends with nothing open, and repeated closes are no-ops

use portfolio_fx::components::nav::{DrawerState, SCROLL_LOOKAHEAD, SectionTracker};
use portfolio_fx::components::particle_field::particles::link_strength;
use portfolio_fx::components::particle_field::{Particle, ParticleField, ParticleStyle};
use portfolio_fx::components::project_modal::ModalState;
use portfolio_fx::components::scroll_progress::scroll_progress;
use proptest::prelude::*;

const IDS: [&str; 5] = ["home", "experience", "projects", "skills", "contact"];

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_particle(width: f64, height: f64) -> impl Strategy<Value = Particle> {
	(
		-100.0..width + 100.0,
		-100.0..height + 100.0,
		-0.35f64..0.35,
		-0.25f64..0.25,
	)
		.prop_map(|(x, y, vx, vy)| Particle {
			x,
			y,
			vx,
			vy,
			radius: 2.0,
			alpha: 0.4,
		})
}

fn arb_offsets() -> impl Strategy<Value = Vec<f64>> {
	prop::collection::vec(1.0f64..2000.0, IDS.len()).prop_map(|gaps| {
		let mut top = 0.0;
		gaps.into_iter()
			.map(|gap| {
				let current = top;
				top += gap;
				current
			})
			.collect()
	})
}

// ── Scroll progress ───────────────────────────────────────────────────

proptest! {
	#[test]
	fn progress_is_bounded(scroll in -500.0f64..50_000.0, doc in 0.0f64..40_000.0, view in 0.0f64..4_000.0) {
		let p = scroll_progress(scroll, doc, view);
		prop_assert!((0.0..=100.0).contains(&p));
	}

	#[test]
	fn progress_endpoints(view in 100.0f64..2_000.0, extra in 1.0f64..20_000.0) {
		let doc = view + extra;
		prop_assert_eq!(scroll_progress(0.0, doc, view), 0.0);
		prop_assert!((scroll_progress(extra, doc, view) - 100.0).abs() < 1e-9);
	}

	#[test]
	fn progress_is_monotonic(view in 100.0f64..2_000.0, extra in 1.0f64..20_000.0, a in 0.0f64..1.0, b in 0.0f64..1.0) {
		let doc = view + extra;
		let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
		prop_assert!(scroll_progress(lo * extra, doc, view) <= scroll_progress(hi * extra, doc, view));
	}
}

// ── Particle field ────────────────────────────────────────────────────

proptest! {
	#[test]
	fn particles_stay_within_margin(
		particles in prop::collection::vec(arb_particle(800.0, 600.0), 1..60),
		steps in 1usize..50,
	) {
		let style = ParticleStyle::default();
		let margin = style.wrap_margin;
		let mut field = ParticleField::new(style, 800.0, 600.0, &mut || 0.5);
		field.particles = particles;
		for _ in 0..steps {
			field.step();
			for p in &field.particles {
				prop_assert!(p.x >= -margin && p.x <= 800.0 + margin);
				prop_assert!(p.y >= -margin && p.y <= 600.0 + margin);
			}
		}
	}

	#[test]
	fn link_strength_decreases_with_distance(d1 in 0.0f64..200.0, d2 in 0.0f64..200.0) {
		let (near, far) = if d1 <= d2 { (d1, d2) } else { (d2, d1) };
		let s_near = link_strength(near, 0.0, 140.0).unwrap_or(0.0);
		let s_far = link_strength(far, 0.0, 140.0).unwrap_or(0.0);
		prop_assert!(s_near >= s_far);
		if far >= 140.0 {
			prop_assert_eq!(link_strength(far, 0.0, 140.0), None);
		}
	}

	#[test]
	fn links_are_unordered_pairs(particles in prop::collection::vec(arb_particle(400.0, 400.0), 0..40)) {
		let mut field = ParticleField::new(ParticleStyle::default(), 400.0, 400.0, &mut || 0.5);
		field.particles = particles;
		for link in field.links() {
			prop_assert!(link.a < link.b);
			prop_assert!((0.0..=1.0).contains(&link.strength));
		}
	}
}

// ── Drawer, sections, modal ───────────────────────────────────────────

proptest! {
	#[test]
	fn link_click_always_closes_drawer(toggles in 0usize..10, clicks in 1usize..5) {
		let mut drawer = DrawerState::default();
		for _ in 0..toggles {
			drawer.toggle();
		}
		for _ in 0..clicks {
			drawer.close();
		}
		prop_assert_eq!(drawer, DrawerState::Closed);
		prop_assert_eq!(drawer.aria_expanded(), "false");
	}

	#[test]
	fn exactly_matching_links_are_active(offsets in arb_offsets(), scroll in 0.0f64..10_000.0) {
		let mut tracker = SectionTracker::new(IDS);
		let measured: Vec<Option<f64>> = offsets.iter().copied().map(Some).collect();
		tracker.update_from_scroll(scroll, &measured);

		let active = tracker.active().map(String::from);
		let expected = offsets
			.iter()
			.rposition(|&top| top <= scroll + SCROLL_LOOKAHEAD)
			.unwrap_or(0);
		prop_assert_eq!(active.as_deref(), Some(IDS[expected]));

		let active_links: Vec<&str> = IDS
			.iter()
			.copied()
			.filter(|id| tracker.is_link_active(&format!("#{id}")))
			.collect();
		prop_assert_eq!(active_links, vec![IDS[expected]]);
	}

	#[test]
	fn modal_close_is_terminal(opens in prop::collection::vec(0usize..6, 0..6), closes in 1usize..4) {
		let mut modal = ModalState::default();
		for (n, card) in opens.iter().enumerate() {
			modal.open(*card, Some(n));
		}
		let first = modal.close();
		prop_assert_eq!(first, if opens.is_empty() { None } else { Some(0) });
		for _ in 1..closes {
			prop_assert_eq!(modal.close(), None);
		}
		prop_assert!(!modal.is_open());
	}
}
