//! Leptos component wrapping the particle background canvas.
//!
//! The canvas is sized to the viewport at a capped device pixel ratio. An
//! animation loop runs via `requestAnimationFrame`, stepping and redrawing the
//! field each frame, while a separate interval checks whether the viewport has
//! changed enough to warrant a reseed. Both loops stop when the component is
//! torn down.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::ev;
use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::particles::ParticleField;
use super::render;
use super::style::ParticleStyle;
use crate::dom;

/// Resize the backing store to `viewport x dpr` and map drawing back to CSS pixels.
fn size_canvas(
	window: &Window,
	canvas: &HtmlCanvasElement,
	ctx: &CanvasRenderingContext2d,
	max_ratio: f64,
) -> Option<(f64, f64)> {
	let (w, h) = dom::viewport_size(window)?;
	let dpr = render::capped_pixel_ratio(window.device_pixel_ratio(), max_ratio);

	canvas.set_width((w * dpr).floor() as u32);
	canvas.set_height((h * dpr).floor() as u32);
	let style = web_sys::HtmlElement::style(canvas);
	let _ = style.set_property("width", &format!("{w}px"));
	let _ = style.set_property("height", &format!("{h}px"));
	let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
	Some((w, h))
}

/// Renders the ambient particle field behind the page content.
///
/// If the canvas has no 2D context the animation never starts and the canvas
/// stays blank.
#[component]
pub fn ParticleCanvas(#[prop(optional)] style: ParticleStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let field: Rc<RefCell<Option<ParticleField>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let surface: Rc<RefCell<Option<(HtmlCanvasElement, CanvasRenderingContext2d)>>> =
		Rc::new(RefCell::new(None));
	let reseed_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let stopped = Arc::new(AtomicBool::new(false));
	let frame_id = Arc::new(AtomicI32::new(0));
	let interval_id = Arc::new(AtomicI32::new(0));

	let (stopped_init, frame_init, interval_init) =
		(stopped.clone(), frame_id.clone(), interval_id.clone());
	let max_ratio = style.max_pixel_ratio;

	let (field_resize, surface_resize) = (field.clone(), surface.clone());
	let on_resize = window_event_listener(ev::resize, move |_| {
		let Some(window) = dom::window() else {
			return;
		};
		let Some((ref canvas, ref ctx)) = *surface_resize.borrow() else {
			return;
		};
		if let Some((nw, nh)) = size_canvas(&window, canvas, ctx, max_ratio) {
			if let Some(ref mut f) = *field_resize.borrow_mut() {
				f.resize(nw, nh);
			}
		}
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = dom::window() else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("particles: no 2d context, background disabled");
			return;
		};
		let Some((w, h)) = size_canvas(&window, &canvas, &ctx, max_ratio) else {
			return;
		};

		let seeded = ParticleField::new(style.clone(), w, h, &mut js_sys::Math::random);
		info!("particles: {} particles for {}x{}", seeded.particles.len(), w, h);
		*field.borrow_mut() = Some(seeded);

		*surface.borrow_mut() = Some((canvas.clone(), ctx.clone()));

		let field_reseed = field.clone();
		*reseed_cb.borrow_mut() = Some(Closure::new(move || {
			let Some((nw, nh)) = dom::window().as_ref().and_then(dom::viewport_size) else {
				return;
			};
			if let Some(ref mut f) = *field_reseed.borrow_mut() {
				if f.maybe_reseed(nw, nh, &mut js_sys::Math::random) {
					debug!("particles: reseeded for {}x{}", nw, nh);
				}
			}
		}));
		if let Some(ref cb) = *reseed_cb.borrow() {
			match window.set_interval_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				style.reseed_interval_ms as i32,
			) {
				Ok(id) => interval_init.store(id, Ordering::Relaxed),
				Err(e) => warn!("particles: reseed timer unavailable: {:?}", e),
			}
		}

		let (field_anim, animate_inner, stopped_anim, frame_anim) = (
			field.clone(),
			animate.clone(),
			stopped_init.clone(),
			frame_init.clone(),
		);
		*animate.borrow_mut() = Some(Closure::new(move || {
			if stopped_anim.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut f) = *field_anim.borrow_mut() {
				f.step();
				render::render(f, &ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(Ok(id)) =
					dom::window().map(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()))
				{
					frame_anim.store(id, Ordering::Relaxed);
				}
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.store(id, Ordering::Relaxed);
			}
		}
	});

	on_cleanup(move || {
		stopped.store(true, Ordering::Relaxed);
		on_resize.remove();
		if let Some(window) = dom::window() {
			let _ = window.cancel_animation_frame(frame_id.load(Ordering::Relaxed));
			window.clear_interval_with_handle(interval_id.load(Ordering::Relaxed));
		}
		debug!("particles: animation stopped");
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="particles"
			class="particles-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; pointer-events: none; z-index: -1;"
		/>
	}
}
