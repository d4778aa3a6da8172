//! Canvas rendering for the particle field.
//!
//! Drawing happens in viewport (CSS pixel) coordinates; the device pixel ratio
//! is applied once through the context transform when the canvas is sized.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;

/// Clears the surface and draws one frame: dots first, then proximity links.
pub fn render(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());
	draw_particles(field, ctx);
	draw_links(field, ctx);
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	let color = field.style.dot_color;

	for p in &field.particles {
		ctx.set_fill_style_str(&color.with_alpha(p.alpha).to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
}

fn draw_links(field: &ParticleField, ctx: &CanvasRenderingContext2d) {
	let style = &field.style;
	ctx.set_line_width(style.link_width);

	for link in field.links() {
		let (a, b) = (&field.particles[link.a], &field.particles[link.b]);
		ctx.set_stroke_style_str(
			&style
				.link_color
				.fade(style.link_alpha * link.strength)
				.to_css(),
		);
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

/// Effective device pixel ratio, capped to bound fill cost on dense displays.
pub fn capped_pixel_ratio(device_ratio: f64, max: f64) -> f64 {
	if device_ratio.is_finite() && device_ratio > 0.0 {
		device_ratio.min(max)
	} else {
		1.0
	}
}
