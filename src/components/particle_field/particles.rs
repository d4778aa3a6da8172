//! Particle motion, wrapping, proximity links and reseeding.

use super::style::ParticleStyle;

/// A single floating particle, in viewport (CSS pixel) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub alpha: f64,
}

/// A line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	pub a: usize,
	pub b: usize,
	/// `1 - distance / link_distance`: 1.0 when touching, 0.0 at the threshold.
	pub strength: f64,
}

/// Number of particles for a viewport of the given width.
pub fn particle_count(viewport_width: f64, style: &ParticleStyle) -> usize {
	let raw = (viewport_width / style.count_divisor)
		.clamp(style.count_min as f64, style.count_max as f64)
		.round();
	if raw.is_finite() { raw as usize } else { style.count_min }
}

/// Strength of the link between two points, or `None` when they are too far apart.
///
/// The threshold test runs on squared distances; the square root is only
/// taken for pairs that are actually drawn.
pub fn link_strength(dx: f64, dy: f64, link_distance: f64) -> Option<f64> {
	let d2 = dx * dx + dy * dy;
	if d2 >= link_distance * link_distance {
		return None;
	}
	Some(1.0 - d2.sqrt() / link_distance)
}

fn lerp(min: f64, max: f64, t: f64) -> f64 {
	min + (max - min) * t
}

/// Owns the particle set and the viewport it lives in.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub style: ParticleStyle,
	width: f64,
	height: f64,
	seeded_at: (f64, f64),
}

impl ParticleField {
	/// Create and seed a field for a `width` x `height` viewport.
	///
	/// `rng` must yield uniform values in `[0, 1)`.
	pub fn new(style: ParticleStyle, width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> Self {
		let mut field = Self {
			particles: Vec::new(),
			style,
			width,
			height,
			seeded_at: (width, height),
		};
		field.seed(rng);
		field
	}

	pub fn width(&self) -> f64 {
		self.width
	}

	pub fn height(&self) -> f64 {
		self.height
	}

	/// Discard every particle and generate a fresh set for the current viewport.
	pub fn seed(&mut self, rng: &mut impl FnMut() -> f64) {
		let count = particle_count(self.width, &self.style);
		let style = &self.style;
		let (width, height) = (self.width, self.height);

		self.particles = (0..count)
			.map(|_| Particle {
				x: lerp(0.0, width, rng()),
				y: lerp(0.0, height, rng()),
				radius: lerp(style.radius_min, style.radius_max, rng()),
				vx: lerp(-style.speed_x, style.speed_x, rng()),
				vy: lerp(-style.speed_y, style.speed_y, rng()),
				alpha: style.dot_color.a,
			})
			.collect();
		self.seeded_at = (width, height);
		log::debug!("particle field: seeded {} particles for {}x{}", count, width, height);
	}

	/// Track a new viewport size without touching the particles.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Reseed if the viewport moved more than the threshold on either axis
	/// since the last seed. Returns whether a reseed happened.
	pub fn maybe_reseed(&mut self, width: f64, height: f64, rng: &mut impl FnMut() -> f64) -> bool {
		let (last_w, last_h) = self.seeded_at;
		let threshold = self.style.reseed_threshold;
		if (width - last_w).abs() <= threshold && (height - last_h).abs() <= threshold {
			return false;
		}
		self.resize(width, height);
		self.seed(rng);
		true
	}

	/// Advance every particle by its velocity and wrap it toroidally.
	pub fn step(&mut self) {
		let margin = self.style.wrap_margin;
		let (w, h) = (self.width, self.height);

		for p in &mut self.particles {
			p.x += p.vx;
			p.y += p.vy;

			if p.x < -margin {
				p.x = w + margin;
			} else if p.x > w + margin {
				p.x = -margin;
			}
			if p.y < -margin {
				p.y = h + margin;
			} else if p.y > h + margin {
				p.y = -margin;
			}
		}
	}

	/// Every unordered pair of particles close enough to be joined.
	pub fn links(&self) -> Vec<Link> {
		let max = self.style.link_distance;
		let mut links = Vec::new();

		for (i, a) in self.particles.iter().enumerate() {
			for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
				if let Some(strength) = link_strength(a.x - b.x, a.y - b.y, max) {
					links.push(Link { a: i, b: j, strength });
				}
			}
		}
		links
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn constant(v: f64) -> impl FnMut() -> f64 {
		move || v
	}

	fn field_with(particles: Vec<Particle>, width: f64, height: f64) -> ParticleField {
		let mut field = ParticleField::new(ParticleStyle::default(), width, height, &mut constant(0.5));
		field.particles = particles;
		field
	}

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			radius: 2.0,
			alpha: 0.4,
		}
	}

	#[test]
	fn count_is_clamped_to_bounds() {
		let style = ParticleStyle::default();
		assert_eq!(particle_count(320.0, &style), 45);
		assert_eq!(particle_count(1080.0, &style), 60);
		assert_eq!(particle_count(4000.0, &style), 90);
	}

	#[test]
	fn count_survives_degenerate_width() {
		let style = ParticleStyle::default();
		assert_eq!(particle_count(f64::NAN, &style), 45);
		assert_eq!(particle_count(0.0, &style), 45);
	}

	#[test]
	fn seeding_respects_ranges() {
		let mut values = [0.0, 0.999].into_iter().cycle();
		let field = ParticleField::new(ParticleStyle::default(), 900.0, 700.0, &mut || {
			values.next().unwrap_or(0.0)
		});
		assert_eq!(field.particles.len(), 50);
		for p in &field.particles {
			assert!((0.0..=900.0).contains(&p.x));
			assert!((0.0..=700.0).contains(&p.y));
			assert!((1.2..=3.2).contains(&p.radius));
			assert!(p.vx.abs() <= 0.35);
			assert!(p.vy.abs() <= 0.25);
		}
	}

	#[test]
	fn particle_past_right_edge_wraps_to_left_margin() {
		let mut field = field_with(vec![particle(1021.0, 300.0, 0.3, 0.0)], 1000.0, 600.0);
		field.step();
		assert_eq!(field.particles[0].x, -20.0);
	}

	#[test]
	fn particle_past_top_edge_wraps_to_bottom_margin() {
		let mut field = field_with(vec![particle(50.0, -20.5, 0.0, -0.1)], 1000.0, 600.0);
		field.step();
		assert_eq!(field.particles[0].y, 620.0);
	}

	#[test]
	fn particle_inside_margin_keeps_drifting() {
		let mut field = field_with(vec![particle(1010.0, 300.0, 0.25, 0.0)], 1000.0, 600.0);
		field.step();
		assert_eq!(field.particles[0].x, 1010.25);
	}

	#[test]
	fn touching_particles_link_at_full_strength() {
		assert_eq!(link_strength(0.0, 0.0, 140.0), Some(1.0));
	}

	#[test]
	fn particles_at_threshold_are_not_linked() {
		assert_eq!(link_strength(140.0, 0.0, 140.0), None);
		assert_eq!(link_strength(100.0, 100.0, 140.0), None);
	}

	#[test]
	fn link_strength_falls_off_linearly() {
		let half = link_strength(70.0, 0.0, 140.0).unwrap();
		assert!((half - 0.5).abs() < 1e-12);
	}

	#[test]
	fn links_cover_each_close_pair_once() {
		let field = field_with(
			vec![
				particle(0.0, 0.0, 0.0, 0.0),
				particle(30.0, 40.0, 0.0, 0.0),
				particle(500.0, 500.0, 0.0, 0.0),
			],
			1000.0,
			1000.0,
		);
		let links = field.links();
		assert_eq!(links.len(), 1);
		assert_eq!((links[0].a, links[0].b), (0, 1));
		assert!((links[0].strength - (1.0 - 50.0 / 140.0)).abs() < 1e-12);
	}

	#[test]
	fn small_viewport_changes_do_not_reseed() {
		let mut field = ParticleField::new(ParticleStyle::default(), 1000.0, 800.0, &mut constant(0.5));
		field.particles[0].x = -5.0;
		assert!(!field.maybe_reseed(1180.0, 620.0, &mut constant(0.5)));
		assert_eq!(field.particles[0].x, -5.0);
	}

	#[test]
	fn large_viewport_changes_reseed() {
		let mut field = ParticleField::new(ParticleStyle::default(), 1000.0, 800.0, &mut constant(0.5));
		assert!(field.maybe_reseed(1000.0, 1400.0, &mut constant(0.5)));
		assert_eq!(field.height(), 1400.0);
		assert!(field.particles.iter().all(|p| p.y == 700.0));
	}

	#[test]
	fn reseed_threshold_is_measured_from_last_seed() {
		let mut field = ParticleField::new(ParticleStyle::default(), 1000.0, 800.0, &mut constant(0.5));
		field.resize(1100.0, 800.0);
		assert!(!field.maybe_reseed(1150.0, 800.0, &mut constant(0.5)));
		assert!(field.maybe_reseed(1181.0, 800.0, &mut constant(0.5)));
	}
}
