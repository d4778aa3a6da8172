//! Visual and motion parameters for the particle background.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Scale the alpha channel, clamped to `[0, 1]`.
	pub fn fade(self, factor: f64) -> Self {
		Self {
			a: (self.a * factor).clamp(0.0, 1.0),
			..self
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Configuration for the ambient particle field.
///
/// Counts scale with viewport width (`width / count_divisor`) and are clamped
/// to `count_min..=count_max`, so the pairwise link pass stays cheap.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	pub count_divisor: f64,
	pub count_min: usize,
	pub count_max: usize,
	pub radius_min: f64,
	pub radius_max: f64,
	/// Horizontal speed bound in px/frame; velocities are drawn from `±speed_x`.
	pub speed_x: f64,
	/// Vertical speed bound in px/frame.
	pub speed_y: f64,
	/// Particles further than this outside the viewport wrap to the opposite edge.
	pub wrap_margin: f64,
	/// Pairs closer than this are joined by a line.
	pub link_distance: f64,
	pub link_width: f64,
	/// Line alpha at distance zero; fades linearly to nothing at `link_distance`.
	pub link_alpha: f64,
	pub dot_color: Color,
	pub link_color: Color,
	/// Viewport change (either axis, px) that triggers a full reseed.
	pub reseed_threshold: f64,
	pub reseed_interval_ms: u64,
	pub max_pixel_ratio: f64,
}

impl ParticleStyle {
	/// Denser, brighter field for large displays.
	pub fn dense() -> Self {
		Self {
			count_divisor: 12.0,
			count_max: 130,
			radius_min: 0.8,
			speed_x: 0.18,
			speed_y: 0.18,
			link_alpha: 0.18,
			..Self::default()
		}
	}
}

impl Default for ParticleStyle {
	fn default() -> Self {
		Self {
			count_divisor: 18.0,
			count_min: 45,
			count_max: 90,
			radius_min: 1.2,
			radius_max: 3.2,
			speed_x: 0.35,
			speed_y: 0.25,
			wrap_margin: 20.0,
			link_distance: 140.0,
			link_width: 1.0,
			link_alpha: 0.12,
			dot_color: Color::rgba(255, 255, 255, 0.40),
			link_color: Color::rgb(255, 255, 255),
			reseed_threshold: 180.0,
			reseed_interval_ms: 800,
			max_pixel_ratio: 2.0,
		}
	}
}
