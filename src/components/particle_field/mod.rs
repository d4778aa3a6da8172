//! Animated particle background.
//!
//! Renders a field of slowly drifting dots on a full-viewport canvas, joining
//! nearby pairs with lines that fade out with distance:
//! - Particle count scales with viewport width, within fixed bounds
//! - Particles wrap toroidally a short margin beyond each edge
//! - The whole set is regenerated after large viewport changes
//!
//! # Example
//!
//! ```ignore
//! use portfolio_fx::components::particle_field::{ParticleCanvas, ParticleStyle};
//!
//! view! { <ParticleCanvas style=ParticleStyle::dense() /> }
//! ```

mod component;
pub mod particles;
mod render;
pub mod style;

pub use component::ParticleCanvas;
pub use particles::{Link, Particle, ParticleField};
pub use style::{Color, ParticleStyle};
