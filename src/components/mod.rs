//! Page features. Each one owns its own state and is inert when the surface
//! it needs is missing.

pub mod nav;
pub mod particle_field;
pub mod project_modal;
pub mod scroll_progress;
pub mod theme_switch;
