//! Light/dark theme switch with a persisted selection.

mod component;
pub mod preference;

pub use component::ThemeSwitch;
pub use preference::{
	LocalThemeStore, MemoryThemeStore, Theme, ThemePreference, ThemeStore, apply_persisted_theme,
	apply_theme,
};
