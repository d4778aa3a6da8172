//! Named page themes and their persisted selection.
//!
//! The selected theme is stored as its name under a single `localStorage`
//! key and exposed to stylesheets through `data-theme` on `<html>`. No stored
//! name means the default theme.

use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

/// `localStorage` key holding the theme name.
pub const STORAGE_KEY: &str = "portfolio-theme";

/// Attribute on the root element that stylesheets key off.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// A named, non-default theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
	Dark,
	Light,
	Ocean,
}

impl Theme {
	pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Ocean];

	pub fn as_str(self) -> &'static str {
		match self {
			Theme::Dark => "dark",
			Theme::Light => "light",
			Theme::Ocean => "ocean",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Theme::Dark => "Dark",
			Theme::Light => "Light",
			Theme::Ocean => "Ocean",
		}
	}
}

impl fmt::Display for Theme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when a stored or requested name is not a known theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl fmt::Display for UnknownTheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown theme {:?}", self.0)
	}
}

impl FromStr for Theme {
	type Err = UnknownTheme;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Theme::ALL
			.into_iter()
			.find(|t| t.as_str() == s.trim())
			.ok_or_else(|| UnknownTheme(s.to_string()))
	}
}

/// Where the theme name is kept between visits.
pub trait ThemeStore {
	fn load(&self) -> Option<String>;
	fn save(&mut self, name: &str);
	fn clear(&mut self);
}

/// Browser `localStorage`. Every operation is a no-op when storage is
/// unavailable (private mode, disabled cookies).
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalThemeStore;

impl LocalThemeStore {
	fn storage() -> Option<web_sys::Storage> {
		web_sys::window()?.local_storage().ok().flatten()
	}
}

impl ThemeStore for LocalThemeStore {
	fn load(&self) -> Option<String> {
		Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
	}

	fn save(&mut self, name: &str) {
		let Some(storage) = Self::storage() else {
			warn!("theme: localStorage unavailable, {:?} not persisted", name);
			return;
		};
		if storage.set_item(STORAGE_KEY, name).is_err() {
			warn!("theme: failed to persist {:?}", name);
		}
	}

	fn clear(&mut self) {
		if let Some(storage) = Self::storage() {
			let _ = storage.remove_item(STORAGE_KEY);
		}
	}
}

/// In-memory store, for tests and environments without storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryThemeStore {
	pub value: Option<String>,
}

impl ThemeStore for MemoryThemeStore {
	fn load(&self) -> Option<String> {
		self.value.clone()
	}

	fn save(&mut self, name: &str) {
		self.value = Some(name.to_string());
	}

	fn clear(&mut self) {
		self.value = None;
	}
}

/// Selected theme plus the store it is persisted to.
#[derive(Clone, Debug)]
pub struct ThemePreference<S> {
	store: S,
	current: Option<Theme>,
}

impl<S: ThemeStore> ThemePreference<S> {
	/// Load the persisted selection. Unknown names fall back to the default theme.
	pub fn load(store: S) -> Self {
		let current = store.load().and_then(|name| match name.parse::<Theme>() {
			Ok(theme) => Some(theme),
			Err(e) => {
				warn!("theme: ignoring stored value: {}", e);
				None
			}
		});
		Self { store, current }
	}

	/// `None` is the default theme.
	pub fn current(&self) -> Option<Theme> {
		self.current
	}

	pub fn select(&mut self, theme: Theme) {
		debug!("theme: select {}", theme);
		self.store.save(theme.as_str());
		self.current = Some(theme);
	}

	pub fn reset(&mut self) {
		debug!("theme: reset to default");
		self.store.clear();
		self.current = None;
	}

	pub fn store(&self) -> &S {
		&self.store
	}
}

/// Set or remove `data-theme` on `<html>`.
pub fn apply_theme(theme: Option<Theme>) {
	let Some(root) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.document_element())
	else {
		return;
	};
	let _ = match theme {
		Some(t) => root.set_attribute(THEME_ATTRIBUTE, t.as_str()),
		None => root.remove_attribute(THEME_ATTRIBUTE),
	};
}

/// Apply whatever theme was persisted on a previous visit.
///
/// Called before the app mounts so the first paint already uses it.
pub fn apply_persisted_theme() -> Option<Theme> {
	let theme = ThemePreference::load(LocalThemeStore).current();
	if theme.is_some() {
		apply_theme(theme);
	}
	theme
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_parse_back() {
		for theme in Theme::ALL {
			assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
		}
	}

	#[test]
	fn unknown_name_is_rejected() {
		assert_eq!("sepia".parse::<Theme>(), Err(UnknownTheme("sepia".into())));
	}

	#[test]
	fn selecting_persists_the_name() {
		let mut pref = ThemePreference::load(MemoryThemeStore::default());
		pref.select(Theme::Dark);
		assert_eq!(pref.current(), Some(Theme::Dark));
		assert_eq!(pref.store().value.as_deref(), Some("dark"));
	}

	#[test]
	fn reset_clears_selection_and_store() {
		let mut pref = ThemePreference::load(MemoryThemeStore::default());
		pref.select(Theme::Ocean);
		pref.reset();
		assert_eq!(pref.current(), None);
		assert_eq!(pref.store().value, None);
	}

	#[test]
	fn reload_restores_previous_selection() {
		let mut pref = ThemePreference::load(MemoryThemeStore::default());
		pref.select(Theme::Dark);
		let reloaded = ThemePreference::load(pref.store().clone());
		assert_eq!(reloaded.current(), Some(Theme::Dark));
	}

	#[test]
	fn garbage_in_storage_means_default() {
		let store = MemoryThemeStore {
			value: Some("neon".into()),
		};
		assert_eq!(ThemePreference::load(store).current(), None);
	}

	#[test]
	fn empty_store_means_default() {
		assert_eq!(ThemePreference::load(MemoryThemeStore::default()).current(), None);
	}
}
