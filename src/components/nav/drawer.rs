//! Open/closed state of the mobile navigation drawer.

/// Drawer visibility. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawerState {
	#[default]
	Closed,
	Open,
}

impl DrawerState {
	pub fn is_open(self) -> bool {
		self == DrawerState::Open
	}

	pub fn toggle(&mut self) {
		*self = match self {
			DrawerState::Closed => DrawerState::Open,
			DrawerState::Open => DrawerState::Closed,
		};
	}

	pub fn close(&mut self) {
		*self = DrawerState::Closed;
	}

	/// Value for the toggle button's `aria-expanded` attribute.
	pub fn aria_expanded(self) -> &'static str {
		if self.is_open() { "true" } else { "false" }
	}
}
