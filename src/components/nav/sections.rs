//! Which page section is "current", for nav link highlighting.
//!
//! The active section is the last one, in document order, whose top edge sits
//! at or above `scrollY + SCROLL_LOOKAHEAD`. Direct fragment navigation
//! overrides that and marks the named section active immediately; the choice
//! is pinned until the user scrolls, so the browser's own jump to the anchor
//! cannot replace it (a short last section may never reach the lookahead line).

/// How far below the top of the viewport a section counts as reached.
pub const SCROLL_LOOKAHEAD: f64 = 120.0;

/// Ordered set of section ids with exactly one active (when non-empty).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionTracker {
	sections: Vec<String>,
	active: usize,
	pinned: bool,
}

impl SectionTracker {
	/// Track `sections`, given in document order. The first one starts active.
	pub fn new(sections: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self {
			sections: sections.into_iter().map(Into::into).collect(),
			active: 0,
			pinned: false,
		}
	}

	pub fn sections(&self) -> &[String] {
		&self.sections
	}

	pub fn active(&self) -> Option<&str> {
		self.sections.get(self.active).map(String::as_str)
	}

	/// Recompute the active section from the scroll position.
	///
	/// `offsets[i]` is the top offset of `sections()[i]`; sections that could
	/// not be measured are skipped. Does nothing while a fragment choice is
	/// pinned. Returns whether the active section changed.
	pub fn update_from_scroll(&mut self, scroll_y: f64, offsets: &[Option<f64>]) -> bool {
		if self.pinned {
			return false;
		}
		let y = scroll_y + SCROLL_LOOKAHEAD;
		let next = offsets
			.iter()
			.take(self.sections.len())
			.enumerate()
			.filter(|(_, top)| top.is_some_and(|top| top <= y))
			.map(|(i, _)| i)
			.last()
			.unwrap_or(0);
		self.set_active(next)
	}

	/// Activate the section named by a URL fragment (`"#projects"` or `"projects"`).
	///
	/// A known fragment pins the choice against scroll updates until
	/// [`release_pin`](Self::release_pin). Unknown fragments leave the state
	/// unchanged. Returns whether the active section changed.
	pub fn activate_fragment(&mut self, fragment: &str) -> bool {
		let id = fragment.strip_prefix('#').unwrap_or(fragment);
		match self.sections.iter().position(|s| s == id) {
			Some(idx) => {
				self.pinned = true;
				self.set_active(idx)
			}
			None => false,
		}
	}

	/// Hand control back to scroll tracking, after user-driven scrolling.
	pub fn release_pin(&mut self) {
		self.pinned = false;
	}

	pub fn is_pinned(&self) -> bool {
		self.pinned
	}

	/// Whether a link with this `href` points at the active section.
	pub fn is_link_active(&self, href: &str) -> bool {
		match (href.strip_prefix('#'), self.active()) {
			(Some(target), Some(active)) => target == active,
			_ => false,
		}
	}

	fn set_active(&mut self, idx: usize) -> bool {
		if self.active == idx {
			return false;
		}
		self.active = idx;
		log::debug!("sections: active -> {:?}", self.active());
		true
	}
}
