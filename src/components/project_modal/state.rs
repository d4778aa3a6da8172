//! Open/closed state for the project detail dialog.

/// At most one project open, plus the focus target to return to on close.
///
/// Generic over the focus handle so the transitions can be exercised without
/// a browser; the page uses `web_sys::HtmlElement`.
#[derive(Clone, Debug)]
pub struct ModalState<F> {
	open: Option<usize>,
	restore_focus: Option<F>,
}

impl<F> Default for ModalState<F> {
	fn default() -> Self {
		Self {
			open: None,
			restore_focus: None,
		}
	}
}

impl<F> ModalState<F> {
	pub fn is_open(&self) -> bool {
		self.open.is_some()
	}

	/// Index of the open project card.
	pub fn open_card(&self) -> Option<usize> {
		self.open
	}

	/// Show `card`, remembering `focused` as the element to restore on close.
	///
	/// Opening while another card is shown replaces it as if it had been
	/// closed first: the restore target stays the element that was focused
	/// before the first dialog appeared, which is where closing the first one
	/// would have put focus anyway.
	pub fn open(&mut self, card: usize, focused: Option<F>) {
		if self.open.is_none() {
			self.restore_focus = focused;
		}
		self.open = Some(card);
	}

	/// Hide the dialog. Returns the element to refocus, if one was recorded.
	///
	/// Closing an already closed dialog does nothing and returns `None`.
	pub fn close(&mut self) -> Option<F> {
		self.open.take()?;
		self.restore_focus.take()
	}
}

/// Where a click landed, as far as the dialog cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
	/// A summary card; `on_link` when the target is inside one of its `<a>`s.
	Card { on_link: bool },
	/// The open dialog itself.
	Dialog { on_link: bool },
	/// The host wrapping the dialog; `on_backdrop` when the host itself was hit.
	Host { on_backdrop: bool },
	/// The dimmed overlay behind the host.
	Overlay,
}

/// What a click does to the dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
	Open,
	Close,
	/// Swallow the click so it never reaches the host.
	Contain,
	/// Let the browser handle it (follow the link, bubble on).
	PassThrough,
}

impl ModalClick {
	pub fn outcome(self) -> ClickOutcome {
		match self {
			ModalClick::Card { on_link: false } => ClickOutcome::Open,
			ModalClick::Dialog { on_link: false } => ClickOutcome::Contain,
			ModalClick::Host { on_backdrop: true } | ModalClick::Overlay => ClickOutcome::Close,
			ModalClick::Card { on_link: true }
			| ModalClick::Dialog { on_link: true }
			| ModalClick::Host { on_backdrop: false } => ClickOutcome::PassThrough,
		}
	}
}
