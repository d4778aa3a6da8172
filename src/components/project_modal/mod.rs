//! Project summary cards with a full-detail dialog.

mod component;
pub mod state;

pub use component::ProjectGallery;
pub use state::{ClickOutcome, ModalClick, ModalState};
