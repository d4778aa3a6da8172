//! Site navigation: header links, the mobile drawer and active-section tracking.

mod component;
pub mod drawer;
pub mod sections;

pub use component::SiteNav;
pub use drawer::DrawerState;
pub use sections::{SCROLL_LOOKAHEAD, SectionTracker};
