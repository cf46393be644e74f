//! Widgets composed by the draw pass.

pub mod cards;
pub mod diagnostics;
pub mod form;
pub mod notice;
pub mod status;

pub use cards::{card_height, render_cards};
pub use diagnostics::render_diagnostics;
pub use form::render_area_selector;
pub use notice::{render_advisory, render_prompt};
pub use status::render_status;
