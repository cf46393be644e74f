//! Interactive terminal front end.
//!
//! [`App`] owns the form, the current [`UiState`](crate::search::UiState) and
//! the background search runtime. The submodules split key handling, drawing,
//! the event loop, and the widgets themselves.

mod actions;
mod area;
pub mod components;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use area::AreaSelector;
pub use runtime::run;
pub use state::{App, Focus, SearchOutcome};
pub use theme::Theme;
