//! Core crate for the `wildcat` lost-and-found finder.
//!
//! [`search`] holds the search cycle behind the [`SearchView`] and
//! [`LocationSource`] seams; [`ui`] is the terminal front end that drives it.
//! The root re-exports the pieces an embedder needs to wire both together.

pub mod app_dirs;
pub mod browser;
pub mod config;
pub mod logging;
pub mod search;
pub mod ui;

pub use config::SearchConfig;
pub use search::{
	FetchError, HttpLocationSource, LocationResult, LocationSource, SearchQuery, SearchView,
	SearchWorkflow, UiState, ValidationError,
};
pub use ui::{App, SearchOutcome, Theme, run};
