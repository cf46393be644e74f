//! The search cycle: validate a submission, ask the lookup service, and turn
//! the answer into exactly one display state.

mod location;
mod query;
mod runtime;
mod source;
mod state;
mod view;
mod workflow;

pub use location::{LocationResult, locations_from_payload};
pub use query::{MISSING_FIELDS_PROMPT, SearchQuery, ValidationError};
pub use runtime::{SearchResponse, SearchRuntime};
pub use source::{FetchError, HttpLocationSource, LocationSource, parse_endpoint, search_url};
pub use state::{EMPTY_ADVISORY, ERROR_ADVISORY, UiState};
pub use view::SearchView;
pub use workflow::SearchWorkflow;

impl<T: LocationSource + ?Sized> LocationSource for Box<T> {
	fn fetch(&self, query: &SearchQuery) -> Result<serde_json::Value, FetchError> {
		(**self).fetch(query)
	}
}
