use super::location::locations_from_payload;
use super::query::{SearchQuery, ValidationError};
use super::source::{FetchError, LocationSource};
use super::state::UiState;
use super::view::SearchView;
use crate::config::SearchConfig;

/// Validate a submission, query the source, and map the answer to a state.
pub struct SearchWorkflow<S> {
	config: SearchConfig,
	source: S,
}

impl<S: LocationSource> SearchWorkflow<S> {
	pub fn new(config: SearchConfig, source: S) -> Self {
		Self { config, source }
	}

	#[must_use]
	pub fn config(&self) -> &SearchConfig {
		&self.config
	}

	/// Run one full search cycle against `view`.
	///
	/// A rejected submission prompts and returns the error without touching
	/// the source or the current display.
	pub fn submit_search(
		&self,
		description: &str,
		area: &str,
		view: &mut impl SearchView,
	) -> Result<UiState, ValidationError> {
		let query = match self.prepare(description, area) {
			Ok(query) => query,
			Err(err) => {
				view.prompt(&err.prompt());
				return Err(err);
			}
		};

		view.render(&UiState::Loading);
		let state = self.resolve(&query);
		view.render(&state);
		Ok(state)
	}

	/// The validation step of [`SearchWorkflow::submit_search`].
	pub fn prepare(&self, description: &str, area: &str) -> Result<SearchQuery, ValidationError> {
		SearchQuery::new(description, area, &self.config)
	}

	/// Query the source and map the outcome. Never fails: every error becomes
	/// [`UiState::Error`] after being logged.
	pub fn resolve(&self, query: &SearchQuery) -> UiState {
		match self.fetch_locations(query) {
			Ok(state) => {
				log::info!(
					"search for '{}' in {} finished: {}",
					query.description(),
					query.area(),
					state.label()
				);
				state
			}
			Err(err) => {
				log::error!(
					"search for '{}' in {} failed: {err}",
					query.description(),
					query.area()
				);
				UiState::Error
			}
		}
	}

	fn fetch_locations(&self, query: &SearchQuery) -> Result<UiState, FetchError> {
		let payload = self.source.fetch(query)?;
		log::debug!("search response: {payload}");
		let locations = locations_from_payload(payload).map_err(FetchError::MalformedPayload)?;
		Ok(UiState::from_locations(locations))
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use serde_json::{Value, json};

	use super::*;
	use crate::search::location::LocationResult;

	/// Source returning canned payloads and remembering every query it saw.
	struct ScriptedSource {
		reply: Box<dyn Fn() -> Result<Value, FetchError> + Send + Sync>,
		calls: Mutex<Vec<SearchQuery>>,
	}

	impl ScriptedSource {
		fn replying(payload: Value) -> Self {
			Self {
				reply: Box::new(move || Ok(payload.clone())),
				calls: Mutex::new(Vec::new()),
			}
		}

		fn failing() -> Self {
			Self {
				reply: Box::new(|| Err(FetchError::Other("connection refused".into()))),
				calls: Mutex::new(Vec::new()),
			}
		}

		fn call_count(&self) -> usize {
			self.calls.lock().unwrap().len()
		}
	}

	impl LocationSource for ScriptedSource {
		fn fetch(&self, query: &SearchQuery) -> Result<Value, FetchError> {
			self.calls.lock().unwrap().push(query.clone());
			(self.reply)()
		}
	}

	#[derive(Default)]
	struct RecordingView {
		prompts: Vec<String>,
		states: Vec<UiState>,
	}

	impl SearchView for RecordingView {
		fn prompt(&mut self, message: &str) {
			self.prompts.push(message.to_string());
		}

		fn render(&mut self, state: &UiState) {
			self.states.push(state.clone());
		}
	}

	fn workflow(source: ScriptedSource) -> SearchWorkflow<ScriptedSource> {
		SearchWorkflow::new(SearchConfig::default(), source)
	}

	#[test]
	fn blank_input_prompts_without_fetching() {
		let workflow = workflow(ScriptedSource::replying(json!([])));
		let mut view = RecordingView::default();

		for (description, area) in [("", "Library Area"), ("  ", "Library Area"), ("wallet", " ")] {
			let result = workflow.submit_search(description, area, &mut view);
			assert_eq!(result, Err(ValidationError::MissingField));
		}

		assert_eq!(workflow.source.call_count(), 0);
		assert_eq!(view.prompts.len(), 3);
		assert!(view.states.is_empty(), "display must not change on a rejected submit");
	}

	#[test]
	fn single_location_becomes_results() {
		let workflow = workflow(ScriptedSource::replying(json!([
			{"name": "Main Desk", "area": "Library Area", "link": "https://x/y"}
		])));
		let mut view = RecordingView::default();

		let state = workflow
			.submit_search("wallet", "Library Area", &mut view)
			.expect("valid submission");

		assert_eq!(
			state,
			UiState::Results(vec![LocationResult::new("Main Desk", "Library Area", "https://x/y")])
		);
		assert_eq!(view.states, vec![UiState::Loading, state]);

		let calls = workflow.source.calls.lock().unwrap();
		assert_eq!(calls.len(), 1);
		assert_eq!(calls[0].description(), "wallet");
		assert_eq!(calls[0].area(), "Library Area");
	}

	#[test]
	fn empty_array_becomes_empty_state() {
		let workflow = workflow(ScriptedSource::replying(json!([])));
		let mut view = RecordingView::default();
		let state = workflow.submit_search("wallet", "Library Area", &mut view).unwrap();
		assert_eq!(state, UiState::Empty);
	}

	#[test]
	fn object_payload_becomes_empty_state() {
		let workflow = workflow(ScriptedSource::replying(json!({"error": "Missing \"item\" or \"area\"."})));
		let mut view = RecordingView::default();
		let state = workflow.submit_search("wallet", "Library Area", &mut view).unwrap();
		assert_eq!(state, UiState::Empty);
	}

	#[test]
	fn fetch_failure_becomes_error_state() {
		let workflow = workflow(ScriptedSource::failing());
		let mut view = RecordingView::default();
		let state = workflow.submit_search("wallet", "Library Area", &mut view).unwrap();
		assert_eq!(state, UiState::Error);
		assert_eq!(view.states.last(), Some(&UiState::Error));
		assert!(view.prompts.is_empty(), "errors are not prompts");
	}

	#[test]
	fn malformed_array_becomes_error_state() {
		let workflow = workflow(ScriptedSource::replying(json!([{"name": "Desk"}, "junk"])));
		let query = workflow.prepare("wallet", "Library Area").unwrap();
		assert_eq!(workflow.resolve(&query), UiState::Error);
	}

	#[test]
	fn repeated_searches_render_identically() {
		let workflow = workflow(ScriptedSource::replying(json!([
			{"name": "Main Desk", "area": "Library Area", "link": "https://x/y"},
			{"name": "Ask Us", "area": "Library Area", "link": "https://x/z", "note": "Ground floor"}
		])));
		let mut view = RecordingView::default();

		let first = workflow.submit_search("wallet", "Library Area", &mut view).unwrap();
		let second = workflow.submit_search("wallet", "Library Area", &mut view).unwrap();

		assert_eq!(first, second);
		assert_eq!(second.locations().len(), 2);
		assert_eq!(workflow.source.call_count(), 2);
	}
}
