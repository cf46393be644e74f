use super::state::UiState;

/// Render target driven by the search workflow.
///
/// The terminal application and the one-shot printer both implement this, so
/// the workflow never touches a concrete display.
pub trait SearchView {
	/// Show a blocking prompt for a rejected submission.
	fn prompt(&mut self, message: &str);

	/// Replace whatever is displayed with `state`.
	fn render(&mut self, state: &UiState);
}
