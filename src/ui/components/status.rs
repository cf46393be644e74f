use ratatui::{
	Frame,
	layout::Rect,
	text::{Line, Span},
	widgets::Paragraph,
};
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::search::UiState;
use crate::ui::theme::Theme;

pub const LOADING_LABEL: &str = "Searching lost & found locations...";

/// Status line under the form: a throbber while loading, a result count or
/// a transient note otherwise.
pub fn render_status(
	frame: &mut Frame,
	area: Rect,
	state: &UiState,
	note: Option<&str>,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let muted = theme.empty;
	let line = match (state, note) {
		(UiState::Loading, _) => {
			let spinner = Throbber::default()
				.style(theme.focus)
				.throbber_style(theme.focus);
			Line::from(vec![
				spinner.to_symbol_span(throbber_state),
				Span::styled(LOADING_LABEL, muted),
			])
		}
		(_, Some(note)) => Line::from(Span::styled(note.to_string(), muted)),
		(UiState::Results(locations), None) => {
			let noun = if locations.len() == 1 { "location" } else { "locations" };
			Line::from(Span::styled(format!("{} {noun} found", locations.len()), muted))
		}
		_ => return,
	};
	frame.render_widget(Paragraph::new(line), area);
}
