use ratatui::{
	Frame,
	layout::{Constraint, Layout, Margin, Rect},
	text::{Line, Span},
	widgets::Paragraph,
};

use super::App;
use super::components::{
	render_advisory, render_area_selector, render_cards, render_diagnostics, render_prompt,
	render_status,
};
use super::state::Focus;
use crate::search::UiState;

const TITLE: &str = " Wildcat Lost & Found ";
const IDLE_HINT: &str = "Describe the item, pick the area you were in, and press Enter.";
const DIAGNOSTICS_HEIGHT: u16 = 10;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let diagnostics_height = if self.show_diagnostics {
			DIAGNOSTICS_HEIGHT
		} else {
			0
		};
		let [title, description, area_row, status, results, diagnostics, footer] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Length(3),
			Constraint::Length(3),
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(diagnostics_height),
			Constraint::Length(1),
		])
		.areas(area);

		frame.render_widget(Paragraph::new(Line::from(Span::styled(TITLE, self.theme.header))), title);

		self.style_description();
		frame.render_widget(&self.description, description);
		render_area_selector(
			frame,
			area_row,
			&self.area,
			self.focus == Focus::Area,
			&self.theme,
		);
		render_status(
			frame,
			status,
			&self.state,
			self.status_note.as_deref(),
			&self.throbber_state,
			&self.theme,
		);
		self.render_results(frame, results);

		if self.show_diagnostics {
			render_diagnostics(frame, diagnostics, &self.theme);
		}
		frame.render_widget(
			Paragraph::new(Span::styled(self.key_hints(), self.theme.empty)),
			footer,
		);

		if let Some(message) = &self.prompt {
			render_prompt(frame, message, &self.theme);
		}
	}

	fn render_results(&mut self, frame: &mut Frame, area: Rect) {
		match &self.state {
			UiState::Idle => {
				frame.render_widget(Paragraph::new(Span::styled(IDLE_HINT, self.theme.empty)), area);
			}
			// The loading indicator lives on the status line; results stay hidden.
			UiState::Loading => {}
			UiState::Results(locations) => {
				self.scroll = render_cards(
					frame,
					area,
					locations,
					self.selected,
					self.scroll,
					self.focus == Focus::Results,
					&self.theme,
				);
			}
			state @ (UiState::Empty | UiState::Error) => {
				let style = if matches!(state, UiState::Error) {
					self.theme.error
				} else {
					self.theme.warning
				};
				if let Some(message) = state.advisory() {
					render_advisory(frame, area, message, style);
				}
			}
		}
	}

	fn key_hints(&self) -> &'static str {
		match self.focus {
			Focus::Description => "Enter search · Tab next field · F2 diagnostics · Esc quit",
			Focus::Area => "←/→ change area · Enter search · Tab next · Esc quit",
			Focus::Results => "↑/↓ move · Enter choose · Ctrl-O open link · Tab next · Esc quit",
		}
	}
}
