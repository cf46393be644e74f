use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use serde::Serialize;
use throbber_widgets_tui::ThrobberState;
use tui_textarea::{CursorMove, TextArea};

use super::area::AreaSelector;
use super::theme::Theme;
use crate::config::SearchConfig;
use crate::search::{
	LocationResult, LocationSource, SearchQuery, SearchRuntime, SearchView, SearchWorkflow, UiState,
};

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
	Description,
	Area,
	Results,
}

impl Focus {
	pub(crate) fn next(self) -> Self {
		match self {
			Self::Description => Self::Area,
			Self::Area => Self::Results,
			Self::Results => Self::Description,
		}
	}

	pub(crate) fn previous(self) -> Self {
		match self {
			Self::Description => Self::Results,
			Self::Area => Self::Description,
			Self::Results => Self::Area,
		}
	}
}

/// What the interactive session hands back when it exits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
	pub accepted: bool,
	pub query: Option<SearchQuery>,
	pub selection: Option<LocationResult>,
}

pub struct App<'a> {
	pub description: TextArea<'a>,
	pub area: AreaSelector,
	pub focus: Focus,
	pub state: UiState,
	pub theme: Theme,
	pub(crate) selected: usize,
	pub(crate) scroll: usize,
	pub(crate) prompt: Option<String>,
	pub(crate) status_note: Option<String>,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) show_diagnostics: bool,
	pub(crate) last_query: Option<SearchQuery>,
	search: SearchRuntime<Box<dyn LocationSource>>,
}

const DESCRIPTION_PLACEHOLDER: &str = "e.g. black wallet, AirPods case, keys on a red lanyard";

impl<'a> App<'a> {
	pub fn new(config: SearchConfig, source: Box<dyn LocationSource>) -> Self {
		let area = AreaSelector::from_config(&config);
		let mut description = TextArea::default();
		description.set_placeholder_text(DESCRIPTION_PLACEHOLDER);
		description.set_cursor_line_style(Style::default());

		Self {
			description,
			area,
			focus: Focus::Description,
			state: UiState::Idle,
			theme: Theme::default(),
			selected: 0,
			scroll: 0,
			prompt: None,
			status_note: None,
			throbber_state: ThrobberState::default(),
			show_diagnostics: false,
			last_query: None,
			search: SearchRuntime::new(SearchWorkflow::new(config, source)),
		}
	}

	pub(crate) fn config(&self) -> &SearchConfig {
		self.search.workflow().config()
	}

	/// Prefill the form, e.g. from command line arguments.
	pub fn with_initial_input(mut self, description: Option<&str>, area: Option<&str>) -> Self {
		if let Some(text) = description {
			let max = self.config().max_item_length;
			self.replace_description(text.chars().take(max).collect());
		}
		if let Some(area) = area
			&& !self.area.select(area)
		{
			log::warn!("ignoring unknown initial area '{area}'");
		}
		self
	}

	fn replace_description(&mut self, text: String) {
		let mut description = TextArea::new(vec![text]);
		description.set_placeholder_text(DESCRIPTION_PLACEHOLDER);
		description.set_cursor_line_style(Style::default());
		description.move_cursor(CursorMove::End);
		self.description = description;
	}

	/// Cut the description back to the configured limit after an edit that
	/// inserts more than one character, such as pasting the yank buffer.
	pub(crate) fn enforce_description_limit(&mut self) {
		let max = self.config().max_item_length;
		if self.description_len() > max {
			log::debug!("description trimmed to {max} characters");
			let text = self.description_text().chars().take(max).collect();
			self.replace_description(text);
		}
	}

	/// Description text as a single line.
	#[must_use]
	pub fn description_text(&self) -> String {
		self.description.lines().join(" ")
	}

	pub(crate) fn description_len(&self) -> usize {
		self.description
			.lines()
			.iter()
			.map(|line| line.chars().count())
			.sum()
	}

	/// Validate the form and start a background search.
	pub(crate) fn submit(&mut self) {
		let description = self.description_text();
		let area = self.area.value().unwrap_or_default().to_string();
		let query = match self.search.workflow().prepare(&description, &area) {
			Ok(query) => query,
			Err(err) => {
				log::info!("submission rejected: {err}");
				self.prompt(&err.prompt());
				return;
			}
		};

		self.render(&UiState::Loading);
		let id = self.search.dispatch(query.clone());
		log::debug!("dispatched search #{id}");
		self.last_query = Some(query);
	}

	/// Apply every search that has resolved since the last tick.
	pub(crate) fn pump_search_results(&mut self) {
		while let Some(response) = self.search.try_recv() {
			log::debug!("applying search #{} ({})", response.id, response.state.label());
			self.render(&response.state);
		}
	}

	#[must_use]
	pub fn is_searching(&self) -> bool {
		self.search.is_in_flight()
	}

	pub(crate) fn selected_location(&self) -> Option<&LocationResult> {
		self.state.locations().get(self.selected)
	}

	pub(crate) fn move_selection_up(&mut self) {
		self.selected = self.selected.saturating_sub(1);
	}

	pub(crate) fn move_selection_down(&mut self) {
		let len = self.state.locations().len();
		if self.selected + 1 < len {
			self.selected += 1;
		}
	}

	pub(crate) fn outcome(&self, accepted: bool) -> SearchOutcome {
		SearchOutcome {
			accepted,
			query: self.last_query.clone(),
			selection: if accepted {
				self.selected_location().cloned()
			} else {
				None
			},
		}
	}

	/// Refresh the description box chrome for the current focus.
	pub(crate) fn style_description(&mut self) {
		let focused = self.focus == Focus::Description;
		let counter = format!(" {}/{} ", self.description_len(), self.config().max_item_length);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(self.theme.input_border(focused))
			.title(" What did you lose? ")
			.title_bottom(counter);
		self.description.set_block(block);
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.description.set_cursor_style(cursor);
	}
}

impl SearchView for App<'_> {
	fn prompt(&mut self, message: &str) {
		self.prompt = Some(message.to_string());
	}

	fn render(&mut self, state: &UiState) {
		self.state = state.clone();
		self.selected = 0;
		self.scroll = 0;
		self.status_note = None;
	}
}
