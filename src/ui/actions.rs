use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::App;
use super::state::{Focus, SearchOutcome};
use crate::browser;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		// A prompt swallows the next key, like a modal alert.
		if self.prompt.take().is_some() {
			return Ok(None);
		}

		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.outcome(false))),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.outcome(false))),
			KeyCode::Char('o') if ctrl => self.open_selected(),
			KeyCode::F(2) => self.show_diagnostics = !self.show_diagnostics,
			KeyCode::Tab => self.focus = self.focus.next(),
			KeyCode::BackTab => self.focus = self.focus.previous(),
			_ => match self.focus {
				Focus::Description => self.handle_description_key(key),
				Focus::Area => self.handle_area_key(key),
				Focus::Results => return Ok(self.handle_results_key(key)),
			},
		}
		Ok(None)
	}

	fn handle_description_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Enter => self.submit(),
			KeyCode::Down => self.focus = Focus::Area,
			KeyCode::Char(_) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
				if self.description_len() < self.config().max_item_length {
					self.description.input(key);
				}
			}
			// Line breaks are not part of a description.
			KeyCode::Char('m' | 'j') => {}
			_ => {
				if self.description.input(key) {
					self.enforce_description_limit();
				}
			}
		}
	}

	fn handle_area_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Enter => self.submit(),
			KeyCode::Right | KeyCode::Char('l') => self.area.next(),
			KeyCode::Left | KeyCode::Char('h') => self.area.previous(),
			KeyCode::Up => self.focus = Focus::Description,
			KeyCode::Down => self.focus = Focus::Results,
			KeyCode::Backspace | KeyCode::Delete => self.area.clear(),
			_ => {}
		}
	}

	fn handle_results_key(&mut self, key: KeyEvent) -> Option<SearchOutcome> {
		match key.code {
			KeyCode::Up | KeyCode::Char('k') => {
				if self.selected == 0 {
					self.focus = Focus::Area;
				} else {
					self.move_selection_up();
				}
			}
			KeyCode::Down | KeyCode::Char('j') => self.move_selection_down(),
			KeyCode::Char('o') => self.open_selected(),
			KeyCode::Enter if self.selected_location().is_some() => {
				return Some(self.outcome(true));
			}
			_ => {}
		}
		None
	}

	fn open_selected(&mut self) {
		let Some(link) = self.selected_location().map(|location| location.link.clone()) else {
			return;
		};
		self.status_note = Some(match browser::open_link(&link) {
			Ok(()) => format!("Opened {link}"),
			Err(err) => {
				log::error!("{err:#}");
				"Could not open this link.".to_string()
			}
		});
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::{KeyEvent, KeyModifiers};
	use serde_json::json;

	use super::*;
	use crate::search::{MISSING_FIELDS_PROMPT, UiState};
	use crate::config::SearchConfig;
	use crate::ui::state::tests::{StaticSource, app_with, wait_for_results};

	fn press(app: &mut App, code: KeyCode) -> Option<SearchOutcome> {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).expect("key handled")
	}

	fn type_text(app: &mut App, text: &str) {
		for ch in text.chars() {
			press(app, KeyCode::Char(ch));
		}
	}

	#[test]
	fn typing_respects_max_length() {
		let mut app = app_with(Ok(json!([])));
		let max = app.config().max_item_length;
		type_text(&mut app, &"x".repeat(max + 10));
		assert_eq!(app.description_len(), max);
	}

	#[test]
	fn pasting_the_yank_buffer_respects_max_length() {
		let config = SearchConfig {
			max_item_length: 5,
			..SearchConfig::default()
		};
		let mut app = App::new(config, Box::new(StaticSource(Ok(json!([])))))
			.with_initial_input(Some("abcd"), None);
		app.description.set_yank_text("xyz");

		let paste = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL);
		app.handle_key(paste).expect("key handled");

		assert_eq!(app.description_text(), "abcdx");
		assert_eq!(app.description_len(), 5);
	}

	#[test]
	fn enter_with_blank_description_shows_prompt_then_dismisses() {
		let mut app = app_with(Ok(json!([])));
		press(&mut app, KeyCode::Enter);
		assert_eq!(app.prompt.as_deref(), Some(MISSING_FIELDS_PROMPT));

		// The dismissing key is not forwarded to the input.
		press(&mut app, KeyCode::Char('a'));
		assert!(app.prompt.is_none());
		assert_eq!(app.description_text(), "");
	}

	#[test]
	fn area_keys_cycle_and_clear() {
		let mut app = app_with(Ok(json!([])));
		press(&mut app, KeyCode::Tab);
		assert_eq!(app.focus, Focus::Area);
		press(&mut app, KeyCode::Right);
		assert_eq!(app.area.value(), Some("Library Area"));
		press(&mut app, KeyCode::Backspace);
		assert_eq!(app.area.value(), None);

		press(&mut app, KeyCode::BackTab);
		type_text(&mut app, "wallet");
		press(&mut app, KeyCode::Enter);
		assert_eq!(app.prompt.as_deref(), Some(MISSING_FIELDS_PROMPT));
	}

	#[test]
	fn enter_on_results_accepts_selection() {
		let mut app = app_with(Ok(json!([
			{"name": "Main Desk", "area": "Library Area", "link": "https://x/y"},
			{"name": "Ask Us", "area": "Library Area", "link": "https://x/z"}
		])));
		type_text(&mut app, "wallet");
		press(&mut app, KeyCode::Enter);
		wait_for_results(&mut app);
		assert!(matches!(app.state, UiState::Results(_)));

		app.focus = Focus::Results;
		press(&mut app, KeyCode::Down);
		let outcome = press(&mut app, KeyCode::Enter).expect("accepted");
		assert!(outcome.accepted);
		assert_eq!(outcome.selection.map(|loc| loc.name), Some("Ask Us".to_string()));
	}

	#[test]
	fn escape_cancels() {
		let mut app = app_with(Ok(json!([])));
		let outcome = press(&mut app, KeyCode::Esc).expect("exits");
		assert!(!outcome.accepted);
		assert!(outcome.selection.is_none());
	}
}
