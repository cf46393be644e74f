use ratatui::style::{Color, Modifier, Style};

const CARDINAL: Color = Color::Rgb(171, 5, 32);
const NAVY: Color = Color::Rgb(12, 35, 75);

#[derive(Debug, Clone, Copy)]
pub struct Theme {
	pub header: Style,
	pub prompt: Style,
	pub focus: Style,
	pub empty: Style,
	pub selected_value: Style,
	pub card_border: Style,
	pub card_highlight: Style,
	pub link: Style,
	pub warning: Style,
	pub error: Style,
}

pub const WILDCAT: Theme = Theme {
	header: Style::new()
		.fg(Color::White)
		.bg(NAVY)
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Gray),
	focus: Style::new().fg(CARDINAL).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::DarkGray),
	selected_value: Style::new().fg(Color::White),
	card_border: Style::new().fg(Color::Gray),
	card_highlight: Style::new().fg(CARDINAL).add_modifier(Modifier::BOLD),
	link: Style::new().fg(CARDINAL).add_modifier(Modifier::UNDERLINED),
	warning: Style::new().fg(Color::Yellow),
	error: Style::new().fg(Color::LightRed),
};

impl Default for Theme {
	fn default() -> Self {
		WILDCAT
	}
}

impl Theme {
	/// Border style for an input box, depending on focus.
	#[must_use]
	pub fn input_border(&self, focused: bool) -> Style {
		if focused { self.focus } else { self.prompt }
	}

	/// Text style for the area selector. A chosen area reads as regular text,
	/// the blank placeholder stays muted.
	#[must_use]
	pub fn area_value(&self, has_value: bool) -> Style {
		if has_value {
			self.selected_value
		} else {
			self.empty
		}
	}

	#[must_use]
	pub fn card_border(&self, highlighted: bool) -> Style {
		if highlighted {
			self.card_highlight
		} else {
			self.card_border
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn area_value_style_tracks_selection() {
		let theme = Theme::default();
		assert_ne!(theme.area_value(true), theme.area_value(false));
		assert_eq!(theme.area_value(false), theme.empty);
	}
}
