use ratatui::{
	Frame,
	layout::Rect,
	text::{Line, Span},
	widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::ui::area::AreaSelector;
use crate::ui::theme::Theme;

pub const AREA_PLACEHOLDER: &str = "Select a campus area";

/// Draw the area selector as a single-line dropdown: `‹ value ›`.
pub fn render_area_selector(
	frame: &mut Frame,
	area: Rect,
	selector: &AreaSelector,
	focused: bool,
	theme: &Theme,
) {
	let value = selector.value().unwrap_or(AREA_PLACEHOLDER);
	let arrows = if focused { theme.focus } else { theme.empty };
	let line = Line::from(vec![
		Span::styled("‹ ", arrows),
		Span::styled(value.to_string(), theme.area_value(selector.has_value())),
		Span::styled(" ›", arrows),
	]);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_type(BorderType::Rounded)
		.border_style(theme.input_border(focused))
		.title(" Where were you? ");
	frame.render_widget(Paragraph::new(line).block(block), area);
}
