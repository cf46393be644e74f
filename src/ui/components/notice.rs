use ratatui::{
	Frame,
	layout::{Alignment, Constraint, Flex, Layout, Rect},
	style::Style,
	widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::ui::theme::Theme;

/// Draw a bordered advisory message across the top of `area`.
pub fn render_advisory(frame: &mut Frame, area: Rect, message: &str, style: Style) {
	let height = area.height.min(4);
	let target = Rect::new(area.x, area.y, area.width, height);
	let paragraph = Paragraph::new(message)
		.style(style)
		.wrap(Wrap { trim: true })
		.block(
			Block::default()
				.borders(Borders::ALL)
				.border_type(BorderType::Rounded)
				.border_style(style),
		);
	frame.render_widget(paragraph, target);
}

/// Draw a centered modal prompt over everything else.
pub fn render_prompt(frame: &mut Frame, message: &str, theme: &Theme) {
	let [row] = Layout::vertical([Constraint::Length(5)])
		.flex(Flex::Center)
		.areas(frame.area());
	let [popup] = Layout::horizontal([Constraint::Max(56)])
		.flex(Flex::Center)
		.areas(row);

	let paragraph = Paragraph::new(message)
		.alignment(Alignment::Center)
		.wrap(Wrap { trim: true })
		.block(
			Block::default()
				.borders(Borders::ALL)
				.border_type(BorderType::Double)
				.border_style(theme.warning)
				.title(" Notice ")
				.title_bottom(" press any key "),
		);
	frame.render_widget(Clear, popup);
	frame.render_widget(paragraph, popup);
}
