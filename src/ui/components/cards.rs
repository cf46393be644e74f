use ratatui::{
	Frame,
	layout::Rect,
	text::{Line, Span},
	widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_truncate::UnicodeTruncateStr;
use unicode_width::UnicodeWidthStr;

use crate::search::LocationResult;
use crate::ui::theme::Theme;

const BORDER_ROWS: u16 = 2;
const ELLIPSIS: &str = "…";
const LABEL_WIDTH: u16 = 8;

/// Rows a card occupies, borders included.
#[must_use]
pub fn card_height(location: &LocationResult) -> u16 {
	let body = if location.visible_note().is_some() { 3 } else { 2 };
	body + BORDER_ROWS
}

/// First card to draw so that `selected` is fully visible, starting from the
/// previous offset to avoid jumping.
#[must_use]
pub fn scroll_offset(heights: &[u16], selected: usize, offset: usize, available: u16) -> usize {
	if heights.is_empty() {
		return 0;
	}
	let selected = selected.min(heights.len() - 1);
	if selected < offset {
		return selected;
	}

	let mut start = offset;
	loop {
		let used: u32 = heights[start..=selected].iter().map(|h| u32::from(*h)).sum();
		if used <= u32::from(available) || start == selected {
			return start;
		}
		start += 1;
	}
}

fn fit(text: &str, width: u16) -> String {
	let width = usize::from(width);
	if text.width() <= width {
		return text.to_string();
	}
	let (truncated, _) = text.unicode_truncate(width.saturating_sub(ELLIPSIS.width()));
	format!("{truncated}{ELLIPSIS}")
}

fn card_lines(location: &LocationResult, width: u16, theme: &Theme) -> Vec<Line<'static>> {
	let value_width = width.saturating_sub(LABEL_WIDTH);
	let mut lines = vec![Line::from(vec![
		Span::styled("Area    ", theme.card_highlight),
		Span::raw(fit(&location.area, value_width)),
	])];
	if let Some(note) = location.visible_note() {
		lines.push(Line::from(vec![
			Span::styled("Note    ", theme.prompt),
			Span::styled(fit(note, value_width), theme.prompt),
		]));
	}
	let link = if location.link.trim().is_empty() {
		Span::styled("(no link)", theme.empty)
	} else {
		Span::styled(fit(&location.link, value_width), theme.link)
	};
	lines.push(Line::from(vec![Span::styled("Details ", theme.card_highlight), link]));
	lines
}

/// Draw result cards into `area`, keeping the selected card in view.
/// Returns the scroll offset that was used.
pub fn render_cards(
	frame: &mut Frame,
	area: Rect,
	locations: &[LocationResult],
	selected: usize,
	offset: usize,
	highlight: bool,
	theme: &Theme,
) -> usize {
	let heights: Vec<u16> = locations.iter().map(card_height).collect();
	let offset = scroll_offset(&heights, selected, offset, area.height);

	let mut y = area.y;
	for (index, location) in locations.iter().enumerate().skip(offset) {
		let remaining = area.bottom().saturating_sub(y);
		// The first card is clipped rather than dropped when the region is short.
		let height = if y == area.y {
			heights[index].min(remaining)
		} else {
			heights[index]
		};
		if height == 0 || height > remaining {
			break;
		}
		let card_area = Rect::new(area.x, y, area.width, height);
		let is_selected = highlight && index == selected;
		let title_width = area.width.saturating_sub(4);
		let block = Block::default()
			.borders(Borders::ALL)
			.border_type(BorderType::Rounded)
			.border_style(theme.card_border(is_selected))
			.title(Span::styled(
				format!(" {} ", fit(&location.name, title_width)),
				theme.card_border(is_selected),
			));
		let inner_width = block.inner(card_area).width;
		let paragraph = Paragraph::new(card_lines(location, inner_width, theme)).block(block);
		frame.render_widget(paragraph, card_area);
		y += height;
	}
	offset
}
