use ratatui::{
	Frame,
	layout::Rect,
	widgets::{Block, BorderType, Borders},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::ui::theme::Theme;

/// Log records captured by `tui-logger`, shown on demand with F2.
pub fn render_diagnostics(frame: &mut Frame, area: Rect, theme: &Theme) {
	let widget = TuiLoggerWidget::default()
		.block(
			Block::default()
				.borders(Borders::ALL)
				.border_type(BorderType::Rounded)
				.border_style(theme.prompt)
				.title(" Diagnostics (F2 to hide) "),
		)
		.output_level(Some(TuiLoggerLevelOutput::Abbreviated))
		.output_target(false)
		.output_file(false)
		.output_line(false)
		.style_error(theme.error)
		.style_warn(theme.warning)
		.style_info(theme.selected_value)
		.style_debug(theme.empty);
	frame.render_widget(widget, area);
}
