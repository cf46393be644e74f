//! Logger installation.
//!
//! Interactive sessions route records into `tui-logger` so they can be shown
//! in the diagnostics pane without corrupting the terminal. One-shot runs log
//! to stderr through `pretty_env_logger`.

use std::env;

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Map a `-v` count onto a level filter. Warnings are always kept.
#[must_use]
pub fn level_from_verbosity(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Capture log records for the diagnostics pane.
pub fn init_interactive(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(level)
		.map_err(|err| anyhow!("failed to install the diagnostics logger: {err:?}"))?;
	tui_logger::set_default_level(level);
	Ok(())
}

/// Log to stderr. `RUST_LOG` directives refine the base level.
pub fn init_stderr(level: LevelFilter) -> Result<()> {
	let mut builder = pretty_env_logger::formatted_builder();
	builder.filter_level(level);
	if let Ok(filters) = env::var("RUST_LOG") {
		builder.parse_filters(&filters);
	}
	builder.try_init()?;
	Ok(())
}

/// Move buffered records into the diagnostics widget's view.
pub fn pump() {
	tui_logger::move_events();
}
