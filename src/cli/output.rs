use std::io::{self, Write};

use anyhow::Result;
use serde_json::json;
use wildcat::{LocationResult, SearchOutcome, SearchView, UiState};

use super::OutputFormat;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		match &outcome.query {
			Some(query) => println!(
				"Search cancelled (item: '{}', area: {})",
				query.description(),
				query.area()
			),
			None => println!("Search cancelled"),
		}
		return;
	}

	match &outcome.selection {
		Some(location) => print!("{}", format_location(location)),
		None => println!("No selection"),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let query = match &outcome.query {
		Some(query) => json!({
			"item": query.description(),
			"area": query.area(),
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"query": query,
		"selection": outcome.selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

fn format_location(location: &LocationResult) -> String {
	let mut text = format!("{}\n", location.name);
	if !location.area.is_empty() {
		text.push_str(&format!("  Area: {}\n", location.area));
	}
	if let Some(note) = location.visible_note() {
		text.push_str(&format!("  Note: {note}\n"));
	}
	if !location.link.is_empty() {
		text.push_str(&format!("  Link: {}\n", location.link));
	}
	text
}

/// Prints the final state of a one-shot search instead of drawing it.
pub(crate) struct StatePrinter<W> {
	format: OutputFormat,
	out: W,
}

impl StatePrinter<io::Stdout> {
	pub(crate) fn stdout(format: OutputFormat) -> Self {
		Self::new(format, io::stdout())
	}
}

impl<W: Write> StatePrinter<W> {
	pub(crate) fn new(format: OutputFormat, out: W) -> Self {
		Self { format, out }
	}

	#[cfg(test)]
	fn into_inner(self) -> W {
		self.out
	}

	fn write_state(&mut self, state: &UiState) -> Result<()> {
		match self.format {
			OutputFormat::Json => {
				writeln!(self.out, "{}", serde_json::to_string_pretty(state)?)?;
			}
			OutputFormat::Plain => match state {
				UiState::Results(locations) => {
					let blocks: Vec<String> = locations.iter().map(format_location).collect();
					write!(self.out, "{}", blocks.join("\n"))?;
				}
				other => {
					if let Some(message) = other.advisory() {
						writeln!(self.out, "{message}")?;
					}
				}
			},
		}
		self.out.flush()?;
		Ok(())
	}
}

impl<W: Write> SearchView for StatePrinter<W> {
	fn prompt(&mut self, message: &str) {
		eprintln!("{message}");
	}

	fn render(&mut self, state: &UiState) {
		if matches!(state, UiState::Idle | UiState::Loading) {
			log::info!("search state: {}", state.label());
			return;
		}
		if let Err(err) = self.write_state(state) {
			log::error!("failed to print search results: {err:#}");
		}
	}
}

#[cfg(test)]
mod tests {
	use serde_json::Value;
	use wildcat::{SearchConfig, SearchQuery};

	use super::*;

	fn location() -> LocationResult {
		LocationResult::new("Main Desk", "Library Area", "https://x/y").with_note("Ask at the front")
	}

	fn printed(format: OutputFormat, states: &[UiState]) -> String {
		let mut printer = StatePrinter::new(format, Vec::new());
		for state in states {
			printer.render(state);
		}
		String::from_utf8(printer.into_inner()).expect("utf8")
	}

	#[test]
	fn json_format_includes_selection_and_query() {
		let query = SearchQuery::new("wallet", "Library Area", &SearchConfig::default()).unwrap();
		let outcome = SearchOutcome {
			accepted: true,
			query: Some(query),
			selection: Some(location()),
		};

		let json = format_outcome_json(&outcome).expect("json");
		let value: Value = serde_json::from_str(&json).expect("parse");
		assert_eq!(value["query"]["item"], "wallet");
		assert_eq!(value["selection"]["name"], "Main Desk");
		assert_eq!(value["selection"]["link"], "https://x/y");
	}

	#[test]
	fn plain_printer_skips_loading_and_prints_cards() {
		let text = printed(
			OutputFormat::Plain,
			&[UiState::Loading, UiState::Results(vec![location()])],
		);
		assert_eq!(
			text,
			"Main Desk\n  Area: Library Area\n  Note: Ask at the front\n  Link: https://x/y\n"
		);
	}

	#[test]
	fn plain_printer_shows_advisories() {
		let text = printed(OutputFormat::Plain, &[UiState::Loading, UiState::Error]);
		assert_eq!(text.trim_end(), wildcat::search::ERROR_ADVISORY);
	}

	#[test]
	fn json_printer_tags_the_state() {
		let text = printed(OutputFormat::Json, &[UiState::Empty]);
		let value: Value = serde_json::from_str(&text).expect("parse");
		assert_eq!(value["state"], "empty");

		let text = printed(OutputFormat::Json, &[UiState::Results(vec![location()])]);
		let value: Value = serde_json::from_str(&text).expect("parse");
		assert_eq!(value["state"], "results");
		assert_eq!(value["locations"][0]["area"], "Library Area");
	}
}
