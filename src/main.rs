mod cli;
mod session;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use session::Session;

fn main() -> Result<()> {
	let cli = parse_cli();
	let resolved = settings::load(&cli)?;

	if cli.list_areas {
		for area in &resolved.search.campus_areas {
			println!("{area}");
		}
		return Ok(());
	}

	if cli.print_config {
		resolved.print_summary();
	}

	let session = Session::from_cli(&cli);
	let outcome = session.run(resolved.search, cli.verbose, cli.output)?;

	if let Some(outcome) = outcome {
		print_outcome(cli.output, &outcome)?;
	}
	Ok(())
}

fn print_outcome(format: OutputFormat, outcome: &wildcat::SearchOutcome) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(outcome),
		OutputFormat::Json => print_json(outcome)?,
	}
	Ok(())
}
