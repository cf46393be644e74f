use anyhow::{Context, Result};
use wildcat::{App, HttpLocationSource, SearchConfig, SearchOutcome, SearchWorkflow, logging};

use crate::cli::{CliArgs, OutputFormat, StatePrinter};

/// Chooses between a single scripted search and the interactive form.
pub(crate) enum Session {
	OneShot {
		item: String,
		area: String,
	},
	Interactive {
		item: Option<String>,
		area: Option<String>,
	},
}

impl Session {
	pub(crate) fn from_cli(cli: &CliArgs) -> Self {
		match (&cli.item, &cli.area) {
			(Some(item), Some(area)) => Self::OneShot {
				item: item.clone(),
				area: area.clone(),
			},
			_ => Self::Interactive {
				item: cli.item.clone(),
				area: cli.area.clone(),
			},
		}
	}

	/// Run the session. Only interactive sessions produce an outcome.
	pub(crate) fn run(
		self,
		config: SearchConfig,
		verbosity: u8,
		format: OutputFormat,
	) -> Result<Option<SearchOutcome>> {
		let level = logging::level_from_verbosity(verbosity);
		let source = HttpLocationSource::new(&config).context("failed to build the HTTP client")?;

		match self {
			Self::OneShot { item, area } => {
				logging::init_stderr(level)?;
				let workflow = SearchWorkflow::new(config, source);
				let mut printer = StatePrinter::stdout(format);
				workflow
					.submit_search(&item, &area, &mut printer)
					.context("search was not submitted")?;
				Ok(None)
			}
			Self::Interactive { item, area } => {
				logging::init_interactive(level)?;
				let app = App::new(config, Box::new(source))
					.with_initial_input(item.as_deref(), area.as_deref());
				let outcome = wildcat::run(app)?;
				Ok(Some(outcome))
			}
		}
	}
}
