use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, Command, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use wildcat::app_dirs;

/// Produce the full version banner including the config directory.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("wildcat {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = cli_command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

fn cli_command() -> Command {
	CliArgs::command()
}

#[derive(Parser, Debug)]
#[command(
	name = "wildcat",
	version,
	long_version = long_version(),
	about = "Find where a lost item on campus is most likely to turn up",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `wildcat` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "WILDCAT_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'e',
		long,
		value_name = "URL",
		help = "Lookup service endpoint (default: http://localhost:8000/lost-found)"
	)]
	pub(crate) endpoint: Option<String>,
	#[arg(
		short = 'i',
		long,
		value_name = "TEXT",
		help = "Item description; searches immediately when combined with --area"
	)]
	pub(crate) item: Option<String>,
	#[arg(
		short = 'a',
		long,
		value_name = "NAME",
		help = "Campus area; searches immediately when combined with --item"
	)]
	pub(crate) area: Option<String>,
	#[arg(
		long = "timeout-ms",
		value_name = "NUM",
		help = "Request timeout in milliseconds (default: 10000)"
	)]
	pub(crate) timeout_ms: Option<u64>,
	#[arg(
		long = "max-item-length",
		value_name = "NUM",
		help = "Maximum item description length (default: 100)"
	)]
	pub(crate) max_item_length: Option<usize>,
	#[arg(
		long = "areas",
		value_delimiter = ',',
		value_name = "NAME",
		help = "Comma-separated campus areas (default: built-in list)"
	)]
	pub(crate) areas: Option<Vec<String>>,
	#[arg(
		long = "default-area",
		value_name = "NAME",
		help = "Area preselected in the form (default: Central Campus)"
	)]
	pub(crate) default_area: Option<String>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-areas",
		help = "List configured campus areas and exit (default: disabled)"
	)]
	pub(crate) list_areas: bool,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity, repeatable (default: warnings only)"
	)]
	pub(crate) verbose: u8,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
