use std::collections::HashSet;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, anyhow, bail, ensure};
use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

use wildcat::app_dirs;
use wildcat::config::{DEFAULT_AREA, SearchConfig};
use wildcat::search::parse_endpoint;

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	service: ServiceSection,
	form: FormSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ServiceSection {
	endpoint: Option<String>,
	timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct FormSection {
	max_item_length: Option<usize>,
	areas: Option<Vec<String>>,
	default_area: Option<String>,
}

/// Settings after every layer has been merged and checked.
pub(crate) struct ResolvedConfig {
	pub(crate) search: SearchConfig,
}

impl ResolvedConfig {
	pub(crate) fn print_summary(&self) {
		let search = &self.search;
		println!("Effective configuration:");
		println!("  Endpoint: {}", search.endpoint);
		println!("  Request timeout: {} ms", search.request_timeout.as_millis());
		println!("  Max item length: {}", search.max_item_length);
		println!("  Campus areas: {}", search.campus_areas.join(", "));
		println!(
			"  Default area: {}",
			search.default_area.as_deref().unwrap_or("(none)")
		);
	}
}

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	load_with_env(cli, None)
}

/// Load with `env` standing in for the process environment when given.
fn load_with_env(cli: &CliArgs, env: Option<Map<String, String>>) -> Result<ResolvedConfig> {
	let builder = build_config(cli, env)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve()
}

fn build_config(cli: &CliArgs, env: Option<Map<String, String>>) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		Environment::with_prefix("wildcat")
			.separator("__")
			.try_parsing(true)
			.list_separator(",")
			.with_list_parse_key("form.areas")
			.source(env),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".wildcat.toml"));
		files.push(current_dir.join("wildcat.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(endpoint) = cli.endpoint.clone() {
			self.service.endpoint = Some(endpoint);
		}
		if let Some(value) = cli.timeout_ms {
			self.service.timeout_ms = Some(value);
		}
		if let Some(value) = cli.max_item_length {
			self.form.max_item_length = Some(value);
		}
		if let Some(areas) = &cli.areas {
			self.form.areas = Some(areas.clone());
		}
		if let Some(area) = cli.default_area.clone() {
			self.form.default_area = Some(area);
		}
	}

	fn resolve(self) -> Result<ResolvedConfig> {
		let mut search = SearchConfig::default();

		if let Some(endpoint) = self.service.endpoint {
			let endpoint = endpoint.trim().to_string();
			parse_endpoint(&endpoint)?;
			search.endpoint = endpoint;
		}
		if let Some(timeout) = self.service.timeout_ms {
			ensure!(timeout > 0, "request timeout must be greater than zero");
			search.request_timeout = Duration::from_millis(timeout);
		}
		if let Some(max) = self.form.max_item_length {
			ensure!(max > 0, "max item length must be greater than zero");
			search.max_item_length = max;
		}

		let areas_overridden = self.form.areas.is_some();
		if let Some(areas) = self.form.areas {
			let areas = sanitize_areas(areas);
			ensure!(!areas.is_empty(), "at least one campus area must be configured");
			search.campus_areas = areas;
		}

		search.default_area = match self.form.default_area.map(|area| area.trim().to_string()) {
			Some(area) if area.is_empty() => None,
			Some(area) => {
				if !search.is_known_area(&area) {
					bail!("default area '{area}' is not one of the configured campus areas");
				}
				Some(area)
			}
			None if areas_overridden && !search.is_known_area(DEFAULT_AREA) => None,
			None => search.default_area,
		};

		Ok(ResolvedConfig { search })
	}
}

fn sanitize_areas(values: Vec<String>) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut cleaned = Vec::new();
	for value in values {
		let normalized = value.trim().to_string();
		if normalized.is_empty() {
			continue;
		}
		if seen.insert(normalized.clone()) {
			cleaned.push(normalized);
		}
	}
	cleaned
}
