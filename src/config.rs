use std::time::Duration;

/// Endpoint used when no configuration overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/lost-found";
pub const DEFAULT_MAX_ITEM_LENGTH: usize = 100;
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const DEFAULT_AREA: &str = "Central Campus";
pub const DEFAULT_CAMPUS_AREAS: [&str; 5] = [
	"Central Campus",
	"Library Area",
	"South Campus",
	"East Campus",
	"North Campus",
];

/// Externally supplied constants consumed by the search workflow.
///
/// The binary builds this from layered settings; embedders and tests can use
/// [`SearchConfig::default`] and adjust individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
	pub endpoint: String,
	pub max_item_length: usize,
	pub campus_areas: Vec<String>,
	pub default_area: Option<String>,
	pub request_timeout: Duration,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			max_item_length: DEFAULT_MAX_ITEM_LENGTH,
			campus_areas: DEFAULT_CAMPUS_AREAS
				.iter()
				.map(|area| area.to_string())
				.collect(),
			default_area: Some(DEFAULT_AREA.to_string()),
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
		}
	}
}

impl SearchConfig {
	/// Replace the endpoint, keeping every other value.
	#[must_use]
	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	#[must_use]
	pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	/// Whether `area` is one of the configured campus areas.
	#[must_use]
	pub fn is_known_area(&self, area: &str) -> bool {
		self.campus_areas.iter().any(|known| known == area)
	}

	/// Index of the default area within [`SearchConfig::campus_areas`].
	#[must_use]
	pub fn default_area_index(&self) -> Option<usize> {
		let default = self.default_area.as_deref()?;
		self.campus_areas.iter().position(|area| area == default)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_config_points_at_local_service() {
		let config = SearchConfig::default();
		assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
		assert_eq!(config.campus_areas.len(), 5);
		assert_eq!(config.default_area_index(), Some(0));
		assert_eq!(config.request_timeout, Duration::from_secs(10));
	}

	#[test]
	fn known_area_lookup_is_exact() {
		let config = SearchConfig::default();
		assert!(config.is_known_area("Library Area"));
		assert!(!config.is_known_area("library area"));
		assert!(!config.is_known_area(""));
	}

	#[test]
	fn default_area_outside_list_has_no_index() {
		let config = SearchConfig {
			default_area: Some("Moon Base".into()),
			..SearchConfig::default()
		};
		assert_eq!(config.default_area_index(), None);
	}
}
