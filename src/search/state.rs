use serde::Serialize;

use super::location::LocationResult;

pub const EMPTY_ADVISORY: &str =
	"No specific locations found. Please try a different description or check with UAPD Lost & Found.";
pub const ERROR_ADVISORY: &str = "An error occurred while searching. Please try again later.";

/// What the results region currently shows. Exactly one state is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "locations", rename_all = "snake_case")]
pub enum UiState {
	#[default]
	Idle,
	Loading,
	Results(Vec<LocationResult>),
	Empty,
	Error,
}

impl UiState {
	/// Map a decoded location list onto the terminal display state.
	#[must_use]
	pub fn from_locations(locations: Vec<LocationResult>) -> Self {
		if locations.is_empty() {
			Self::Empty
		} else {
			Self::Results(locations)
		}
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Loading)
	}

	/// Locations to render as cards. Empty for every state except `Results`.
	#[must_use]
	pub fn locations(&self) -> &[LocationResult] {
		match self {
			Self::Results(locations) => locations,
			_ => &[],
		}
	}

	/// Advisory text for the `Empty` and `Error` states.
	#[must_use]
	pub fn advisory(&self) -> Option<&'static str> {
		match self {
			Self::Empty => Some(EMPTY_ADVISORY),
			Self::Error => Some(ERROR_ADVISORY),
			_ => None,
		}
	}

	#[must_use]
	pub fn label(&self) -> &'static str {
		match self {
			Self::Idle => "idle",
			Self::Loading => "loading",
			Self::Results(_) => "results",
			Self::Empty => "empty",
			Self::Error => "error",
		}
	}
}
