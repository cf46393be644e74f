use crate::config::SearchConfig;

/// Campus-area picker: a blank placeholder followed by the configured areas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaSelector {
	options: Vec<String>,
	selected: Option<usize>,
}

impl AreaSelector {
	/// Build from `config`, starting on the configured default area if it is
	/// one of the options.
	#[must_use]
	pub fn from_config(config: &SearchConfig) -> Self {
		Self {
			options: config.campus_areas.clone(),
			selected: config.default_area_index(),
		}
	}

	/// Currently chosen area. `None` while the placeholder is shown.
	#[must_use]
	pub fn value(&self) -> Option<&str> {
		self.selected
			.and_then(|index| self.options.get(index))
			.map(String::as_str)
	}

	#[must_use]
	pub fn has_value(&self) -> bool {
		self.value().is_some()
	}

	/// Select `area` if it is one of the options. Returns whether it was found.
	pub fn select(&mut self, area: &str) -> bool {
		match self.options.iter().position(|option| option == area) {
			Some(index) => {
				self.selected = Some(index);
				true
			}
			None => false,
		}
	}

	pub fn clear(&mut self) {
		self.selected = None;
	}

	/// Step forward through placeholder, areas..., placeholder.
	pub fn next(&mut self) {
		self.selected = match self.selected {
			None if !self.options.is_empty() => Some(0),
			Some(index) if index + 1 < self.options.len() => Some(index + 1),
			_ => None,
		};
	}

	pub fn previous(&mut self) {
		self.selected = match self.selected {
			None => self.options.len().checked_sub(1),
			Some(0) => None,
			Some(index) => Some(index - 1),
		};
	}
}
