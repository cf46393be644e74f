use serde::Serialize;
use thiserror::Error;

use crate::config::SearchConfig;

/// Prompt shown when either form field is blank.
pub const MISSING_FIELDS_PROMPT: &str = "Please fill in both fields before searching.";

/// Reasons a submission is rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("both the item description and the campus area are required")]
	MissingField,
	#[error("item description is {length} characters, the limit is {max}")]
	DescriptionTooLong { length: usize, max: usize },
	#[error("'{0}' is not a known campus area")]
	UnknownArea(String),
}

impl ValidationError {
	/// User-facing prompt text for this failure.
	#[must_use]
	pub fn prompt(&self) -> String {
		match self {
			Self::MissingField => MISSING_FIELDS_PROMPT.to_string(),
			Self::DescriptionTooLong { max, .. } => {
				format!("Please shorten the item description to {max} characters or fewer.")
			}
			Self::UnknownArea(_) => "Please pick one of the listed campus areas.".to_string(),
		}
	}
}

/// A validated description/area pair, built fresh for every submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
	description: String,
	area: String,
}

impl SearchQuery {
	/// Trim and validate raw form input against `config`.
	pub fn new(description: &str, area: &str, config: &SearchConfig) -> Result<Self, ValidationError> {
		let description = description.trim();
		let area = area.trim();
		if description.is_empty() || area.is_empty() {
			return Err(ValidationError::MissingField);
		}

		let length = description.chars().count();
		if length > config.max_item_length {
			return Err(ValidationError::DescriptionTooLong {
				length,
				max: config.max_item_length,
			});
		}
		if !config.is_known_area(area) {
			return Err(ValidationError::UnknownArea(area.to_string()));
		}

		Ok(Self {
			description: description.to_string(),
			area: area.to_string(),
		})
	}

	#[must_use]
	pub fn description(&self) -> &str {
		&self.description
	}

	#[must_use]
	pub fn area(&self) -> &str {
		&self.area
	}
}
