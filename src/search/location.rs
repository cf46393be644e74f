use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A candidate lost-and-found location returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationResult {
	pub name: String,
	#[serde(default)]
	pub area: String,
	#[serde(default)]
	pub link: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
}

impl LocationResult {
	pub fn new(name: impl Into<String>, area: impl Into<String>, link: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			area: area.into(),
			link: link.into(),
			note: None,
		}
	}

	#[must_use]
	pub fn with_note(mut self, note: impl Into<String>) -> Self {
		self.note = Some(note.into());
		self
	}

	/// The note, if present and not blank.
	pub fn visible_note(&self) -> Option<&str> {
		self.note.as_deref().map(str::trim).filter(|note| !note.is_empty())
	}
}

/// Interpret a decoded response body.
///
/// Arrays are decoded element by element in server order. Any other JSON
/// value carries no locations and yields an empty list.
pub fn locations_from_payload(payload: Value) -> Result<Vec<LocationResult>, serde_json::Error> {
	match payload {
		Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
		_ => Ok(Vec::new()),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn array_payload_keeps_server_order() {
		let payload = json!([
			{"name": "Main Library Ask Us", "area": "Library Area", "link": "https://library.arizona.edu"},
			{"name": "UAPD Lost & Found", "area": "Central Campus", "link": "https://uapd.arizona.edu/lost-and-found"},
		]);
		let locations = locations_from_payload(payload).expect("decodes");
		let names: Vec<_> = locations.iter().map(|loc| loc.name.as_str()).collect();
		assert_eq!(names, ["Main Library Ask Us", "UAPD Lost & Found"]);
		assert!(locations.iter().all(|loc| loc.note.is_none()));
	}

	#[test]
	fn note_is_optional() {
		let payload = json!([{
			"name": "Check UAPD Lost & Found",
			"link": "https://uapd.arizona.edu/lost-and-found",
			"area": "Central Campus",
			"note": "No exact matches found, but UAPD handles all types of lost items."
		}]);
		let locations = locations_from_payload(payload).expect("decodes");
		assert_eq!(
			locations[0].visible_note(),
			Some("No exact matches found, but UAPD handles all types of lost items.")
		);
	}

	#[test]
	fn non_array_payloads_have_no_locations() {
		for payload in [json!({"error": "Missing \"item\" or \"area\"."}), json!(null), json!("ok"), json!(3)] {
			assert!(locations_from_payload(payload).expect("not an error").is_empty());
		}
	}

	#[test]
	fn missing_area_and_link_default_to_empty() {
		let locations =
			locations_from_payload(json!([{"name": "Error processing request"}])).expect("decodes");
		assert_eq!(locations[0], LocationResult::new("Error processing request", "", ""));
	}

	#[test]
	fn malformed_elements_fail_the_payload() {
		assert!(locations_from_payload(json!([{"name": "ok"}, 42])).is_err());
		assert!(locations_from_payload(json!([{"area": "no name"}])).is_err());
	}

	#[test]
	fn blank_note_is_hidden() {
		let location = LocationResult::new("Desk", "Library Area", "https://x/y").with_note("  ");
		assert_eq!(location.visible_note(), None);
	}
}
