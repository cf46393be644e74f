//! Transport seam between the workflow and the remote lookup service.
//!
//! [`LocationSource`] hides how a query reaches the service so the workflow can
//! be driven by an in-memory source in tests. [`HttpLocationSource`] is the real
//! implementation: one blocking `GET` per query with the configured timeout.

use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderValue};
use serde_json::Value;
use thiserror::Error;

use super::query::SearchQuery;
use crate::config::SearchConfig;

const USER_AGENT: &str = concat!("wildcat/", env!("CARGO_PKG_VERSION"));

/// Failures while fetching or decoding a search response.
#[derive(Debug, Error)]
pub enum FetchError {
	#[error("invalid search endpoint '{endpoint}': {reason}")]
	InvalidEndpoint { endpoint: String, reason: String },
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("request to {url} failed: {source}")]
	Request {
		url: Url,
		#[source]
		source: reqwest::Error,
	},
	#[error("response from {url} is not JSON: {source}")]
	Decode {
		url: Url,
		#[source]
		source: serde_json::Error,
	},
	#[error("response payload is malformed: {0}")]
	MalformedPayload(#[source] serde_json::Error),
	#[cfg(test)]
	#[error("{0}")]
	Other(String),
}

/// Something that can answer a [`SearchQuery`] with a decoded JSON payload.
pub trait LocationSource: Send + Sync {
	fn fetch(&self, query: &SearchQuery) -> Result<Value, FetchError>;
}

/// Build the request URL: the endpoint with `item` and `area` appended as
/// percent-encoded query parameters. Spaces go out as `%20`, never `+`.
pub fn search_url(endpoint: &Url, query: &SearchQuery) -> Url {
	let mut url = endpoint.clone();
	url.set_query(None);
	url.query_pairs_mut()
		.append_pair("item", query.description())
		.append_pair("area", query.area());

	// The form serializer escapes a literal '+' as %2B, so every '+' left is a space.
	let params = url.query().unwrap_or_default().replace('+', "%20");
	let combined = match endpoint.query() {
		Some(existing) if !existing.is_empty() => format!("{existing}&{params}"),
		_ => params,
	};
	url.set_query(Some(&combined));
	url
}

/// Parse and check an endpoint string. Only `http` and `https` are accepted.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, FetchError> {
	let invalid = |reason: String| FetchError::InvalidEndpoint {
		endpoint: endpoint.to_string(),
		reason,
	};
	let url = Url::parse(endpoint.trim()).map_err(|err| invalid(err.to_string()))?;
	match url.scheme() {
		"http" | "https" => Ok(url),
		other => Err(invalid(format!("unsupported scheme '{other}'"))),
	}
}

/// Blocking HTTP implementation of [`LocationSource`].
#[derive(Debug, Clone)]
pub struct HttpLocationSource {
	endpoint: Url,
	client: Client,
}

impl HttpLocationSource {
	pub fn new(config: &SearchConfig) -> Result<Self, FetchError> {
		let endpoint = parse_endpoint(&config.endpoint)?;
		let client = Client::builder()
			.user_agent(USER_AGENT)
			.timeout(config.request_timeout)
			.build()
			.map_err(FetchError::Client)?;
		Ok(Self { endpoint, client })
	}
}

impl LocationSource for HttpLocationSource {
	fn fetch(&self, query: &SearchQuery) -> Result<Value, FetchError> {
		let url = search_url(&self.endpoint, query);
		log::debug!("GET {url}");

		let response = self
			.client
			.get(url.clone())
			.header(ACCEPT, HeaderValue::from_static("application/json"))
			.send()
			.map_err(|source| FetchError::Request {
				url: url.clone(),
				source,
			})?;

		let status = response.status();
		if !status.is_success() {
			// The body still decides the outcome; the status is only recorded.
			log::warn!("search service answered {status} for {url}");
		}

		let body = response.text().map_err(|source| FetchError::Request {
			url: url.clone(),
			source,
		})?;
		serde_json::from_str(&body).map_err(|source| FetchError::Decode { url, source })
	}
}
