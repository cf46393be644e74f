use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

use super::query::SearchQuery;
use super::source::LocationSource;
use super::state::UiState;
use super::workflow::SearchWorkflow;

/// A finished search delivered back to the UI thread.
#[derive(Debug, Clone)]
pub struct SearchResponse {
	pub id: u64,
	pub query: SearchQuery,
	pub state: UiState,
	/// A newer search was submitted before this one resolved.
	pub superseded: bool,
}

/// Runs searches on worker threads and hands their results back over a channel.
///
/// Every dispatch gets its own thread. Nothing is cancelled or de-duplicated:
/// responses are handed out in the order they resolve, so the last one to
/// resolve is what ends up displayed.
pub struct SearchRuntime<S> {
	workflow: Arc<SearchWorkflow<S>>,
	tx: Sender<SearchResponse>,
	rx: Receiver<SearchResponse>,
	next_id: u64,
	in_flight: usize,
}

impl<S> SearchRuntime<S>
where
	S: LocationSource + 'static,
{
	pub fn new(workflow: SearchWorkflow<S>) -> Self {
		let (tx, rx) = mpsc::channel();
		Self {
			workflow: Arc::new(workflow),
			tx,
			rx,
			next_id: 0,
			in_flight: 0,
		}
	}

	#[must_use]
	pub fn workflow(&self) -> &SearchWorkflow<S> {
		&self.workflow
	}

	/// Start resolving `query` in the background and return its id.
	pub fn dispatch(&mut self, query: SearchQuery) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		let id = self.next_id;
		if self.in_flight > 0 {
			log::warn!(
				"search #{id} submitted while {} earlier search(es) are unresolved",
				self.in_flight
			);
		}
		self.in_flight += 1;

		let workflow = Arc::clone(&self.workflow);
		let tx = self.tx.clone();
		thread::spawn(move || {
			let state = workflow.resolve(&query);
			let _ = tx.send(SearchResponse {
				id,
				query,
				state,
				superseded: false,
			});
		});
		id
	}

	/// Take the next resolved search, if any.
	pub fn try_recv(&mut self) -> Option<SearchResponse> {
		match self.rx.try_recv() {
			Ok(mut response) => {
				self.in_flight = self.in_flight.saturating_sub(1);
				response.superseded = response.id < self.next_id;
				if response.superseded {
					log::warn!(
						"search #{} resolved after newer search #{} was submitted and replaces the display",
						response.id,
						self.next_id
					);
				}
				Some(response)
			}
			Err(TryRecvError::Empty) => None,
			// The runtime owns a sender, so the channel cannot disconnect.
			Err(TryRecvError::Disconnected) => None,
		}
	}

	#[must_use]
	pub fn is_in_flight(&self) -> bool {
		self.in_flight > 0
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;
	use std::time::{Duration, Instant};

	use serde_json::{Value, json};

	use super::*;
	use crate::config::SearchConfig;
	use crate::search::source::FetchError;

	struct InstantSource(Value);

	impl LocationSource for InstantSource {
		fn fetch(&self, _query: &SearchQuery) -> Result<Value, FetchError> {
			Ok(self.0.clone())
		}
	}

	/// Blocks each fetch until the test releases it, answering with the item text.
	struct GatedSource {
		gates: Mutex<Vec<(String, Receiver<()>)>>,
	}

	impl LocationSource for GatedSource {
		fn fetch(&self, query: &SearchQuery) -> Result<Value, FetchError> {
			let gate = {
				let mut gates = self.gates.lock().unwrap();
				let index = gates
					.iter()
					.position(|(item, _)| item == query.description())
					.expect("gate registered");
				gates.remove(index).1
			};
			let _ = gate.recv();
			Ok(json!([{"name": query.description(), "area": query.area(), "link": "https://x/y"}]))
		}
	}

	fn wait_for<S: LocationSource + 'static>(runtime: &mut SearchRuntime<S>) -> SearchResponse {
		let deadline = Instant::now() + Duration::from_secs(5);
		loop {
			if let Some(response) = runtime.try_recv() {
				return response;
			}
			assert!(Instant::now() < deadline, "search did not resolve in time");
			thread::sleep(Duration::from_millis(5));
		}
	}

	fn query(item: &str) -> SearchQuery {
		SearchQuery::new(item, "Library Area", &SearchConfig::default()).unwrap()
	}

	#[test]
	fn dispatched_search_is_delivered() {
		let workflow = SearchWorkflow::new(SearchConfig::default(), InstantSource(json!([])));
		let mut runtime = SearchRuntime::new(workflow);

		let id = runtime.dispatch(query("wallet"));
		assert!(runtime.is_in_flight());

		let response = wait_for(&mut runtime);
		assert_eq!(response.id, id);
		assert_eq!(response.state, UiState::Empty);
		assert!(!response.superseded);
		assert!(!runtime.is_in_flight());
		assert!(runtime.try_recv().is_none());
	}

	#[test]
	fn overlapping_searches_arrive_in_resolution_order() {
		let (first_tx, first_rx) = mpsc::channel();
		let (second_tx, second_rx) = mpsc::channel();
		let source = GatedSource {
			gates: Mutex::new(vec![("keys".into(), first_rx), ("wallet".into(), second_rx)]),
		};
		let mut runtime = SearchRuntime::new(SearchWorkflow::new(SearchConfig::default(), source));

		let first = runtime.dispatch(query("keys"));
		let second = runtime.dispatch(query("wallet"));

		second_tx.send(()).unwrap();
		let newer = wait_for(&mut runtime);
		assert_eq!(newer.id, second);
		assert!(!newer.superseded);

		first_tx.send(()).unwrap();
		let older = wait_for(&mut runtime);
		assert_eq!(older.id, first);
		assert_eq!(older.state.locations()[0].name, "keys");
		assert!(older.superseded);
		assert!(!runtime.is_in_flight());
	}

	#[test]
	fn response_is_superseded_by_a_newer_submission_even_if_it_arrives_first() {
		let (first_tx, first_rx) = mpsc::channel();
		let (second_tx, second_rx) = mpsc::channel();
		let source = GatedSource {
			gates: Mutex::new(vec![("keys".into(), first_rx), ("wallet".into(), second_rx)]),
		};
		let mut runtime = SearchRuntime::new(SearchWorkflow::new(SearchConfig::default(), source));

		let first = runtime.dispatch(query("keys"));
		runtime.dispatch(query("wallet"));

		first_tx.send(()).unwrap();
		let older = wait_for(&mut runtime);
		assert_eq!(older.id, first);
		assert!(older.superseded);

		second_tx.send(()).unwrap();
		let newer = wait_for(&mut runtime);
		assert!(!newer.superseded);
	}
}
