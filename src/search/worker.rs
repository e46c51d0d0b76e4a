use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use cinefind_catalog::MovieSource;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

use super::commands::{FetchCommand, FetchOutcome, FetchTicket};

const WORKER_THREADS: usize = 2;

/// Handle to the background thread that runs fetch tickets.
///
/// Tickets run concurrently and finish in whatever order the network allows.
/// Outcomes queue up until the UI drains them with [`FetchRuntime::try_recv`].
pub struct FetchRuntime {
	commands: UnboundedSender<FetchCommand>,
	outcomes: Receiver<FetchOutcome>,
	thread: Option<JoinHandle<()>>,
}

/// Start the fetch worker for `source`.
///
/// The async runtime is built before the thread starts so that a failure is
/// reported to the caller instead of dying silently in the background.
pub fn spawn(source: Arc<dyn MovieSource>) -> io::Result<FetchRuntime> {
	let runtime = tokio::runtime::Builder::new_multi_thread()
		.worker_threads(WORKER_THREADS)
		.thread_name("cinefind-fetch")
		.enable_all()
		.build()?;
	let (command_tx, command_rx) = unbounded_channel();
	let (outcome_tx, outcome_rx) = mpsc::channel();

	let thread = thread::Builder::new()
		.name("cinefind-fetch-loop".into())
		.spawn(move || {
			runtime.block_on(worker_loop(source, command_rx, outcome_tx));
			tracing::debug!("fetch worker stopped");
		})?;

	Ok(FetchRuntime {
		commands: command_tx,
		outcomes: outcome_rx,
		thread: Some(thread),
	})
}

async fn worker_loop(
	source: Arc<dyn MovieSource>,
	mut commands: UnboundedReceiver<FetchCommand>,
	outcomes: Sender<FetchOutcome>,
) {
	while let Some(command) = commands.recv().await {
		match command {
			FetchCommand::Fetch(ticket) => {
				let source = Arc::clone(&source);
				let outcomes = outcomes.clone();
				tokio::spawn(async move {
					let result = source.search(&ticket.request).await;
					// The receiver only disappears during shutdown.
					let _ = outcomes.send(FetchOutcome { ticket, result });
				});
			}
			FetchCommand::Shutdown => break,
		}
	}
}

impl FetchRuntime {
	/// Queue `ticket`. Returns `false` when the worker is gone.
	pub fn dispatch(&self, ticket: FetchTicket) -> bool {
		let id = ticket.id;
		match self.commands.send(FetchCommand::Fetch(ticket)) {
			Ok(()) => true,
			Err(_) => {
				tracing::error!(ticket = id, "fetch worker is not running");
				false
			}
		}
	}

	/// Next finished fetch, if one is waiting.
	pub fn try_recv(&self) -> Option<FetchOutcome> {
		match self.outcomes.try_recv() {
			Ok(outcome) => Some(outcome),
			Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
		}
	}

	/// Stop accepting tickets and wait for the worker thread to exit.
	/// In-flight fetches are abandoned.
	pub fn shutdown(&mut self) {
		let _ = self.commands.send(FetchCommand::Shutdown);
		if let Some(thread) = self.thread.take()
			&& thread.join().is_err()
		{
			tracing::error!("fetch worker panicked");
		}
	}
}

impl Drop for FetchRuntime {
	fn drop(&mut self) {
		self.shutdown();
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use async_trait::async_trait;
	use cinefind_catalog::{CatalogError, MoviePage, SearchRequest};

	use super::*;

	/// Answers instantly except for the query `slow`.
	struct DelayedSource;

	#[async_trait]
	impl MovieSource for DelayedSource {
		async fn search(&self, request: &SearchRequest) -> Result<MoviePage, CatalogError> {
			if request.query.as_str() == "slow" {
				tokio::time::sleep(Duration::from_millis(300)).await;
			}
			if request.query.as_str() == "broken" {
				return Err(CatalogError::Status {
					status: 503,
					message: None,
				});
			}
			Ok(MoviePage {
				page: request.page.get(),
				results: Vec::new(),
				total_pages: 0,
				total_results: 0,
			})
		}
	}

	fn ticket(id: u64, query: &str) -> FetchTicket {
		FetchTicket {
			id,
			request: SearchRequest::new(query, 1).expect("valid request"),
		}
	}

	fn next(runtime: &FetchRuntime) -> FetchOutcome {
		runtime
			.outcomes
			.recv_timeout(Duration::from_secs(5))
			.expect("outcome within timeout")
	}

	#[test]
	fn outcomes_arrive_in_completion_order() {
		let runtime = spawn(Arc::new(DelayedSource)).expect("spawn worker");
		assert!(runtime.dispatch(ticket(1, "slow")));
		assert!(runtime.dispatch(ticket(2, "fast")));

		let first = next(&runtime);
		let second = next(&runtime);
		assert_eq!(first.ticket.id, 2);
		assert_eq!(second.ticket.id, 1);
		assert!(runtime.try_recv().is_none());
	}

	#[test]
	fn failures_are_delivered_as_outcomes() {
		let runtime = spawn(Arc::new(DelayedSource)).expect("spawn worker");
		runtime.dispatch(ticket(7, "broken"));

		let outcome = next(&runtime);
		assert_eq!(outcome.ticket.id, 7);
		assert!(matches!(
			outcome.result,
			Err(CatalogError::Status { status: 503, .. })
		));
	}

	#[test]
	fn dispatch_fails_after_shutdown() {
		let mut runtime = spawn(Arc::new(DelayedSource)).expect("spawn worker");
		runtime.shutdown();
		assert!(!runtime.dispatch(ticket(1, "late")));
		assert!(runtime.try_recv().is_none());
	}
}
