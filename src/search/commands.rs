use cinefind_catalog::{CatalogError, MoviePage, SearchRequest};

/// A fetch issued by the coordinator, tagged so its answer can be matched
/// against the request that is current when it arrives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
	/// Strictly increasing per coordinator.
	pub id: u64,
	pub request: SearchRequest,
}

/// Resolution of a [`FetchTicket`] as reported by the fetch worker.
#[derive(Debug)]
pub struct FetchOutcome {
	pub ticket: FetchTicket,
	pub result: Result<MoviePage, CatalogError>,
}

/// Commands understood by the background fetch worker.
#[derive(Debug)]
pub(crate) enum FetchCommand {
	/// Run the ticket's search and report back, however late.
	Fetch(FetchTicket),
	/// Stop accepting work and tear the runtime down.
	Shutdown,
}
