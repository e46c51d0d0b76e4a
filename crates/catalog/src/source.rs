use async_trait::async_trait;

use crate::error::CatalogError;
use crate::movie::MoviePage;
use crate::request::SearchRequest;

/// Anything that can answer a paginated movie search.
///
/// Every call is an independent request: implementations must not cache,
/// retry, or reorder results on behalf of the caller.
#[async_trait]
pub trait MovieSource: Send + Sync {
	async fn search(&self, request: &SearchRequest) -> Result<MoviePage, CatalogError>;
}
