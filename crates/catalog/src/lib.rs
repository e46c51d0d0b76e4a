//! Movie catalogue types and the TMDB search gateway used by `cinefind`.
//!
//! The crate is the only network boundary of the application. It exposes the
//! [`MovieSource`] seam so the terminal front-end can be driven by the real
//! [`TmdbClient`] or by an in-memory source in tests.

pub mod error;
pub mod movie;
pub mod request;
pub mod source;
pub mod tmdb;

pub use error::{CatalogError, RequestError};
pub use movie::{Movie, MoviePage};
pub use request::{Page, Query, SearchRequest};
pub use source::MovieSource;
pub use tmdb::{DEFAULT_BASE_URL, TmdbClient, TmdbConfig};
