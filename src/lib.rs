//! Terminal movie search over the TMDB catalogue.
//!
//! The crate root re-exports the pieces an embedder needs: the
//! [`MovieSearch`] builder, the [`SearchCoordinator`] state machine and the
//! catalogue and widget crates it is built on.

pub mod app_dirs;
pub mod logging;
mod outcome;
pub mod search;
pub mod ui;

pub use cinefind_catalog as catalog;
pub use cinefind_tui as tui;
pub use outcome::SearchOutcome;
pub use search::{Notice, SearchCoordinator, SearchStatus, ValidationError};
pub use ui::{App, MovieSearch};
