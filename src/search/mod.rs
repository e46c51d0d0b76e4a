//! Search state and background fetching.

mod commands;
mod coordinator;
mod worker;

pub use commands::{FetchOutcome, FetchTicket};
pub use coordinator::{Notice, Resolution, SearchCoordinator, SearchStatus, ValidationError};
pub use worker::{FetchRuntime, spawn};
