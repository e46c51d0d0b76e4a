//! Interactive terminal UI for movie search.
//!
//! [`MovieSearch`] is the public entry point. The remaining submodules split
//! the [`App`] into key routing, search plumbing, rendering and the event
//! loop.

mod actions;
mod builder;
mod modal;
mod render;
mod runtime;
mod search;
mod state;
#[cfg(test)]
mod tests;

pub use builder::MovieSearch;
pub use modal::{ModalAction, ModalSession, ScrollGuard, ScrollLock};
pub use state::{App, DEFAULT_PROMPT, Focus};
