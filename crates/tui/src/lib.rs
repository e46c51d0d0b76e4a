//! Terminal widgets for `cinefind`.
//!
//! Everything here is a pure renderer: widgets borrow the state they draw and
//! never talk to the network. The application crate owns the search state and
//! feeds it in each frame.

pub mod components;
pub mod input;
pub mod style;

pub use crate::input::QueryInput;
pub use crate::style::{Theme, builtin_themes, default_theme};
