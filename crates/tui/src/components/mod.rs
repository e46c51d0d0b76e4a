//! Widgets composing the cinefind screen.

/// Movie detail popup.
pub mod detail;
/// Result card grid and its navigation state.
pub mod grid;
pub mod pagination;
/// Idle, loading, error and empty messages.
pub mod status;
pub mod toast;

pub use detail::{DetailOverlay, OVERLAY_PERCENT, centered_rect, overlay_area};
pub use grid::{GridState, MovieGrid, truncate_to_width};
pub use pagination::{PageSlot, Pagination, page_window};
pub use status::{BannerKind, StatusBanner};
pub use toast::{ToastStack, Toasts};
