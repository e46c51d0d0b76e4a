//! The detail overlay's modal session and the grid scroll lock it holds.

use std::cell::Cell;
use std::rc::Rc;

use cinefind_catalog::Movie;
use ratatui::crossterm::event::{KeyCode, KeyEvent};

/// Shared flag telling the grid whether it may scroll.
///
/// Any number of [`ScrollGuard`]s can be outstanding; scrolling resumes once
/// the last one is dropped.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
	holders: Rc<Cell<usize>>,
}

impl ScrollLock {
	#[must_use]
	pub fn acquire(&self) -> ScrollGuard {
		self.holders.set(self.holders.get() + 1);
		ScrollGuard {
			holders: Rc::clone(&self.holders),
		}
	}

	#[must_use]
	pub fn is_locked(&self) -> bool {
		self.holders.get() > 0
	}
}

/// Keeps the grid frozen until dropped.
#[derive(Debug)]
pub struct ScrollGuard {
	holders: Rc<Cell<usize>>,
}

impl Drop for ScrollGuard {
	fn drop(&mut self) {
		self.holders.set(self.holders.get().saturating_sub(1));
	}
}

/// What a key press means while the overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
	Close,
	Accept,
	/// Swallowed so it never reaches the widgets underneath.
	Ignore,
}

/// An open detail overlay.
///
/// The session exists exactly as long as the overlay is shown. It owns a
/// scroll guard, so every way of tearing it down (closing, accepting, the
/// app exiting) unlocks the grid.
#[derive(Debug)]
pub struct ModalSession {
	movie_id: u64,
	_scroll: ScrollGuard,
}

impl ModalSession {
	#[must_use]
	pub fn open(movie: &Movie, lock: &ScrollLock) -> Self {
		tracing::debug!(movie = movie.id, "detail overlay opened");
		Self {
			movie_id: movie.id,
			_scroll: lock.acquire(),
		}
	}

	#[must_use]
	pub fn movie_id(&self) -> u64 {
		self.movie_id
	}

	/// Route a key press. Every key is captured.
	#[must_use]
	pub fn route(&self, key: KeyEvent) -> ModalAction {
		match key.code {
			KeyCode::Esc | KeyCode::Char('q') => ModalAction::Close,
			KeyCode::Enter => ModalAction::Accept,
			_ => ModalAction::Ignore,
		}
	}
}

impl Drop for ModalSession {
	fn drop(&mut self) {
		tracing::debug!(movie = self.movie_id, "detail overlay closed");
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyModifiers;

	use super::*;

	fn movie(id: u64) -> Movie {
		Movie {
			id,
			title: "Solaris".into(),
			poster_path: None,
			overview: String::new(),
			release_date: String::new(),
			vote_average: None,
			backdrop_path: None,
		}
	}

	fn key(code: KeyCode) -> KeyEvent {
		KeyEvent::new(code, KeyModifiers::NONE)
	}

	#[test]
	fn lock_follows_outstanding_guards() {
		let lock = ScrollLock::default();
		assert!(!lock.is_locked());

		let first = lock.acquire();
		let second = lock.clone().acquire();
		assert!(lock.is_locked());

		drop(first);
		assert!(lock.is_locked());
		drop(second);
		assert!(!lock.is_locked());
	}

	#[test]
	fn session_holds_the_lock_until_dropped() {
		let lock = ScrollLock::default();
		let session = ModalSession::open(&movie(3), &lock);
		assert_eq!(session.movie_id(), 3);
		assert!(lock.is_locked());

		drop(session);
		assert!(!lock.is_locked());
	}

	#[test]
	fn lock_is_released_when_unwinding() {
		let lock = ScrollLock::default();
		let thread_lock = lock.clone();
		let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
			let _session = ModalSession::open(&movie(1), &thread_lock);
			panic!("render failed");
		}));

		assert!(result.is_err());
		assert!(!lock.is_locked());
	}

	#[test]
	fn routes_close_accept_and_swallows_the_rest() {
		let lock = ScrollLock::default();
		let session = ModalSession::open(&movie(1), &lock);

		assert_eq!(session.route(key(KeyCode::Esc)), ModalAction::Close);
		assert_eq!(session.route(key(KeyCode::Char('q'))), ModalAction::Close);
		assert_eq!(session.route(key(KeyCode::Enter)), ModalAction::Accept);
		assert_eq!(session.route(key(KeyCode::Down)), ModalAction::Ignore);
		assert_eq!(session.route(key(KeyCode::Char(']'))), ModalAction::Ignore);
	}
}
