use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use cinefind_catalog::{CatalogError, Movie, MoviePage, MovieSource, SearchRequest};
use cinefind_tui::components::status::{EMPTY_MESSAGE, ERROR_MESSAGE};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, Focus, MovieSearch};
use crate::search::SearchStatus;

const TOTAL_PAGES: u32 = 3;

/// `batman` has three pages of two movies, `zzzzz` finds nothing and
/// `broken` fails.
#[derive(Default)]
struct ScriptedSource {
	calls: AtomicUsize,
}

#[async_trait]
impl MovieSource for ScriptedSource {
	async fn search(&self, request: &SearchRequest) -> Result<MoviePage, CatalogError> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		let page = request.page.get();
		match request.query.as_str() {
			"broken" => Err(CatalogError::Status {
				status: 500,
				message: None,
			}),
			"zzzzz" => Ok(MoviePage {
				page,
				results: Vec::new(),
				total_pages: 0,
				total_results: 0,
			}),
			query => Ok(MoviePage {
				page,
				results: (1..=2)
					.map(|i| Movie {
						id: u64::from(page) * 10 + i,
						title: format!("{query} p{page} #{i}"),
						poster_path: None,
						overview: "A caped crusader.".into(),
						release_date: "1989-06-23".into(),
						vote_average: Some(7.5),
						backdrop_path: None,
					})
					.collect(),
				total_pages: TOTAL_PAGES,
				total_results: 2 * TOTAL_PAGES,
			}),
		}
	}
}

fn app_with(source: &Arc<ScriptedSource>, initial_query: Option<&str>) -> App<'static> {
	let mut search = MovieSearch::new(Arc::clone(source) as Arc<dyn MovieSource>);
	if let Some(query) = initial_query {
		search = search.with_initial_query(query);
	}
	let mut app = search.build().expect("app builds");
	settle(&mut app);
	app
}

/// Pump outcomes until nothing is pending.
fn settle(app: &mut App<'_>) {
	let deadline = Instant::now() + Duration::from_secs(5);
	while app.coordinator().pending().is_some() {
		assert!(Instant::now() < deadline, "fetch did not finish in time");
		app.pump_search_results();
		thread::sleep(Duration::from_millis(5));
	}
}

fn press(app: &mut App<'_>, code: KeyCode) -> Option<crate::SearchOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
		.expect("key handled")
}

fn type_text(app: &mut App<'_>, text: &str) {
	for c in text.chars() {
		press(app, KeyCode::Char(c));
	}
}

fn scroll_down(app: &mut App<'_>) {
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::ScrollDown,
		column: 0,
		row: 0,
		modifiers: KeyModifiers::NONE,
	});
}

fn click(app: &mut App<'_>, column: u16, row: u16) {
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	});
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal.backend().to_string()
}

#[test]
fn initial_query_loads_the_first_page() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, Some("batman"));

	assert_eq!(app.coordinator().status(), SearchStatus::Loaded);
	assert_eq!(app.coordinator().page().get(), 1);
	assert_eq!(app.coordinator().movies().len(), 2);

	let view = render(&mut app);
	assert!(view.contains("batman p1 #1"));
	assert!(view.contains("batman p1 #2"));
	assert!(view.contains("[1]"));
	assert!(view.contains("Movie search"));
}

#[test]
fn before_searching_the_idle_hint_is_shown() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, None);

	let view = render(&mut app);
	assert!(view.contains("Type a movie title"));
	assert!(!view.contains("[1]"));
}

#[test]
fn blank_submission_raises_a_toast_without_fetching() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, None);

	type_text(&mut app, "   ");
	press(&mut app, KeyCode::Enter);

	assert_eq!(source.calls.load(Ordering::SeqCst), 0);
	assert_eq!(app.coordinator().status(), SearchStatus::Idle);
	assert!(render(&mut app).contains("Please enter your search query."));
}

#[test]
fn submitting_clears_the_input_and_same_query_does_not_refetch() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, None);

	type_text(&mut app, "batman");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.input.text(), "");
	settle(&mut app);
	assert_eq!(source.calls.load(Ordering::SeqCst), 1);

	type_text(&mut app, " batman ");
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.input.text(), "");
	assert!(app.coordinator().pending().is_none());
	assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn empty_results_show_message_and_toast() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, Some("zzzzz"));

	assert_eq!(app.coordinator().status(), SearchStatus::Empty);
	let view = render(&mut app);
	assert!(view.contains(EMPTY_MESSAGE));
	assert!(view.contains("No movies found for your request."));
}

#[test]
fn failures_show_the_generic_error() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, Some("broken"));

	assert_eq!(app.coordinator().status(), SearchStatus::Failed);
	assert!(render(&mut app).contains(ERROR_MESSAGE));
}

#[test]
fn paging_from_the_grid_keeps_the_query() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, Some("batman"));

	press(&mut app, KeyCode::Tab);
	assert_eq!(app.focus(), Focus::Grid);

	press(&mut app, KeyCode::Char(']'));
	assert!(app.coordinator().is_loading());
	// Page one stays on screen until page two arrives.
	assert!(render(&mut app).contains("batman p1 #1"));
	settle(&mut app);
	assert_eq!(app.coordinator().page().get(), 2);
	assert!(render(&mut app).contains("batman p2 #1"));

	press(&mut app, KeyCode::PageDown);
	settle(&mut app);
	assert_eq!(app.coordinator().page().get(), 3);

	// Past the last page nothing happens.
	press(&mut app, KeyCode::Char(']'));
	assert!(app.coordinator().pending().is_none());
	assert_eq!(source.calls.load(Ordering::SeqCst), 3);

	press(&mut app, KeyCode::Char('['));
	settle(&mut app);
	assert_eq!(app.coordinator().page().get(), 2);
	assert_eq!(app.coordinator().query().map(|q| q.as_str()), Some("batman"));

	press(&mut app, KeyCode::Esc);
	assert_eq!(app.focus(), Focus::Input);
}

#[test]
fn overlay_captures_keys_and_locks_scrolling() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, Some("batman"));
	press(&mut app, KeyCode::Tab);

	press(&mut app, KeyCode::Enter);
	assert!(app.overlay_open());
	assert!(app.scroll_lock.is_locked());
	assert_eq!(app.coordinator().selection().map(|m| m.id), Some(11));

	press(&mut app, KeyCode::Down);
	press(&mut app, KeyCode::Char(']'));
	scroll_down(&mut app);
	assert_eq!(app.grid.selected(), Some(0));
	assert!(app.coordinator().pending().is_none());

	press(&mut app, KeyCode::Char('q'));
	assert!(!app.overlay_open());
	assert!(!app.scroll_lock.is_locked());
	assert!(app.coordinator().selection().is_none());

	scroll_down(&mut app);
	assert_eq!(app.grid.selected(), Some(1));
}

#[test]
fn escape_in_the_overlay_clears_the_selection() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, Some("batman"));
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Enter);
	assert!(app.scroll_lock.is_locked());

	assert!(press(&mut app, KeyCode::Esc).is_none());
	assert!(!app.overlay_open());
	assert!(app.coordinator().selection().is_none());
	assert!(!app.scroll_lock.is_locked());
	// The overlay swallowed the key, so the grid keeps focus.
	assert_eq!(app.focus(), Focus::Grid);
	assert_eq!(app.coordinator().status(), SearchStatus::Loaded);
}

#[test]
fn clicking_a_card_opens_it_and_clicking_outside_closes_it() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, Some("batman"));
	// 100x30 frame: the grid starts at (1, 3) with three 32-column cards.
	render(&mut app);

	click(&mut app, 40, 5);
	assert!(app.overlay_open());
	assert_eq!(app.focus(), Focus::Grid);
	assert_eq!(app.coordinator().selection().map(|m| m.id), Some(12));
	assert!(app.scroll_lock.is_locked());

	// Inside the popup nothing changes.
	click(&mut app, 50, 15);
	assert!(app.overlay_open());

	click(&mut app, 2, 1);
	assert!(!app.overlay_open());
	assert!(app.coordinator().selection().is_none());
	assert!(!app.scroll_lock.is_locked());

	// An empty slot opens nothing.
	click(&mut app, 80, 5);
	assert!(!app.overlay_open());
}

#[test]
fn undelivered_fetch_fails_the_search() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, None);
	app.fetcher.shutdown();

	type_text(&mut app, "batman");
	press(&mut app, KeyCode::Enter);

	assert_eq!(app.coordinator().status(), SearchStatus::Failed);
	assert!(app.coordinator().pending().is_none());
	assert_eq!(source.calls.load(Ordering::SeqCst), 0);
	assert!(render(&mut app).contains(ERROR_MESSAGE));
}

#[test]
fn accepting_from_the_overlay_returns_the_movie() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, Some("batman"));
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Right);
	press(&mut app, KeyCode::Enter);
	let view = render(&mut app);
	assert!(view.contains("batman p1 #2"));
	assert!(view.contains("Release Date: 1989-06-23"));
	assert!(view.contains("Rating: 7.5/10"));

	let outcome = press(&mut app, KeyCode::Enter).expect("outcome");
	assert!(outcome.accepted);
	assert_eq!(outcome.query.as_deref(), Some("batman"));
	assert_eq!(
		outcome.selected_movie().map(|m| m.title.as_str()),
		Some("batman p1 #2")
	);
	assert!(!app.scroll_lock.is_locked());
}

#[test]
fn escape_from_the_input_cancels() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, None);

	let outcome = press(&mut app, KeyCode::Esc).expect("outcome");
	assert!(!outcome.accepted);
	assert!(outcome.query.is_none());
	assert!(outcome.selection.is_none());
}

#[test]
fn ctrl_c_quits_and_teardown_releases_the_lock() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, Some("batman"));
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Enter);
	let lock = app.scroll_lock.clone();
	assert!(lock.is_locked());

	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
		.expect("key handled")
		.expect("outcome");
	assert!(!outcome.accepted);
	assert_eq!(outcome.query.as_deref(), Some("batman"));

	drop(app);
	assert!(!lock.is_locked());
}

#[test]
fn new_query_starts_again_from_page_one() {
	let source = Arc::new(ScriptedSource::default());
	let mut app = app_with(&source, Some("batman"));
	press(&mut app, KeyCode::Tab);
	press(&mut app, KeyCode::Char(']'));
	settle(&mut app);
	assert_eq!(app.coordinator().page().get(), 2);

	press(&mut app, KeyCode::Tab);
	type_text(&mut app, "superman");
	press(&mut app, KeyCode::Enter);
	settle(&mut app);

	assert_eq!(app.coordinator().page().get(), 1);
	assert!(render(&mut app).contains("superman p1 #1"));
}
