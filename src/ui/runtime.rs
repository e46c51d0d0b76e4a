use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use super::App;
use crate::outcome::SearchOutcome;

const INPUT_POLL: Duration = Duration::from_millis(50);
const FRAME_DELAY: Duration = Duration::from_millis(16);

impl<'a> App<'a> {
	/// Take over the terminal and pump events until the user exits.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = execute!(io::stdout(), EnableMouseCapture) {
			tracing::warn!(error = %err, "mouse capture unavailable");
		}

		let result = terminal
			.clear()
			.context("failed to clear the terminal")
			.and_then(|()| self.event_loop(&mut terminal));

		let _ = execute!(io::stdout(), DisableMouseCapture);
		ratatui::restore();
		result
	}

	fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<SearchOutcome> {
		let (event_tx, event_rx) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let input_flag = Arc::clone(&running);

		let input_thread = thread::spawn(move || -> io::Result<()> {
			while input_flag.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();
		let result: Result<SearchOutcome> = 'event_loop: loop {
			self.pump_search_results();
			self.toasts.prune(Instant::now());
			if self.coordinator.is_loading() {
				self.throbber_state.calc_next();
			}

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err).context("failed to draw the interface");
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						match self.handle_key(key) {
							Ok(Some(outcome)) => {
								maybe_outcome = Some(Ok(outcome));
								break;
							}
							Ok(None) => {}
							Err(err) => {
								maybe_outcome = Some(Err(err));
								break;
							}
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					_ => {}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break outcome;
			}

			thread::sleep(FRAME_DELAY);
		};

		running.store(false, Ordering::Relaxed);
		match input_thread.join() {
			Ok(Ok(())) => {}
			Ok(Err(err)) => tracing::warn!(error = %err, "terminal input thread failed"),
			Err(panic) => std::panic::resume_unwind(panic),
		}

		result
	}
}
