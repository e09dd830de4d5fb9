//! Terminal setup and the main event loop.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use super::actions::KeyOutcome;
use super::state::{App, AppOptions};
use crate::api::DictionaryApi;

const INPUT_POLL: Duration = Duration::from_millis(50);
const FRAME: Duration = Duration::from_millis(16);

/// Open the page against `api` and run until the user quits.
pub fn run<A: DictionaryApi>(api: A, options: AppOptions) -> Result<()> {
	let mut app = App::new(api, options);
	app.run()
}

impl App {
	/// Pump the terminal event loop until the user exits.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		if let Err(err) = terminal.clear() {
			ratatui::restore();
			return Err(err.into());
		}
		info!("search page opened");

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let result = self.event_loop(&mut terminal, &event_rx);

		ratatui::restore();
		event_loop_running.store(false, Ordering::Relaxed);
		let joined = match event_thread.join() {
			Ok(join_result) => join_result,
			Err(err) => std::panic::resume_unwind(err),
		};

		self.query.cancel();
		self.coordinator.shutdown();
		info!("search page closed");
		result.and(joined)
	}

	fn event_loop(
		&mut self,
		terminal: &mut DefaultTerminal,
		event_rx: &mpsc::Receiver<Event>,
	) -> Result<()> {
		let mut pending_events = VecDeque::new();
		loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						return Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
					&& self.handle_key(key, Instant::now()) == KeyOutcome::Quit
				{
					debug!("quit requested");
					return Ok(());
				}
			}

			self.tick(Instant::now());
			self.throbber_state.calc_next();

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(FRAME);
		}
	}
}
