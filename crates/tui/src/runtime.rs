//! Terminal setup and the poll/draw event loop.

use std::time::Duration;

use anyhow::Result;
use bemine_flow::FlowState;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::app::App;

/// Run the greeting UI to completion and return the final flow state.
pub fn run(app: App) -> Result<FlowState> {
	let mut terminal = ratatui::init();
	let result = event_loop(&mut terminal, app);
	ratatui::restore();
	result
}

/// Gesture-driven loop: draw, wait for a key, feed it to the app. The flow
/// has no background work, so a plain poll keeps everything on one thread.
fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> Result<FlowState> {
	terminal.clear()?;
	loop {
		terminal.draw(|frame| app.draw(frame))?;

		if !event::poll(Duration::from_millis(50))? {
			continue;
		}
		match event::read()? {
			Event::Key(key) if key.kind == KeyEventKind::Press => {
				if let Some(outcome) = app.handle_key(key) {
					return Ok(outcome);
				}
			}
			_ => {}
		}
	}
}
