use bemine_flow::{FlowController, FlowState, MemoryStore, NullCuePlayer, Step};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

fn app() -> (App, MemoryStore) {
	let store = MemoryStore::new();
	let flow = FlowController::new(Box::new(store.clone()), Box::new(NullCuePlayer));
	(App::new(flow), store)
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, codes: &[KeyCode]) -> Option<FlowState> {
	let mut outcome = None;
	for &code in codes {
		outcome = app.handle_key(key(code));
	}
	outcome
}

fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		app.handle_key(key(KeyCode::Char(ch)));
	}
}

fn draw(app: &mut App) -> String {
	let backend = TestBackend::new(80, 24);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

#[test]
fn each_screen_renders_its_headline() {
	let (mut app, _store) = app();

	assert!(draw(&mut app).contains("tap the heart"));

	press(&mut app, &[KeyCode::Enter]);
	let proposal = draw(&mut app);
	assert!(proposal.contains("Will you be my valentine?"));
	assert!(proposal.contains("Yes!"));

	press(&mut app, &[KeyCode::Enter]);
	let date_pick = draw(&mut app);
	assert!(date_pick.contains("Pick a date"));
	assert!(date_pick.contains("Breakfast n Hotel"));
	assert!(date_pick.contains("Food n u turns"));

	press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
	let place_pick = draw(&mut app);
	assert!(place_pick.contains("Pick a place"));
	assert!(place_pick.contains("Tsuki"));
	assert!(place_pick.contains("tsuki.jpg"), "asset caption shown");
	assert!(place_pick.contains("Custom"));
	assert!(
		!place_pick.contains("German Bakery"),
		"dinner date must not offer breakfast places"
	);
}

#[test]
fn key_scenario_reaches_celebration_with_tsuki() {
	let (mut app, store) = app();

	// heart → yes → "Hotel n Dinner" → "Tsuki"
	press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
	press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
	assert_eq!(app.state().step, Step::PlacePick);

	press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
	assert_eq!(app.state().step, Step::Celebration);
	assert_eq!(app.state().restaurant_choice, "Tsuki");

	let celebration = draw(&mut app);
	assert!(celebration.contains("It's a date!!!"));
	assert!(celebration.contains("Date Type: Hotel n Dinner"));
	assert!(celebration.contains("Place: Tsuki"));
	assert!(celebration.contains("tsuki.jpg"));

	let saved = store.snapshot().expect("snapshot persisted");
	assert_eq!(&saved, app.state());
}

#[test]
fn no_restaurant_date_jumps_to_celebration() {
	let (mut app, _store) = app();
	press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
	press(&mut app, &[KeyCode::Down, KeyCode::Enter]);

	assert_eq!(app.state().step, Step::Celebration);
	let celebration = draw(&mut app);
	assert!(celebration.contains("Place: No restaurant selected"));
	assert!(!celebration.contains(".jpg"), "sentinel gets no asset caption");
}

#[test]
fn custom_prompt_submits_typed_place() {
	let (mut app, _store) = app();
	press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Enter]);
	assert_eq!(app.state().step, Step::PlacePick);

	// Breakfast catalog has five places; Custom sits below them.
	press(&mut app, &[KeyCode::Down; 5]);
	press(&mut app, &[KeyCode::Enter]);
	assert!(app.prompt.is_some(), "custom choice opens the prompt");
	assert_eq!(app.state().step, Step::PlacePick, "prompt alone changes nothing");
	assert!(draw(&mut app).contains("Custom place"));

	type_text(&mut app, "The Pier");
	press(&mut app, &[KeyCode::Enter]);

	assert_eq!(app.state().step, Step::Celebration);
	assert_eq!(app.state().restaurant_choice, "Custom");
	assert_eq!(app.state().custom_place, "The Pier");
	assert!(draw(&mut app).contains("Place: The Pier"));
}

#[test]
fn escape_cancels_the_prompt() {
	let (mut app, _store) = app();
	press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Enter]);
	press(&mut app, &[KeyCode::Down; 5]);
	press(&mut app, &[KeyCode::Enter]);
	let before = app.state().clone();

	type_text(&mut app, "half typed");
	let outcome = press(&mut app, &[KeyCode::Esc]);

	assert!(outcome.is_none(), "esc closes the prompt, not the app");
	assert!(app.prompt.is_none());
	assert_eq!(app.state(), &before);
}

#[test]
fn empty_prompt_submit_cancels() {
	let (mut app, _store) = app();
	press(&mut app, &[KeyCode::Enter, KeyCode::Enter, KeyCode::Enter]);
	press(&mut app, &[KeyCode::Down; 5]);
	press(&mut app, &[KeyCode::Enter]);

	press(&mut app, &[KeyCode::Enter]);
	assert!(app.prompt.is_none());
	assert_eq!(app.state().step, Step::PlacePick);
	assert_eq!(app.state().restaurant_choice, "");
}

#[test]
fn reset_key_returns_to_landing() {
	let (mut app, store) = app();
	press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
	press(&mut app, &[KeyCode::Down, KeyCode::Enter]);
	assert_eq!(app.state().step, Step::Celebration);

	press(&mut app, &[KeyCode::Char('r')]);
	assert_eq!(app.state(), &FlowState::default());
	assert_eq!(store.snapshot(), None, "reset erases the snapshot");
	assert!(draw(&mut app).contains("tap the heart"));
}

#[test]
fn quit_key_returns_the_final_state() {
	let (mut app, _store) = app();
	press(&mut app, &[KeyCode::Enter]);

	let outcome = press(&mut app, &[KeyCode::Char('q')]);
	let state = outcome.expect("q exits with the current state");
	assert_eq!(state.step, Step::Proposal);
}

#[test]
fn cursor_stays_inside_the_list() {
	let (mut app, _store) = app();
	press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);

	press(&mut app, &[KeyCode::Up, KeyCode::Up]);
	assert_eq!(app.date_cursor, 0);

	press(&mut app, &[KeyCode::Down; 10]);
	assert_eq!(app.date_cursor, 3, "four date types, cursor caps at the last");
}
