//! Per-step screens for the greeting flow.

use bemine_flow::{CUSTOM_LABEL, DateType, NO_RESTAURANT, PlaceOption, Step, asset_file_name};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

const HEART: &str = r"
  .:::.   .:::.
 :::::::.:::::::
 :::::::::::::::
 ':::::::::::::'
   ':::::::::'
     ':::::'
       ':'
";

impl App {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(1), Constraint::Min(1), Constraint::Length(1)])
			.split(frame.area());
		let content = layout[1];

		match self.step() {
			Step::Landing => self.render_landing(frame, content),
			Step::Proposal => self.render_proposal(frame, content),
			Step::DatePick => self.render_date_pick(frame, content),
			Step::PlacePick => self.render_place_pick(frame, content),
			Step::Celebration => self.render_celebration(frame, content),
		}

		let hint = Paragraph::new(self.hint_line())
			.style(self.theme.hint)
			.alignment(Alignment::Center);
		frame.render_widget(hint, layout[2]);
	}

	fn hint_line(&self) -> &'static str {
		if self.prompt.is_some() {
			return "type a place · Enter confirm · Esc cancel";
		}
		match self.step() {
			Step::Landing => "Enter to tap the heart · q to quit",
			Step::Proposal => "Enter to say yes · q to quit",
			Step::DatePick | Step::PlacePick => "↑/↓ to browse · Enter to pick · q to quit",
			Step::Celebration => "r to start over · q to quit",
		}
	}

	fn render_landing(&self, frame: &mut Frame, area: Rect) {
		let mut text = Text::from(HEART);
		text.push_line(Line::from(""));
		text.push_line(Line::from("tap the heart"));
		let heart = Paragraph::new(text)
			.style(self.theme.accent)
			.alignment(Alignment::Center);
		frame.render_widget(heart, pad_top(area, 2));
	}

	fn render_proposal(&self, frame: &mut Frame, area: Rect) {
		let mut text = Text::default();
		text.push_line(Line::styled("Will you be my valentine?", self.theme.title));
		text.push_line(Line::from(""));
		for line in button_lines("Yes!") {
			text.push_line(line.style(self.theme.highlight));
		}
		let screen = Paragraph::new(text).alignment(Alignment::Center);
		frame.render_widget(screen, pad_top(area, 3));
	}

	fn render_date_pick(&self, frame: &mut Frame, area: Rect) {
		let title = Paragraph::new(Line::styled("Pick a date", self.theme.title))
			.alignment(Alignment::Center);
		let layout = split_title_list(area);
		frame.render_widget(title, layout[0]);

		let items: Vec<ListItem> = DateType::ALL
			.iter()
			.map(|date| ListItem::new(Line::from(date.label()).alignment(Alignment::Center)))
			.collect();
		self.render_list(frame, layout[1], items, self.date_cursor);
	}

	fn render_place_pick(&self, frame: &mut Frame, area: Rect) {
		let title = Paragraph::new(Line::styled("Pick a place", self.theme.title))
			.alignment(Alignment::Center);
		let layout = split_title_list(area);
		frame.render_widget(title, layout[0]);

		let options = self.place_options();
		let items: Vec<ListItem> = options
			.iter()
			.map(|option| {
				let label = match option {
					// Best-effort visual: show the derived asset name as a caption.
					PlaceOption::Named(name) => {
						format!("{name}  [{}]", asset_file_name(name))
					}
					PlaceOption::Custom => CUSTOM_LABEL.to_string(),
				};
				ListItem::new(Line::from(label).alignment(Alignment::Center))
			})
			.collect();

		if let Some(prompt) = &self.prompt {
			let split = Layout::default()
				.direction(Direction::Vertical)
				.constraints([Constraint::Min(1), Constraint::Length(3)])
				.split(layout[1]);
			self.render_list(frame, split[0], items, self.place_cursor);
			prompt.render(frame, centered_width(split[1], 44));
		} else {
			self.render_list(frame, layout[1], items, self.place_cursor);
		}
	}

	fn render_celebration(&self, frame: &mut Frame, area: Rect) {
		let state = self.state();
		let mut text = Text::default();
		text.push_line(Line::styled("It's a date!!!", self.theme.title));
		text.push_line(Line::from(""));
		text.push_line(
			Line::from(format!("Date Type: {}", state.date_choice)).style(self.theme.option),
		);
		text.push_line(
			Line::from(format!("Place: {}", state.display_place())).style(self.theme.option),
		);

		let place = state.restaurant_choice.as_str();
		if !place.is_empty() && place != CUSTOM_LABEL && place != NO_RESTAURANT {
			text.push_line(Line::from(""));
			text.push_line(Line::from(format!("[{}]", asset_file_name(place))).style(self.theme.hint));
		}

		let screen = Paragraph::new(text).alignment(Alignment::Center);
		frame.render_widget(screen, pad_top(area, 3));
	}

	fn render_list(&self, frame: &mut Frame, area: Rect, items: Vec<ListItem>, cursor: usize) {
		let list = List::new(items)
			.style(self.theme.option)
			.highlight_style(self.theme.highlight);
		let mut list_state = ListState::default().with_selected(Some(cursor));
		frame.render_stateful_widget(list, area, &mut list_state);
	}
}

/// Drop `lines` rows from the top of `area` so content floats a little.
fn pad_top(area: Rect, lines: u16) -> Rect {
	let offset = lines.min(area.height);
	Rect {
		y: area.y + offset,
		height: area.height - offset,
		..area
	}
}

fn split_title_list(area: Rect) -> std::rc::Rc<[Rect]> {
	let area = pad_top(area, 2);
	Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Length(2), Constraint::Min(1)])
		.split(area)
}

/// Center a fixed-width strip inside `area`.
fn centered_width(area: Rect, width: u16) -> Rect {
	let width = width.min(area.width);
	Rect {
		x: area.x + (area.width - width) / 2,
		width,
		..area
	}
}

/// Render a label inside a rounded one-line box.
fn button_lines(label: &str) -> Vec<Line<'static>> {
	let width = UnicodeWidthStr::width(label);
	vec![
		Line::from(format!("╭{}╮", "─".repeat(width + 2))),
		Line::from(format!("│ {label} │")),
		Line::from(format!("╰{}╯", "─".repeat(width + 2))),
	]
}
