use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use wordscope_core::Modal;

use super::App;
use crate::components::{
	InputContext, ProgressState, ResultsView, render_banner, render_input, render_modal,
	render_modes, render_results,
};

const BUSY_LABEL: &str = " Working";

const QUERY_HINTS: &[(&str, &str)] = &[
	("Enter", "search"),
	("Tab", "mode"),
	("^R", "rebuild"),
	("^D", "delete entry"),
	("^X", "delete all"),
	("Esc", "quit"),
];
const CONFIRM_HINTS: &[(&str, &str)] = &[("y", "confirm"), ("n", "cancel")];
const OUTCOME_HINTS: &[(&str, &str)] = &[("Enter", "dismiss")];

impl App<'_> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let view = self.client.presentation();
		let error_height = u16::from(view.error_message.is_some());
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(error_height),
				Constraint::Min(3),
				Constraint::Length(1),
			])
			.split(area);

		render_input(
			frame,
			InputContext {
				input: &self.search_input,
				mode: view.query.mode,
				area: layout[0],
				theme: &self.theme,
			},
			ProgressState {
				label: BUSY_LABEL,
				busy: view.is_busy,
				throbber_state: &self.throbber_state,
			},
		);
		render_modes(frame, layout[1], view.query.mode, &self.theme);

		if let Some(message) = view.error_message {
			render_banner(frame, layout[2], message, self.theme.error);
		}

		let empty_message = view.show_empty_results().then(|| view.empty_message());
		self.results.ensure_selection(view.results.len());
		self.results.viewport_rows = render_results(
			frame,
			layout[3],
			&mut self.results.list_state,
			ResultsView {
				results: view.results,
				empty_message,
				theme: &self.theme,
			},
		);

		let hints = match view.modal {
			None => QUERY_HINTS,
			Some(Modal::Confirm(_)) => CONFIRM_HINTS,
			Some(Modal::Outcome(_)) => OUTCOME_HINTS,
		};
		self.render_hints(frame, layout[4], hints);

		if let Some(modal) = view.modal {
			render_modal(frame, area, modal, &self.theme);
		}
	}

	fn render_hints(&self, frame: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
		let mut spans = Vec::with_capacity(hints.len() * 3);
		for (index, (key, label)) in hints.iter().enumerate() {
			if index > 0 {
				spans.push(Span::styled("  ", self.theme.empty_style()));
			}
			spans.push(Span::styled(*key, self.theme.prompt));
			spans.push(Span::styled(format!(" {label}"), self.theme.empty_style()));
		}
		frame.render_widget(Paragraph::new(Line::from(spans)), area);
	}
}
