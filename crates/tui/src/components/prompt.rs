use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use throbber_widgets_tui::{Throbber, ThrobberState};
use wordscope_core::SearchMode;

use crate::input::QueryInput;
use crate::style::Theme;

pub(crate) const PROMPT_SYMBOL: &str = "❯ ";

/// Argument bundle for rendering the input row.
pub struct InputContext<'a> {
	pub input: &'a QueryInput<'a>,
	pub mode: SearchMode,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Busy indicator shown at the right edge of the prompt.
pub struct ProgressState<'a> {
	pub label: &'a str,
	pub busy: bool,
	pub throbber_state: &'a ThrobberState,
}

/// Render the mode label, the editable query and the busy indicator.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>, progress: ProgressState<'_>) {
	let InputContext {
		input,
		mode,
		area,
		theme,
	} = input;
	if area.width == 0 || area.height == 0 {
		return;
	}

	let prefix = Line::from(vec![
		Span::styled(mode.label(), theme.prompt),
		Span::raw(" "),
		Span::styled(PROMPT_SYMBOL, theme.prompt),
	]);
	let prefix_width = (prefix.width() as u16).min(area.width);
	frame
		.buffer_mut()
		.set_line(area.left(), area.top(), &prefix, prefix_width);

	let input_area = Rect {
		x: area.x + prefix_width,
		width: area.width - prefix_width,
		height: 1,
		..area
	};
	input.render_textarea(frame, input_area);

	if progress.busy {
		render_progress(frame, input_area, progress.label, progress.throbber_state, theme);
	}
}

fn render_progress(
	frame: &mut Frame,
	area: Rect,
	label: &str,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	if area.width == 0 || label.is_empty() {
		return;
	}

	let muted_style = theme.empty_style();
	let spinner = Throbber::default()
		.style(muted_style)
		.throbber_style(muted_style);
	let line = Line::from(vec![
		spinner.to_symbol_span(throbber_state),
		Span::styled(label.to_string(), muted_style),
	]);

	let line_width = line.width() as u16;
	let buffer = frame.buffer_mut();
	let mut start_x = area.right().saturating_sub(line_width).max(area.left());

	// Keep clear of the typed text.
	let row = area.top();
	let last_char_x = (area.left()..area.right())
		.rev()
		.find(|&x| {
			buffer
				.cell((x, row))
				.is_some_and(|cell| !cell.symbol().trim().is_empty())
		});
	if let Some(last_x) = last_char_x {
		start_x = start_x.max(last_x.saturating_add(3));
	}
	if start_x >= area.right() {
		return;
	}

	let max_width = area.right().saturating_sub(start_x).min(line_width);
	buffer.set_line(start_x, row, &line, max_width);
}
