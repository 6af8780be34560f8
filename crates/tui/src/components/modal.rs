use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::symbols::border;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;
use wordscope_core::{Modal, OutcomeKind};

use crate::style::Theme;

const MIN_WIDTH: u16 = 36;
const MAX_WIDTH: u16 = 64;

/// Render the modal slot as a centred dialog over `area`.
pub fn render_modal(frame: &mut Frame, area: Rect, modal: &Modal, theme: &Theme) {
	let (title, body, hint, accent) = match modal {
		Modal::Confirm(pending) => (
			format!(" {} ", pending.action().label()),
			pending.prompt(),
			"y / Enter confirm   n / Esc cancel",
			theme.prompt,
		),
		Modal::Outcome(outcome) => {
			let (title, accent) = match outcome.kind {
				OutcomeKind::Success => (" Done ", theme.success),
				OutcomeKind::Failure => (" Failed ", theme.error),
			};
			(
				title.to_string(),
				outcome.message.as_str(),
				"Enter dismiss",
				accent,
			)
		}
	};

	let dialog = dialog_area(area, body, hint);
	if dialog.width == 0 || dialog.height == 0 {
		return;
	}

	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(accent)
		.title(Span::styled(title, accent));
	let text = vec![
		Line::from(Span::raw(body)),
		Line::default(),
		Line::from(Span::styled(hint, theme.empty_style())).alignment(Alignment::Right),
	];
	let paragraph = Paragraph::new(text)
		.block(block)
		.wrap(Wrap { trim: false })
		.style(Style::default());

	frame.render_widget(Clear, dialog);
	frame.render_widget(paragraph, dialog);
}

/// Size the dialog to its body, clamped to `area`.
fn dialog_area(area: Rect, body: &str, hint: &str) -> Rect {
	let content_width = body.width().max(hint.width()) as u16;
	let width = content_width
		.saturating_add(4)
		.clamp(MIN_WIDTH, MAX_WIDTH)
		.min(area.width);
	let inner_width = width.saturating_sub(2).max(1);
	let body_lines = (body.width() as u16).div_ceil(inner_width).max(1);
	let height = body_lines.saturating_add(4).min(area.height);
	centered_rect(area, width, height)
}

/// Centre a `width` by `height` box inside `area`.
#[must_use]
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(area.width);
	let height = height.min(area.height);
	Rect {
		x: area.x + (area.width - width) / 2,
		y: area.y + (area.height - height) / 2,
		width,
		height,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn centred_rect_stays_inside_area() {
		let area = Rect::new(2, 3, 40, 10);
		let rect = centered_rect(area, 20, 4);
		assert_eq!(rect, Rect::new(12, 6, 20, 4));

		let clamped = centered_rect(area, 100, 100);
		assert_eq!(clamped, area);
	}

	#[test]
	fn long_bodies_grow_the_dialog() {
		let area = Rect::new(0, 0, 80, 24);
		let short = dialog_area(area, "Delete?", "y");
		let long = dialog_area(area, &"word ".repeat(40), "y");
		assert_eq!(short.width, MIN_WIDTH);
		assert_eq!(long.width, MAX_WIDTH);
		assert!(long.height > short.height);
	}
}
