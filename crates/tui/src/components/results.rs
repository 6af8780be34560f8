use ratatui::Frame;
use ratatui::layout::{Alignment, Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols::border;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{
	Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph, Scrollbar,
	ScrollbarOrientation, ScrollbarState, Wrap,
};
use wordscope_core::SearchResult;

use crate::style::Theme;

pub(crate) const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// What the results pane should show this frame.
pub struct ResultsView<'a> {
	pub results: &'a [SearchResult],
	/// Centred notice drawn instead of an empty list.
	pub empty_message: Option<String>,
	pub theme: &'a Theme,
}

/// Render the bordered results list. Returns the number of rows visible
/// inside the border.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	list_state: &mut ListState,
	view: ResultsView<'_>,
) -> usize {
	let ResultsView {
		results,
		empty_message,
		theme,
	} = view;

	let title = if results.is_empty() {
		" Results ".to_string()
	} else {
		format!(" Results ({}) ", results.len())
	};
	let block = Block::default()
		.borders(Borders::ALL)
		.border_set(border::ROUNDED)
		.border_style(Style::default().fg(theme.header.fg.unwrap_or(Color::Reset)))
		.title(title);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if results.is_empty() {
		if let Some(message) = empty_message
			&& inner.height > 0
		{
			let middle = Rect {
				y: inner.y + inner.height / 2,
				height: 1,
				..inner
			};
			let notice = Paragraph::new(Span::styled(message, theme.empty_style()))
				.alignment(Alignment::Center);
			frame.render_widget(notice, middle);
		}
		return inner.height as usize;
	}

	let items: Vec<ListItem> = results
		.iter()
		.map(|result| ListItem::new(result_text(result, theme)))
		.collect();
	let list = List::new(items)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_style(theme.row_highlight)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(list, inner, list_state);

	let rows: usize = results.iter().map(row_height).sum();
	if rows > inner.height as usize {
		let mut scrollbar_state = ScrollbarState::new(results.len())
			.position(list_state.selected().unwrap_or(0));
		let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
			.begin_symbol(None)
			.end_symbol(None)
			.thumb_style(theme.header);
		frame.render_stateful_widget(
			scrollbar,
			area.inner(Margin {
				vertical: 1,
				horizontal: 0,
			}),
			&mut scrollbar_state,
		);
	}

	inner.height as usize
}

/// Word on the first line, then metadata and related words when present.
fn result_text<'a>(result: &'a SearchResult, theme: &Theme) -> Text<'a> {
	let mut lines = vec![Line::from(Span::styled(result.word.as_str(), theme.highlight))];
	if !result.metadata.is_empty() {
		lines.push(Line::from(vec![
			Span::styled("  Metadata: ", theme.empty_style()),
			Span::raw(result.metadata.as_str()),
		]));
	}
	if !result.related_words.is_empty() {
		lines.push(Line::from(vec![
			Span::styled("  Related words: ", theme.empty_style()),
			Span::raw(result.related_words.join(", ")),
		]));
	}
	Text::from(lines)
}

fn row_height(result: &SearchResult) -> usize {
	1 + usize::from(!result.metadata.is_empty()) + usize::from(!result.related_words.is_empty())
}

/// Render a one-line banner, wrapping if it does not fit.
pub fn render_banner(frame: &mut Frame, area: Rect, message: &str, style: Style) {
	if area.height == 0 {
		return;
	}
	let banner = Paragraph::new(Span::styled(message, style)).wrap(Wrap { trim: true });
	frame.render_widget(banner, area);
}
