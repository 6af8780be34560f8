use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Tabs;
use wordscope_core::SearchMode;

use crate::style::Theme;

/// Render the search mode strip with `active` selected.
pub fn render_modes(frame: &mut Frame, area: Rect, active: SearchMode, theme: &Theme) {
	let titles = SearchMode::ALL
		.iter()
		.map(|mode| Line::from(format!(" {} ", mode.label())));
	let tabs = Tabs::new(titles)
		.select(active.index())
		.style(theme.tab_inactive_style())
		.highlight_style(theme.tab_highlight_style())
		.padding("", "")
		.divider(" ");
	frame.render_widget(tabs, area);
}
