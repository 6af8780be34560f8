use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wordscope_core::{
	ACTION_FAILURE_MESSAGE, AdminRequest, Backend, BackendError, Modal, OutcomeKind,
	SEARCH_FAILURE_MESSAGE, SearchClient, SearchMode, SearchQuery, SearchResult,
};

use super::App;

const WAIT: Duration = Duration::from_secs(5);

/// Answers from fixed rules keyed on the term.
struct Canned;

impl Backend for Canned {
	fn search(&self, query: &SearchQuery) -> Result<Vec<SearchResult>, BackendError> {
		match query.term.as_str() {
			"zzz" => Ok(Vec::new()),
			"boom" => Err(BackendError::WorkerGone),
			term => Ok(vec![SearchResult {
				word: term.to_string(),
				metadata: "noun".into(),
				related_words: vec!["hi".into(), "greeting".into()],
			}]),
		}
	}

	fn execute(&self, request: &AdminRequest) -> Result<Option<String>, BackendError> {
		match request {
			AdminRequest::RebuildIndex => Ok(Some("Index rebuilt".into())),
			AdminRequest::DeleteEntry { term } => Ok(Some(format!("Deleted {term}"))),
			AdminRequest::DeleteIndex => Err(BackendError::WorkerGone),
		}
	}
}

fn app() -> App<'static> {
	App::new(SearchClient::new(Canned))
}

fn press(app: &mut App<'_>, code: KeyCode) -> bool {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).is_some()
}

fn ctrl(app: &mut App<'_>, ch: char) -> bool {
	app.handle_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL))
		.is_some()
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn search(app: &mut App<'_>, term: &str) {
	type_text(app, term);
	press(app, KeyCode::Enter);
	assert!(app.wait_idle(WAIT), "search never resolved");
}

fn render(app: &mut App<'_>) -> String {
	let mut terminal = Terminal::new(TestBackend::new(80, 20)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	let buffer = terminal.backend().buffer();
	let area = buffer.area;
	(0..area.height)
		.map(|y| {
			(0..area.width)
				.map(|x| buffer[(x, y)].symbol())
				.collect::<String>()
		})
		.collect::<Vec<_>>()
		.join("\n")
}

#[test]
fn submitted_search_renders_every_result_field() {
	let mut app = app();
	search(&mut app, "hello");

	let screen = render(&mut app);
	assert!(screen.contains("Results (1)"), "{screen}");
	assert!(screen.contains("hello"), "{screen}");
	assert!(screen.contains("Metadata: noun"), "{screen}");
	assert!(screen.contains("Related words: hi, greeting"), "{screen}");
	assert_eq!(app.results.list_state.selected(), Some(0));
}

#[test]
fn empty_results_show_the_notice() {
	let mut app = app();
	search(&mut app, "zzz");

	let screen = render(&mut app);
	assert!(screen.contains("No results found for \"zzz\""), "{screen}");
}

#[test]
fn failed_search_shows_the_banner_and_keeps_results() {
	let mut app = app();
	search(&mut app, "hello");
	for _ in 0.."hello".len() {
		press(&mut app, KeyCode::Backspace);
	}
	search(&mut app, "boom");

	let screen = render(&mut app);
	assert!(screen.contains(SEARCH_FAILURE_MESSAGE), "{screen}");
	assert!(screen.contains("Metadata: noun"), "{screen}");
	assert!(!screen.contains("No results found"), "{screen}");
}

#[test]
fn blank_input_does_not_search() {
	let mut app = app();
	type_text(&mut app, "   ");
	press(&mut app, KeyCode::Enter);
	assert!(!app.client().is_busy());
	assert_eq!(app.summary().searches, 0);
}

#[test]
fn tab_cycles_the_search_mode() {
	let mut app = app();
	press(&mut app, KeyCode::Tab);
	assert_eq!(app.client().state().query.mode, SearchMode::Fuzzy);
	assert!(render(&mut app).contains("Fuzzy ❯"));

	press(&mut app, KeyCode::BackTab);
	press(&mut app, KeyCode::BackTab);
	assert_eq!(app.client().state().query.mode, SearchMode::Prefix);
}

#[test]
fn delete_entry_is_confirmed_then_reported() {
	let mut app = app();
	type_text(&mut app, "hello");
	ctrl(&mut app, 'd');

	let screen = render(&mut app);
	assert!(screen.contains("Delete \"hello\" from the index?"), "{screen}");
	assert!(screen.contains("y confirm"), "{screen}");

	press(&mut app, KeyCode::Char('y'));
	assert!(app.wait_idle(WAIT));
	let screen = render(&mut app);
	assert!(screen.contains("Deleted hello"), "{screen}");

	let summary = app.summary();
	assert_eq!(summary.actions.len(), 1);
	assert_eq!(summary.actions[0].outcome.kind, OutcomeKind::Success);

	press(&mut app, KeyCode::Enter);
	assert_eq!(app.client().state().modal, None);
}

#[test]
fn cancelled_confirmation_sends_nothing() {
	let mut app = app();
	ctrl(&mut app, 'x');
	assert!(matches!(app.client().state().modal, Some(Modal::Confirm(_))));

	assert!(!press(&mut app, KeyCode::Char('n')));
	assert_eq!(app.client().state().modal, None);
	assert!(!app.client().is_busy());
	assert!(app.summary().actions.is_empty());
}

#[test]
fn confirmation_swallows_typing() {
	let mut app = app();
	type_text(&mut app, "abc");
	ctrl(&mut app, 'r');
	type_text(&mut app, "def");
	assert_eq!(app.search_input.text(), "abc");
	assert!(matches!(app.client().state().modal, Some(Modal::Confirm(_))));
}

#[test]
fn failed_action_outcome_is_dismissed_by_escape() {
	let mut app = app();
	ctrl(&mut app, 'x');
	press(&mut app, KeyCode::Enter);
	assert!(app.wait_idle(WAIT));

	let screen = render(&mut app);
	assert!(screen.contains("Failed"), "{screen}");
	assert!(screen.contains(ACTION_FAILURE_MESSAGE), "{screen}");

	assert!(!press(&mut app, KeyCode::Esc), "escape should dismiss, not quit");
	assert_eq!(app.client().state().modal, None);
	assert!(press(&mut app, KeyCode::Esc));
}

#[test]
fn quitting_returns_the_session_summary() {
	let mut app = app();
	search(&mut app, "hello");
	ctrl(&mut app, 'r');
	press(&mut app, KeyCode::Char('y'));
	assert!(app.wait_idle(WAIT));

	let summary = app
		.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
		.expect("ctrl+c quits");
	assert_eq!(summary.query, "hello");
	assert_eq!(summary.mode, SearchMode::Exact);
	assert_eq!(summary.results.len(), 1);
	assert_eq!(summary.searches, 1);
	assert_eq!(summary.actions[0].action, "Rebuild index");
	assert_eq!(summary.actions[0].outcome.message, "Index rebuilt");
}

#[test]
fn prefilled_query_is_sent_on_start() {
	let mut app = app().with_query("hello", SearchMode::Prefix);
	assert_eq!(app.search_input.text(), "hello");
	app.submit_initial_query();
	assert!(app.wait_idle(WAIT));
	assert_eq!(app.summary().results[0].word, "hello");
	assert_eq!(app.summary().mode, SearchMode::Prefix);
}
