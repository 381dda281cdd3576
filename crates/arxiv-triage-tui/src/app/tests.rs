use std::time::Duration;

use arxiv_triage_core::{NotificationLevel, Paper, PaperStatus, Submission};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{Event, KeyModifiers, MouseEvent, MouseEventKind};

use super::*;
use crate::action::Action;
use crate::input;
use crate::model::notification::TOAST_TIMEOUT;
use crate::tui_event::BackendEvent;
use crate::view::list::LIST_HEADER;

/// Create a minimal App for testing (no backend).
fn test_app() -> App {
    App::new(Theme::hacker(), "http://127.0.0.1:8000")
}

/// Attach a backend channel and return its receiving end.
fn connect(app: &mut App) -> mpsc::UnboundedReceiver<BackendCommand> {
    let (tx, rx) = mpsc::unbounded_channel();
    app.backend_cmd_tx = Some(tx);
    rx
}

fn paper(title: &str, summary: &str, relevance: f64) -> Paper {
    Paper {
        title: title.to_string(),
        url: format!("http://arxiv.org/abs/{title}"),
        summary: summary.to_string(),
        relevance,
    }
}

fn loaded(papers: Vec<Paper>) -> App {
    let mut app = test_app();
    app.handle_backend_event(BackendEvent::PapersLoaded { result: Ok(papers) });
    app
}

fn render(app: &mut App) -> String {
    render_sized(app, 100, 40)
}

/// Draw one frame and flatten the buffer into newline-separated rows.
fn render_sized(app: &mut App, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| app.view(f)).unwrap();
    let buf = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn drain(rx: &mut mpsc::UnboundedReceiver<BackendCommand>) -> Vec<BackendCommand> {
    let mut cmds = Vec::new();
    while let Ok(cmd) = rx.try_recv() {
        cmds.push(cmd);
    }
    cmds
}

// ── Mounting and loading ────────────────────────────────────────

#[test]
fn mount_requests_papers_exactly_once() {
    let mut app = test_app();
    let mut rx = connect(&mut app);

    app.mount();
    app.mount();

    assert_eq!(drain(&mut rx), vec![BackendCommand::FetchPapers]);
}

#[test]
fn mount_without_backend_fails_the_load() {
    let mut app = test_app();
    app.mount();
    assert_eq!(app.papers.error(), Some("backend unavailable"));
}

#[test]
fn loading_shows_only_the_indicator() {
    let mut app = test_app();
    let text = render(&mut app);
    assert!(text.contains("Loading..."));
    assert!(!text.contains(LIST_HEADER));
    assert!(!text.contains("Added:"));
}

#[test]
fn empty_batch_shows_zero_counters_and_no_rows() {
    let mut app = loaded(vec![]);
    let text = render(&mut app);
    assert!(text.contains(LIST_HEADER));
    assert!(text.contains("Added: 0, Ignored: 0, Pending: 0"));
    assert!(text.contains("Papers (0)"));
    assert!(!text.contains("Status:"));
}

#[test]
fn fetch_failure_shows_only_the_error() {
    let mut app = test_app();
    app.handle_backend_event(BackendEvent::PapersLoaded {
        result: Err("Failed to fetch papers (HTTP 500 Internal Server Error)".to_string()),
    });

    let text = render(&mut app);
    assert!(text.contains("Error: Failed to fetch papers (HTTP 500"));
    assert!(!text.contains(LIST_HEADER));
    assert!(!text.contains("Added:"));
    assert!(!text.contains("Loading..."));
}

#[test]
fn duplicate_load_result_is_ignored() {
    let mut app = loaded(vec![paper("A", "s", 0.7)]);
    app.handle_backend_event(BackendEvent::PapersLoaded {
        result: Err("late".to_string()),
    });
    assert_eq!(app.papers.len(), 1);
    assert!(app.papers.error().is_none());
}

// ── Single paper walkthrough ────────────────────────────────────

#[test]
fn ignoring_the_only_paper_updates_card_and_counters() {
    let mut app = loaded(vec![Paper {
        title: "T".to_string(),
        url: "http://x".to_string(),
        summary: "short".to_string(),
        relevance: 0.55,
    }]);

    let text = render(&mut app);
    assert!(text.contains("Added: 0, Ignored: 0, Pending: 1"));
    assert!(text.contains("0.55"));
    assert!(text.contains("Status: pending"));
    assert!(!text.contains("Show More"));
    assert!(app.papers.item(0).unwrap().actions_enabled());

    app.update(Action::Ignore);

    let text = render(&mut app);
    assert!(text.contains("Added: 0, Ignored: 1, Pending: 0"));
    assert!(text.contains("Status: ignored"));
    assert!(!app.papers.item(0).unwrap().actions_enabled());
}

#[test]
fn counters_always_sum_to_total() {
    let mut app = loaded(vec![
        paper("A", "s", 0.9),
        paper("B", "s", 0.5),
        paper("C", "s", 0.1),
    ]);
    let actions = [
        Action::AddToNotion,
        Action::MoveDown,
        Action::Ignore,
        Action::Ignore,
        Action::MoveDown,
        Action::AddToNotion,
    ];
    for action in actions {
        app.update(action);
        let stats = app.papers.stats();
        assert_eq!(
            stats.added + stats.ignored + app.papers.pending_count(),
            app.papers.len()
        );
    }
    assert_eq!(app.papers.stats().added, 2);
    assert_eq!(app.papers.stats().ignored, 1);
}

#[test]
fn second_activation_changes_nothing() {
    let mut app = loaded(vec![paper("A", "s", 0.9)]);
    let mut rx = connect(&mut app);

    app.update(Action::AddToNotion);
    app.update(Action::AddToNotion);
    app.update(Action::Ignore);

    assert_eq!(app.papers.stats().added, 1);
    assert_eq!(app.papers.stats().ignored, 0);
    assert_eq!(app.papers.item(0).unwrap().status(), PaperStatus::Added);
    assert_eq!(drain(&mut rx).len(), 1);
}

// ── Add to Notion ───────────────────────────────────────────────

#[test]
fn add_sends_title_and_url_to_backend() {
    let mut app = loaded(vec![paper("A", "s", 0.9)]);
    let mut rx = connect(&mut app);

    app.update(Action::AddToNotion);

    assert_eq!(
        drain(&mut rx),
        vec![BackendCommand::AddToNotion {
            submission: Submission {
                title: "A".to_string(),
                url: "http://arxiv.org/abs/A".to_string(),
            }
        }]
    );
}

#[test]
fn successful_submission_raises_notice() {
    let mut app = loaded(vec![paper("A", "s", 0.9)]);
    let mut rx = connect(&mut app);
    app.update(Action::AddToNotion);
    let submission = match drain(&mut rx).pop() {
        Some(BackendCommand::AddToNotion { submission }) => submission,
        other => panic!("expected AddToNotion, got {other:?}"),
    };

    app.handle_backend_event(BackendEvent::SubmissionComplete {
        submission,
        result: Ok(()),
    });

    let toast = app.notifications.toast.as_ref().unwrap();
    assert_eq!(toast.notification.level, NotificationLevel::Success);
    assert!(render(&mut app).contains("Paper added to Notion!"));
}

#[test]
fn failed_submission_keeps_added_and_reports_error() {
    let mut app = loaded(vec![paper("A", "s", 0.9)]);
    let mut rx = connect(&mut app);
    app.update(Action::AddToNotion);
    let submission = match drain(&mut rx).pop() {
        Some(BackendCommand::AddToNotion { submission }) => submission,
        other => panic!("expected AddToNotion, got {other:?}"),
    };

    app.handle_backend_event(BackendEvent::SubmissionComplete {
        submission,
        result: Err("Failed to add paper to Notion (HTTP 502 Bad Gateway)".to_string()),
    });

    let item = app.papers.item(0).unwrap();
    assert_eq!(item.status(), PaperStatus::Added);
    assert!(!item.actions_enabled());
    assert_eq!(app.papers.stats().added, 1);

    let text = render(&mut app);
    assert!(text.contains("Error: Failed to add paper to Notion"));
    assert!(text.contains("Status: added"));
}

#[test]
fn add_without_backend_still_marks_added() {
    let mut app = loaded(vec![paper("A", "s", 0.9)]);

    app.update(Action::AddToNotion);

    assert_eq!(app.papers.item(0).unwrap().status(), PaperStatus::Added);
    let toast = app.notifications.toast.as_ref().unwrap();
    assert_eq!(toast.notification.message, "Error: backend unavailable");
}

// ── Dispose ─────────────────────────────────────────────────────

#[test]
fn events_after_dispose_are_ignored() {
    let mut app = test_app();
    app.dispose();

    app.handle_backend_event(BackendEvent::PapersLoaded {
        result: Ok(vec![paper("A", "s", 0.9)]),
    });
    app.handle_backend_event(BackendEvent::SubmissionComplete {
        submission: Submission {
            title: "A".to_string(),
            url: "http://arxiv.org/abs/A".to_string(),
        },
        result: Ok(()),
    });

    assert!(app.papers.is_loading());
    assert!(app.notifications.toast.is_none());
    assert!(app.notifications.history.is_empty());
}

// ── Summary toggle ──────────────────────────────────────────────

#[test]
fn enter_expands_and_collapses_long_summary() {
    let mut app = loaded(vec![paper("A", &"x".repeat(300), 0.9)]);

    let text = render(&mut app);
    assert!(text.contains("[Enter] Show More"));
    assert!(text.contains("x..."));

    app.update(Action::ToggleSummary);
    let text = render(&mut app);
    assert!(text.contains("[Enter] Hide"));

    app.update(Action::ToggleSummary);
    assert!(render(&mut app).contains("[Enter] Show More"));
}

#[test]
fn enter_dismisses_notice_before_toggling() {
    let mut app = loaded(vec![paper("A", &"x".repeat(300), 0.9)]);
    app.update(Action::AddToNotion);
    assert!(app.notifications.toast.is_some());

    app.update(Action::ToggleSummary);

    assert!(app.notifications.toast.is_none());
    assert!(!app.papers.item(0).unwrap().is_expanded());
}

#[tokio::test(start_paused = true)]
async fn notice_expires_after_timeout() {
    let mut app = loaded(vec![paper("A", "s", 0.9)]);
    app.update(Action::AddToNotion);

    tokio::time::advance(TOAST_TIMEOUT - Duration::from_millis(100)).await;
    app.update(Action::Tick);
    assert!(app.notifications.toast.is_some());

    tokio::time::advance(Duration::from_millis(100)).await;
    app.update(Action::Tick);
    assert!(app.notifications.toast.is_none());
    assert_eq!(app.notifications.history.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn failure_notice_survives_mouse_motion() {
    let mut app = loaded(vec![paper("A", "s", 0.9)]);
    app.update(Action::AddToNotion);
    assert_eq!(
        app.notifications.toast.as_ref().map(|t| t.notification.message.as_str()),
        Some("Error: backend unavailable")
    );

    let moved = Event::Mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: 10,
        row: 5,
        modifiers: KeyModifiers::NONE,
    });
    for _ in 0..50 {
        app.update(input::map_event(&moved));
        app.update(Action::Tick);
    }

    assert!(app.notifications.toast.is_some());
    assert!(render(&mut app).contains("backend unavailable"));
}

// ── Navigation and modals ───────────────────────────────────────

#[test]
fn cursor_stays_in_bounds() {
    let mut app = loaded(vec![
        paper("A", "s", 0.9),
        paper("B", "s", 0.9),
        paper("C", "s", 0.9),
    ]);

    app.update(Action::MoveUp);
    assert_eq!(app.cursor, 0);
    app.update(Action::GoBottom);
    assert_eq!(app.cursor, 2);
    app.update(Action::MoveDown);
    assert_eq!(app.cursor, 2);
    app.update(Action::PageUp);
    assert_eq!(app.cursor, 0);
    app.update(Action::PageDown);
    assert_eq!(app.cursor, 2);
}

#[test]
fn actions_target_the_selected_paper() {
    let mut app = loaded(vec![paper("A", "s", 0.9), paper("B", "s", 0.9)]);

    app.update(Action::MoveDown);
    app.update(Action::Ignore);

    assert_eq!(app.papers.item(0).unwrap().status(), PaperStatus::Pending);
    assert_eq!(app.papers.item(1).unwrap().status(), PaperStatus::Ignored);
}

#[test]
fn table_rows_name_the_relevance_band() {
    let mut app = loaded(vec![
        paper("A", "s", 0.91),
        paper("B", "s", 0.55),
        paper("C", "s", 0.2),
    ]);

    let text = render(&mut app);
    assert!(text.contains("0.91 high"));
    assert!(text.contains("0.55 medium"));
    assert!(text.contains("0.20 low"));
}

#[test]
fn quit_requires_confirmation() {
    let mut app = loaded(vec![paper("A", "s", 0.9)]);

    assert!(!app.update(Action::Quit));
    assert!(app.confirm_quit);
    assert!(render(&mut app).contains("1 papers still pending."));

    app.update(Action::NavigateBack);
    assert!(!app.confirm_quit);

    app.update(Action::Quit);
    assert!(app.update(Action::Quit));
    assert!(app.should_quit);
}

#[test]
fn force_quit_skips_confirmation() {
    let mut app = test_app();
    assert!(app.update(Action::ForceQuit));
    assert!(app.should_quit);
}

#[test]
fn help_overlay_swallows_triage_keys() {
    let mut app = loaded(vec![paper("A", "s", 0.9)]);

    app.update(Action::ToggleHelp);
    assert!(render(&mut app).contains("Keyboard Shortcuts"));
    app.update(Action::AddToNotion);
    assert_eq!(app.papers.item(0).unwrap().status(), PaperStatus::Pending);

    app.update(Action::NavigateBack);
    assert!(!app.show_help);
}

#[test]
fn activity_panel_lists_notifications() {
    let mut app = loaded(vec![paper("A", "s", 0.9)]);
    app.update(Action::AddToNotion);
    app.update(Action::NavigateBack);
    app.update(Action::ToggleActivityPanel);

    let text = render_sized(&mut app, 160, 40);
    assert!(text.contains("Activity"));
    assert!(text.contains("backend unavailable"));
}

#[test]
fn activity_panel_hides_counters_while_loading() {
    let mut app = test_app();
    app.update(Action::ToggleActivityPanel);

    let text = render_sized(&mut app, 160, 30);
    assert!(text.contains("Activity"));
    assert!(text.contains("Loading..."));
    assert!(!text.contains("pending"));
    assert!(!text.contains("added"));
}

#[test]
fn activity_panel_hides_counters_after_failed_load() {
    let mut app = test_app();
    app.handle_backend_event(BackendEvent::PapersLoaded {
        result: Err("Failed to fetch papers (HTTP 500 Internal Server Error)".to_string()),
    });
    app.update(Action::ToggleActivityPanel);

    let text = render_sized(&mut app, 160, 30);
    assert!(text.contains("Activity"));
    assert!(text.contains("Error: Failed to fetch papers"));
    assert!(!text.contains("pending"));
    assert!(!text.contains("ignored"));
}

#[test]
fn activity_panel_shows_counters_once_loaded() {
    let mut app = loaded(vec![paper("A", "s", 0.9), paper("B", "s", 0.9)]);
    app.update(Action::Ignore);
    app.update(Action::ToggleActivityPanel);

    let text = render_sized(&mut app, 160, 40);
    assert!(text.contains("Session"));
    assert!(text.contains(" pending 1"));
}
