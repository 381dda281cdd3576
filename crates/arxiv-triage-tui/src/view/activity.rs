use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use arxiv_triage_core::LoadState;

use crate::app::App;

/// Render the activity panel: triage totals once loaded, then recent notifications.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let stats = app.papers.stats();

    let mut lines: Vec<Line> = Vec::new();
    // Counters only mean something once the batch has loaded.
    if app.papers.load_state() == &LoadState::Ready {
        lines.extend([
            Line::from(Span::styled(
                " Session",
                Style::default()
                    .fg(theme.active)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled(" added   ", Style::default().fg(theme.dim)),
                Span::styled(format!("{}", stats.added), Style::default().fg(theme.added)),
            ]),
            Line::from(vec![
                Span::styled(" ignored ", Style::default().fg(theme.dim)),
                Span::styled(
                    format!("{}", stats.ignored),
                    Style::default().fg(theme.ignored),
                ),
            ]),
            Line::from(vec![
                Span::styled(" pending ", Style::default().fg(theme.dim)),
                Span::styled(
                    format!("{}", app.papers.pending_count()),
                    Style::default().fg(theme.pending),
                ),
            ]),
            Line::from(""),
        ]);
    }
    lines.push(Line::from(Span::styled(
        " Notifications",
        Style::default()
            .fg(theme.active)
            .add_modifier(Modifier::BOLD),
    )));

    if app.notifications.history.is_empty() {
        lines.push(Line::from(Span::styled(
            " (none yet)",
            Style::default().fg(theme.dim),
        )));
    }
    for entry in &app.notifications.history {
        let secs = entry.raised.elapsed().as_secs();
        lines.push(Line::from(vec![
            Span::styled(format!(" {:>4}s ", secs), Style::default().fg(theme.dim)),
            Span::styled(
                entry.notification.message.clone(),
                Style::default().fg(theme.notification_color(entry.notification.level)),
            ),
        ]));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(" Activity "),
    );
    f.render_widget(panel, area);
}
