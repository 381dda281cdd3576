use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use arxiv_triage_core::PaperItem;

use crate::theme::Theme;

/// Render one paper as a card: link, relevance badge, status, actions and
/// the (possibly collapsed) summary.
pub fn render(f: &mut Frame, area: Rect, paper: &PaperItem, theme: &Theme) {
    let status = paper.status();
    let enabled = paper.actions_enabled();

    let mut lines = vec![
        Line::from(Span::styled(
            paper.paper.title.clone(),
            theme.link_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            paper.paper.url.clone(),
            Style::default().fg(theme.dim),
        )),
        Line::from(vec![
            Span::styled("Relevance: ", Style::default().fg(theme.dim)),
            Span::styled(
                paper.relevance_label(),
                theme.band_style(paper.relevance_band()),
            ),
            Span::styled("  Status: ", Style::default().fg(theme.dim)),
            Span::styled(
                status.label(),
                Style::default()
                    .fg(theme.status_color(status))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            action_button("[a] Add to Notion", enabled, theme),
            Span::raw("  "),
            action_button("[i] Ignore", enabled, theme),
        ]),
        Line::from(""),
    ];

    let summary = paper.summary_view();
    let mut summary_spans = vec![Span::styled(summary.text, Style::default().fg(theme.text))];
    if let Some(toggle) = summary.toggle {
        summary_spans.push(Span::raw(" "));
        summary_spans.push(Span::styled(
            format!("[Enter] {}", toggle.label()),
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(summary_spans));

    let card = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style())
            .title(format!(" Paper {} ", paper.index + 1)),
    );
    f.render_widget(card, area);
}

fn action_button<'a>(label: &'a str, enabled: bool, theme: &Theme) -> Span<'a> {
    if enabled {
        Span::styled(
            label,
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            label,
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    }
}
