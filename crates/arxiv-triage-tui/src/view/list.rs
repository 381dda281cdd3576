use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap};

use crate::app::App;
use crate::theme::Theme;
use crate::view::{item, spinner_char, truncate};

/// Heading above the counters.
pub const LIST_HEADER: &str = "Recent cs.CV Papers Published on arXiv";

/// Title bar with the backend in use.
pub fn render_top_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(" arxiv-triage ", theme.header_style()),
        Span::styled(format!(" {}", app.base_url), Style::default().fg(theme.dim)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Shown until the fetch completes. Nothing else is drawn.
pub fn render_loading(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = Line::from(Span::styled(
        format!("{} Loading...", spinner_char(app.tick)),
        Style::default()
            .fg(theme.spinner)
            .add_modifier(Modifier::BOLD),
    ));
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}

/// A failed fetch replaces the whole list with its message.
pub fn render_error(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!("Error: {message}"),
        Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
    )))
    .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Render the loaded list: header, counters, table and the selected card.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let has_items = !app.papers.is_empty();
    let card_height = if has_items {
        Constraint::Percentage(50)
    } else {
        Constraint::Length(0)
    };
    let [header_area, counters_area, table_area, card_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(4),
        card_height,
    ])
    .areas(area);

    render_header(f, header_area, app);
    render_counters(f, counters_area, app);
    render_table(f, table_area, app);
    // Borders and the column header row.
    app.visible_rows = (table_area.height as usize).saturating_sub(3).max(1);

    if has_items {
        if let Some(paper) = app.papers.item(app.cursor) {
            item::render(f, card_area, paper, &app.theme);
        }
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(Span::styled(
        format!(" {LIST_HEADER}"),
        Style::default()
            .fg(app.theme.text)
            .add_modifier(Modifier::BOLD),
    )));
    f.render_widget(header, area);
}

fn render_counters(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let stats = app.papers.stats();
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            stats.summary_line(app.papers.len()),
            Style::default().fg(theme.text),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let header = Row::new(["#", "Title", "Rel", "Status"].iter().map(|h| {
        Cell::from(*h).style(Style::default().fg(theme.text).add_modifier(Modifier::BOLD))
    }))
    .height(1);

    let title_width = (area.width as usize).saturating_sub(4 + 12 + 9 + 5);
    let rows: Vec<Row> = app
        .papers
        .items()
        .iter()
        .map(|paper| {
            let status = paper.status();
            let title_style = if status.is_pending() {
                Style::default().fg(theme.text)
            } else {
                Style::default().fg(theme.dim)
            };
            let band = paper.relevance_band();
            Row::new(vec![
                Cell::from(format!("{}", paper.index + 1)),
                Cell::from(truncate(&paper.paper.title, title_width)).style(title_style),
                Cell::from(format!("{} {}", paper.relevance_label(), band.label()))
                    .style(Style::default().fg(theme.band_color(band))),
                Cell::from(status.label()).style(Style::default().fg(theme.status_color(status))),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Min(10),
        Constraint::Length(12),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(format!(" Papers ({}) ", app.papers.len())),
        )
        .row_highlight_style(theme.highlight_style());

    let mut state = TableState::default();
    if !app.papers.is_empty() {
        state.select(Some(app.cursor));
    }
    f.render_stateful_widget(table, area, &mut state);
}

pub fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let hints = if app.papers.is_empty() {
        " Tab:activity  ?:help  q:quit"
    } else {
        " j/k:move  Enter:summary  a:add  i:ignore  y:copy url  Tab:activity  ?:help  q:quit"
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(hints, theme.footer_style()))),
        area,
    );
}
