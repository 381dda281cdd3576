use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::model::notification::NotificationEntry;
use crate::theme::Theme;

/// Render the latest submission outcome in the bottom-right corner.
pub fn render(f: &mut Frame, entry: &NotificationEntry, theme: &Theme) {
    let area = f.area();
    let message = &entry.notification.message;
    let color = theme.notification_color(entry.notification.level);

    let width = (message.chars().count().min(200) as u16 + 4).max(24).min(area.width);
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::End)
        .areas(area);
    // Keep the footer row visible.
    let [popup, _] = Layout::vertical([Constraint::Length(4), Constraint::Length(1)])
        .flex(Flex::End)
        .areas(column);

    let lines = vec![
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(" Esc: dismiss", Style::default().fg(theme.dim))),
    ];
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(" Notice "),
    );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}
