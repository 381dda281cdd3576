mod backend;
mod update;
mod util;

use arxiv_triage_core::{LoadState, PaperList};
use ratatui::layout::{Constraint, Layout};
use tokio::sync::mpsc;

use crate::model::notification::NotificationState;
use crate::theme::Theme;
use crate::tui_event::BackendCommand;

/// Main application state.
pub struct App {
    pub papers: PaperList,
    /// Selected row in the paper table.
    pub cursor: usize,
    pub tick: usize,
    pub theme: Theme,
    /// Backend shown in the top bar.
    pub base_url: String,
    pub should_quit: bool,
    pub confirm_quit: bool,
    pub show_help: bool,
    pub activity_panel_visible: bool,
    pub notifications: NotificationState,
    /// Table rows that fit on screen, refreshed on every draw.
    pub visible_rows: usize,
    pub backend_cmd_tx: Option<mpsc::UnboundedSender<BackendCommand>>,
    fetch_requested: bool,
}

impl App {
    pub fn new(theme: Theme, base_url: impl Into<String>) -> Self {
        Self {
            papers: PaperList::new(),
            cursor: 0,
            tick: 0,
            theme,
            base_url: base_url.into(),
            should_quit: false,
            confirm_quit: false,
            show_help: false,
            activity_panel_visible: false,
            notifications: NotificationState::default(),
            visible_rows: 10,
            backend_cmd_tx: None,
            fetch_requested: false,
        }
    }

    /// Request the paper batch. Only the first call sends anything.
    pub fn mount(&mut self) {
        if self.fetch_requested {
            return;
        }
        self.fetch_requested = true;
        match &self.backend_cmd_tx {
            Some(tx) => {
                if tx.send(BackendCommand::FetchPapers).is_err() {
                    self.papers.finish_load(Err("backend unavailable"));
                }
            }
            None => {
                self.papers.finish_load(Err("backend unavailable"));
            }
        }
    }

    /// Stop reacting to anything the backend reports from now on.
    pub fn dispose(&mut self) {
        self.papers.dispose();
        self.notifications.dismiss();
    }

    /// Hand queued add-to-notion submissions to the backend.
    fn flush_submissions(&mut self) {
        for submission in self.papers.take_submissions() {
            let sent = self
                .backend_cmd_tx
                .as_ref()
                .map(|tx| {
                    tx.send(BackendCommand::AddToNotion {
                        submission: submission.clone(),
                    })
                    .is_ok()
                })
                .unwrap_or(false);
            if !sent {
                if let Some(notification) = self
                    .papers
                    .finish_submission(&submission, Err("backend unavailable"))
                {
                    self.notifications.push(notification);
                }
            }
        }
    }

    /// URL of the selected paper, if the list has loaded.
    pub fn selected_url(&self) -> Option<&str> {
        self.papers
            .item(self.cursor)
            .map(|item| item.paper.url.as_str())
    }

    pub fn view(&mut self, f: &mut ratatui::Frame) {
        let area = f.area();
        let [top_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        crate::view::list::render_top_bar(f, top_area, self);

        let main_area = if self.activity_panel_visible {
            let panel_width = if body_area.width > 120 {
                45
            } else {
                (body_area.width / 3).max(30)
            };
            let [main, panel] =
                Layout::horizontal([Constraint::Min(40), Constraint::Length(panel_width)])
                    .areas(body_area);
            crate::view::activity::render(f, panel, self);
            main
        } else {
            body_area
        };

        match self.papers.load_state().clone() {
            LoadState::Loading => crate::view::list::render_loading(f, main_area, self),
            LoadState::Failed(message) => {
                crate::view::list::render_error(f, main_area, &message, &self.theme)
            }
            LoadState::Ready => crate::view::list::render_in(f, self, main_area),
        }

        crate::view::list::render_footer(f, footer_area, self);

        if let Some(toast) = &self.notifications.toast {
            crate::view::toast::render(f, toast, &self.theme);
        }

        if self.show_help {
            crate::view::help::render(f, &self.theme);
        }

        if self.confirm_quit {
            crate::view::quit_confirm::render(f, self.papers.pending_count(), &self.theme);
        }
    }
}

#[cfg(test)]
mod tests;
