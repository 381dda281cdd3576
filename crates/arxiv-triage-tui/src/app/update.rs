use arxiv_triage_core::{Notification, TriageError};
use tokio::time::Instant;

use super::App;
use super::util::osc52_copy;
use crate::action::Action;

impl App {
    /// Process a user action and update state. Returns true if the app should quit.
    pub fn update(&mut self, action: Action) -> bool {
        if action == Action::ForceQuit {
            self.should_quit = true;
            return true;
        }

        // Quit confirmation modal: q confirms, Esc cancels
        if self.confirm_quit {
            match action {
                Action::Quit => {
                    self.should_quit = true;
                    return true;
                }
                Action::NavigateBack => self.confirm_quit = false,
                Action::Tick => self.on_tick(),
                _ => {}
            }
            return false;
        }

        if self.show_help {
            match action {
                Action::ToggleHelp | Action::NavigateBack => self.show_help = false,
                Action::Quit => {
                    self.show_help = false;
                    self.confirm_quit = true;
                }
                Action::Tick => self.on_tick(),
                _ => {}
            }
            return false;
        }

        let len = self.papers.len();
        match action {
            Action::Quit => self.confirm_quit = true,
            Action::MoveDown => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::PageDown => {
                self.cursor = (self.cursor + self.visible_rows).min(len.saturating_sub(1));
            }
            Action::PageUp => self.cursor = self.cursor.saturating_sub(self.visible_rows),
            Action::GoTop => self.cursor = 0,
            Action::GoBottom => self.cursor = len.saturating_sub(1),
            Action::ToggleSummary => {
                // Enter doubles as "OK" on an open notification.
                if !self.notifications.dismiss() {
                    let result = self.papers.toggle_summary(self.cursor);
                    self.log_rejected("toggle summary", result);
                }
            }
            Action::AddToNotion => {
                let result = self.papers.add(self.cursor);
                self.log_rejected("add", result);
                self.flush_submissions();
            }
            Action::Ignore => {
                let result = self.papers.ignore(self.cursor);
                self.log_rejected("ignore", result);
            }
            Action::CopyUrl => {
                if let Some(url) = self.selected_url().map(str::to_owned) {
                    osc52_copy(&url);
                    self.notifications
                        .push(Notification::info(format!("Copied {url}")));
                }
            }
            Action::ToggleActivityPanel => {
                self.activity_panel_visible = !self.activity_panel_visible;
            }
            Action::ToggleHelp => self.show_help = true,
            Action::NavigateBack => {
                self.notifications.dismiss();
            }
            Action::Tick => self.on_tick(),
            Action::Resize(_w, h) => {
                // Refined on the next draw once the layout is known.
                self.visible_rows = ((h as usize) / 2).saturating_sub(5).max(1);
            }
            Action::ForceQuit | Action::None => {}
        }
        false
    }

    fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.notifications.expire(Instant::now());
    }

    fn log_rejected(&self, what: &str, result: Result<(), TriageError>) {
        if let Err(e) = result {
            tracing::debug!(action = what, cursor = self.cursor, error = %e, "action rejected");
        }
    }
}
