use super::App;
use crate::tui_event::BackendEvent;

impl App {
    /// Process a backend event and update model state.
    pub fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::PapersLoaded { result } => {
                if self.papers.finish_load(result) {
                    self.cursor = 0;
                }
            }
            BackendEvent::SubmissionComplete { submission, result } => {
                if let Some(notification) = self.papers.finish_submission(&submission, result) {
                    self.notifications.push(notification);
                }
            }
        }
    }
}
