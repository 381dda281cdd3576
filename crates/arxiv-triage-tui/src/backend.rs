use std::sync::Arc;

use arxiv_triage_core::PapersApi;
use arxiv_triage_core::api::{add_to_notion_cancellable, fetch_papers_cancellable};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::tui_event::{BackendCommand, BackendEvent};

/// Listen for commands from the TUI and run each request on its own task.
///
/// Returns when `cancel` fires or the command channel closes. Requests still in
/// flight at that point are abandoned and report nothing.
pub async fn run(
    api: Arc<dyn PapersApi>,
    mut cmd_rx: mpsc::UnboundedReceiver<BackendCommand>,
    event_tx: mpsc::UnboundedSender<BackendEvent>,
    cancel: CancellationToken,
) {
    loop {
        let cmd = tokio::select! {
            _ = cancel.cancelled() => break,
            cmd = cmd_rx.recv() => match cmd {
                Some(cmd) => cmd,
                None => break,
            },
        };

        let api = api.clone();
        let tx = event_tx.clone();
        let cancel = cancel.clone();
        match cmd {
            BackendCommand::FetchPapers => {
                tokio::spawn(async move {
                    if let Some(result) = fetch_papers_cancellable(api.as_ref(), &cancel).await {
                        let result = result.map_err(|e| e.to_string());
                        let _ = tx.send(BackendEvent::PapersLoaded { result });
                    }
                });
            }
            BackendCommand::AddToNotion { submission } => {
                tokio::spawn(async move {
                    let outcome = add_to_notion_cancellable(
                        api.as_ref(),
                        &submission.title,
                        &submission.url,
                        &cancel,
                    )
                    .await;
                    if let Some(result) = outcome {
                        let result = result.map_err(|e| e.to_string());
                        let _ = tx.send(BackendEvent::SubmissionComplete { submission, result });
                    }
                });
            }
        }
    }
    tracing::debug!("backend listener stopped");
}
