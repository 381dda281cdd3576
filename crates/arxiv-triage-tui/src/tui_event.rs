use arxiv_triage_core::{Paper, Submission};

/// Commands sent from the TUI to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    /// Fetch the paper batch. Sent once, when the list is mounted.
    FetchPapers,
    /// Forward an accepted paper to the notes service.
    AddToNotion { submission: Submission },
}

/// Events flowing from the backend task to the TUI.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// The paper fetch finished. Errors are reduced to their message.
    PapersLoaded { result: Result<Vec<Paper>, String> },
    /// An add-to-notion call finished.
    SubmissionComplete {
        submission: Submission,
        result: Result<(), String>,
    },
}
