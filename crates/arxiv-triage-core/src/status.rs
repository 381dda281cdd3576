use std::fmt;

/// Triage status of a single paper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaperStatus {
    #[default]
    Pending,
    Added,
    Ignored,
}

impl PaperStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Added => "added",
            Self::Ignored => "ignored",
        }
    }

    pub fn is_pending(self) -> bool {
        self == Self::Pending
    }
}

impl fmt::Display for PaperStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A terminal status. Only these are ever reported on the status-change channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    Added,
    Ignored,
}

impl From<Decision> for PaperStatus {
    fn from(decision: Decision) -> Self {
        match decision {
            Decision::Added => PaperStatus::Added,
            Decision::Ignored => PaperStatus::Ignored,
        }
    }
}

/// Running totals of decided papers. Pending is derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub added: usize,
    pub ignored: usize,
}

impl Stats {
    pub fn record(&mut self, decision: Decision) {
        match decision {
            Decision::Added => self.added += 1,
            Decision::Ignored => self.ignored += 1,
        }
    }

    /// Papers still undecided out of `total`.
    pub fn pending(&self, total: usize) -> usize {
        total.saturating_sub(self.added + self.ignored)
    }

    /// Counter line shown under the list header.
    pub fn summary_line(&self, total: usize) -> String {
        format!(
            "Added: {}, Ignored: {}, Pending: {}",
            self.added,
            self.ignored,
            self.pending(total)
        )
    }
}
