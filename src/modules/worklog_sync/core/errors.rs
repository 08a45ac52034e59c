use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconciliationError {
    #[error("interval export unavailable: {0}")]
    ExportUnavailable(String),

    #[error("could not read worklogs for {ticket}: {reason}")]
    RemoteRead { ticket: String, reason: String },

    #[error("could not write worklog to {ticket}: {reason}")]
    RemoteWrite { ticket: String, reason: String },

    #[error("note lookup failed: {0}")]
    NoteLookup(String),
}

impl ReconciliationError {
    pub fn remote_read(ticket: &str, source: &anyhow::Error) -> Self {
        Self::RemoteRead {
            ticket: ticket.to_string(),
            reason: format!("{source:#}"),
        }
    }

    pub fn remote_write(ticket: &str, source: &anyhow::Error) -> Self {
        Self::RemoteWrite {
            ticket: ticket.to_string(),
            reason: format!("{source:#}"),
        }
    }

    /// The underlying failure, without the ticket prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::ExportUnavailable(reason) | Self::NoteLookup(reason) => reason,
            Self::RemoteRead { reason, .. } | Self::RemoteWrite { reason, .. } => reason,
        }
    }
}
