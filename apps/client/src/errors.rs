use thiserror::Error;

/// Failures of the outbound tailoring request.
/// Every variant ends up as the same transient banner; the detail goes to the log.
#[derive(Debug, Error)]
pub enum TailorError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Tailor service returned status {status}: {body}")]
    Status { status: u16, body: String },
}

impl TailorError {
    /// Short label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            TailorError::Transport(e) if e.is_builder() => "invalid_endpoint",
            TailorError::Transport(e) if e.is_connect() => "connect",
            TailorError::Transport(_) => "transport",
            TailorError::Status { .. } => "status",
        }
    }
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("No clipboard command available on this platform")]
    Unavailable,

    #[error("Clipboard command '{command}' failed: {reason}")]
    Command { command: String, reason: String },

    #[error("Clipboard I/O error: {0}")]
    Io(#[from] std::io::Error),
}
