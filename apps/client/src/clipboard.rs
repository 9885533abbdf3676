//! Clipboard seam. The session uses the platform copy command; tests use the
//! in-memory implementation.

use std::process::Stdio;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::errors::ClipboardError;
use crate::store::messages::{COPY_FAILED, COPY_MESSAGE_TTL, COPY_SUCCEEDED};
use crate::store::FormStore;

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Pipes text into a copy command such as `pbcopy`, `wl-copy` or `xclip`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    command: Option<Vec<String>>,
}

impl CommandClipboard {
    /// Uses `override_command` when given, otherwise the first command that fits the platform.
    pub fn detect(override_command: Option<&str>) -> Self {
        let command = override_command
            .map(|cmd| cmd.split_whitespace().map(String::from).collect::<Vec<_>>())
            .filter(|argv| !argv.is_empty())
            .or_else(default_command);
        debug!(?command, "clipboard command selected");
        Self { command }
    }
}

fn default_command() -> Option<Vec<String>> {
    let argv: &[&str] = if cfg!(target_os = "macos") {
        &["pbcopy"]
    } else if cfg!(target_os = "windows") {
        &["clip"]
    } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        &["wl-copy"]
    } else if std::env::var_os("DISPLAY").is_some() {
        &["xclip", "-selection", "clipboard"]
    } else {
        return None;
    };
    Some(argv.iter().map(|s| s.to_string()).collect())
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let argv = self.command.as_ref().ok_or(ClipboardError::Unavailable)?;
        let (program, args) = argv.split_first().ok_or(ClipboardError::Unavailable)?;

        // Copy helpers such as xclip fork a child that keeps serving the selection and
        // inherits our stdio; any pipe other than stdin would never reach EOF.
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).await?;
            stdin.shutdown().await?;
        }

        let status = child.wait().await?;
        if !status.success() {
            return Err(ClipboardError::Command {
                command: argv.join(" "),
                reason: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails.
    pub fn failing() -> Self {
        Self {
            contents: Mutex::new(None),
            fail: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Unavailable);
        }
        *self
            .contents
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}

impl FormStore {
    /// Copies the response text. Both outcomes show a short-lived banner.
    pub async fn handle_copy(&self, clipboard: &dyn Clipboard) -> Result<(), ClipboardError> {
        let text = self.snapshot().response_text;
        match clipboard.write_text(&text).await {
            Ok(()) => {
                debug!(bytes = text.len(), "response copied");
                self.flash_message(COPY_SUCCEEDED, COPY_MESSAGE_TTL);
                Ok(())
            }
            Err(e) => {
                warn!("Copy failed: {e}");
                self.flash_message(COPY_FAILED, COPY_MESSAGE_TTL);
                Err(e)
            }
        }
    }
}
