//! Transient banners: a message is written, then cleared by a timer task unless
//! something newer has replaced it in the meantime.

use std::time::Duration;

use super::FormStore;

pub const COPY_MESSAGE_TTL: Duration = Duration::from_millis(1500);
pub const TAILOR_MESSAGE_TTL: Duration = Duration::from_millis(3000);

pub const COPY_SUCCEEDED: &str = "Copied response to clipboard.";
pub const COPY_FAILED: &str = "Could not copy response to clipboard.";
pub const TAILOR_FAILED: &str = "Tailoring failed. Please try again.";

impl FormStore {
    /// Sets `message` without a timer. Pending timers will no longer clear it.
    pub fn set_message(&self, text: impl Into<String>) {
        let text = text.into();
        self.mutate(|inner| {
            inner.message_token += 1;
            inner.form.message = text;
        });
    }

    /// Sets `message` and schedules it to clear after `ttl`. Must run inside a Tokio runtime.
    pub fn flash_message(&self, text: impl Into<String>, ttl: Duration) {
        let text = text.into();
        let token = self.mutate(|inner| {
            inner.message_token += 1;
            inner.form.message = text;
            inner.message_token
        });

        self.schedule_expiry(token, ttl);
    }

    /// Flashes `text` only while `generation` is still the current submission.
    /// The check and the write share one lock, so a reset in between cannot be overwritten.
    pub(crate) fn flash_for_submission(
        &self,
        generation: u64,
        text: impl Into<String>,
        ttl: Duration,
    ) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        let text = text.into();
        let token = self.mutate(|inner| {
            if inner.generation != generation {
                return None;
            }
            inner.message_token += 1;
            inner.form.message = text;
            Some(inner.message_token)
        });

        match token {
            Some(token) => {
                self.schedule_expiry(token, ttl);
                true
            }
            None => false,
        }
    }

    fn schedule_expiry(&self, token: u64, ttl: Duration) {
        let store = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            store.expire_message(token);
        });
    }

    fn expire_message(&self, token: u64) {
        if self.lock().message_token != token {
            return;
        }
        self.mutate(|inner| {
            if inner.message_token == token {
                inner.form.message.clear();
            }
        });
    }
}
