use tokio::task::JoinHandle;

use super::heading;
use crate::state::AppState;
use crate::store::FormState;
use crate::submission::SubmitOutcome;

/// "Tailor": runs the submission in the background so input stays responsive.
/// Repeated presses start independent submissions; only the latest may land.
pub fn tailor(state: &AppState) -> JoinHandle<SubmitOutcome> {
    let store = state.store.clone();
    let client = state.client.clone();
    tokio::spawn(async move { store.handle_tailor(&client).await })
}

/// "Reset".
pub fn reset(state: &AppState) {
    state.store.clear_all();
}

/// "Copy" on the response panel.
pub async fn copy(state: &AppState) {
    // Failure is already logged and shown as a banner.
    let _ = state.store.handle_copy(state.clipboard.as_ref()).await;
}

/// Banner strip under the buttons.
pub fn render(state: &FormState) -> String {
    let mut out = heading("Actions");
    out.push_str("\n  `tailor`   `reset`   `copy`");
    if !state.message.is_empty() {
        out.push_str(&format!("\n  * {}", state.message));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::config::Config;
    use crate::store::messages::TAILOR_FAILED;
    use crate::store::FormStore;
    use crate::tailor_client::TailorClient;

    fn app_state() -> AppState {
        AppState {
            store: FormStore::new(),
            client: TailorClient::new("").unwrap(),
            clipboard: Arc::new(MemoryClipboard::new()),
            config: Config {
                api_base_url: String::new(),
                clipboard_command: None,
                rust_log: "info".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_tailor_without_base_url_fails_with_banner() {
        let state = app_state();
        let outcome = tailor(&state).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert!(render(&state.store.snapshot()).contains(TAILOR_FAILED));
    }

    #[tokio::test]
    async fn test_reset_clears_form() {
        let state = app_state();
        state.store.set_jd_text("x");
        reset(&state);
        assert_eq!(state.store.snapshot(), FormState::default());
    }
}
