use std::sync::Arc;

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::store::FormStore;
use crate::tailor_client::TailorClient;

/// Everything the session hands to components and actions.
#[derive(Clone)]
pub struct AppState {
    pub store: FormStore,
    pub client: TailorClient,
    /// Platform clipboard in the binary, in-memory in tests.
    pub clipboard: Arc<dyn Clipboard>,
    pub config: Config,
}
