mod clipboard;
mod commands;
mod components;
mod config;
mod errors;
mod models;
mod session;
mod state;
mod store;
mod submission;
mod tailor_client;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::clipboard::CommandClipboard;
use crate::config::Config;
use crate::state::AppState;
use crate::store::FormStore;
use crate::tailor_client::TailorClient;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout belongs to the rendered form.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Resume Tailor client v{}", env!("CARGO_PKG_VERSION"));

    let client = TailorClient::new(&config.api_base_url)?;
    info!("Tailor endpoint: {}", client.endpoint());

    let clipboard = Arc::new(CommandClipboard::detect(config.clipboard_command.as_deref()));

    let state = AppState {
        store: FormStore::new(),
        client,
        clipboard,
        config,
    };

    session::run(state).await
}
