use std::sync::Arc;

use anyhow::{Result, bail};
use is_terminal::IsTerminal;
use medboard_engine::AppController;
use medboard_runtime::{Backend, Config, Dispatcher, HttpBackend};
use tokio::sync::mpsc;

use crate::presentation::tui::TuiApp;

pub fn handle(config: &Config) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        bail!("the dashboard needs an interactive terminal; use `medboard call` for scripted access");
    }

    let backend: Arc<dyn Backend> = Arc::new(HttpBackend::from_config(config)?);
    let settings = config.controller_settings();
    tracing::info!(
        base_url = %config.base_url,
        debounce_ms = config.debounce_ms,
        stale_policy = ?settings.stale,
        "starting dashboard"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let (tx, rx) = mpsc::unbounded_channel();
        let dispatcher = Dispatcher::new(backend, tx);
        TuiApp::new(AppController::new(settings), dispatcher)
            .run(rx)
            .await
    })
}
