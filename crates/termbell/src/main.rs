mod bootstrap;

use anyhow::Result;
use bell_core::settings::Settings;
use bell_runtime::listener::PushListener;
use bell_ui::app::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("termbell v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        "Server: {}, Theme: {}, Capacity: {}",
        settings.server,
        settings.theme,
        settings.capacity
    );

    let listener = PushListener::new(settings.server.clone());
    let (rx, handle) = listener.start();

    let app = App::new(&settings.theme, &settings.timezone, settings.capacity);

    // Run the TUI event loop. The loop exits on 'q' / Ctrl+C inside the TUI.
    // We also listen for Ctrl+C at the OS level so that signals received
    // while the terminal is in raw mode are handled cleanly.
    tokio::select! {
        result = app.run(rx) => {
            handle.abort();
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Ctrl+C received; shutting down listener task");
            handle.abort();
        }
    }

    Ok(())
}
