//! Main TUI runner - entry point and event loop

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use purchases_app::process::process_message;
use purchases_app::signals;
use purchases_app::{AppState, Message};
use purchases_core::{Error, OrderSource, Result};

use crate::{event, render};

/// Run the interactive purchase-history screen until the user quits
pub async fn run(mut state: AppState) -> Result<()> {
    install_panic_hook();

    info!(
        "Starting TUI with {} orders (search={:?}, status={})",
        state.catalog.len(),
        state.filter.search,
        state.filter.status.key()
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    // Unified message channel (signal handler posts Quit here)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    signals::spawn_signal_handler(msg_tx);

    let result = run_loop(&mut term, &mut state, msg_rx);

    if let Err(e) = ratatui::try_restore() {
        warn!("{}", Error::TerminalRestore(e.to_string()));
    }

    log_outcome(&result);
    result
}

/// Record how the loop ended: fatal errors at error level, the rest as warnings
fn log_outcome(result: &Result<()>) {
    if let Err(e) = result {
        if e.is_fatal() {
            error!("TUI loop failed: {}", e);
        } else {
            warn!("TUI loop ended with error: {}", e);
        }
    }
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    while !state.should_quit() {
        // External messages (signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message);
        }
    }

    info!("TUI loop exited");
    Ok(())
}

/// Install a panic hook that restores the terminal before reporting
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
