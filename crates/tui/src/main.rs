//! Prompt Guide - interactive terminal guide to writing effective AI prompts.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging, configuration, the terminal and the async runtime.
//! - Run the main event loop.
//!
//! Invariants:
//! - Configuration errors are reported before the terminal enters raw mode.
//! - Logs go to a daily rolling file, never to stdout.
//! - Mouse capture is enabled unless `--no-mouse` is given.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use prompt_guide::action::Action;
use prompt_guide::app::App;
use prompt_guide::cli::Cli;
use prompt_guide::input::Keymap;
use prompt_guide::runtime::{config::load_config, terminal::TerminalGuard};
use prompt_guide::ui::Toast;
use prompt_guide_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS, LOG_FILE_NAME};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, LOG_FILE_NAME);
    // The guard must live for all of main() so buffered logs are flushed.
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting prompt-guide");

    let config = load_config(&cli)?;

    let (keymap, keymap_error) = match Keymap::from_overrides(&config.keybind_overrides) {
        Ok(keymap) => (keymap, None),
        Err(e) => {
            tracing::warn!(error = %e, "Invalid keybinding overrides. Using defaults.");
            (Keymap::default(), Some(e))
        }
    };
    if keymap.override_count() > 0 {
        tracing::info!(count = keymap.override_count(), "Keybinding overrides active");
    }

    let mut app = App::new(config.theme, keymap);
    if let Some(e) = keymap_error {
        app.toasts.push(Toast::warning(format!(
            "Keybinding overrides ignored: {e}"
        )));
    }

    let _terminal_guard = TerminalGuard::enter(!cli.no_mouse)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let (tx, mut rx) = mpsc::channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    let input_task = tokio::spawn(forward_terminal_events(tx));

    let mut tick_interval =
        tokio::time::interval(tokio::time::Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            received = rx.recv() => {
                let Some(action) = received else {
                    tracing::warn!("Input stream closed");
                    break;
                };

                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };

                if let Some(action) = action {
                    if matches!(action, Action::Quit) {
                        tracing::info!("Quit requested");
                        break;
                    }
                    app.update(action);
                }
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    input_task.abort();
    terminal.show_cursor()?;
    tracing::info!("Shutting down");
    Ok(())
}

/// Read crossterm events and forward them as Actions.
///
/// Key and resize events wait for channel capacity so user intent is never
/// lost; mouse events are dropped when the channel is full.
async fn forward_terminal_events(tx: mpsc::Sender<Action>) {
    let mut reader = EventStream::new();

    while let Some(event) = reader.next().await {
        let event = match event {
            Ok(event) => event,
            Err(e) => {
                tracing::error!(error = %e, "Terminal event stream failed");
                break;
            }
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if tx.send(Action::Input(key)).await.is_err() {
                    break;
                }
            }
            Event::Resize(width, height) => {
                if tx.send(Action::Resize(width, height)).await.is_err() {
                    break;
                }
            }
            Event::Mouse(mouse) => match tx.try_send(Action::Mouse(mouse)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    tracing::debug!("Input channel full, dropping mouse event");
                }
                Err(TrySendError::Closed(_)) => break,
            },
            _ => {}
        }
    }
}
