//! Callboard TUI entry point.

use callboard_tui::config::TuiConfig;
use callboard_tui::error::TuiError;
use callboard_tui::events::TuiEvent;
use callboard_tui::logging;
use callboard_tui::state::App;
use callboard_tui::views::render_view;
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    let _log_guard = logging::init(&config)?;
    let poll = Duration::from_millis(config.input_poll_ms);
    let mut app = App::new(config);
    info!(calls = app.store.len(), "Callboard started");

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone(), poll);

    // Redraws with no input so stale notifications leave the footer.
    let mut redraw = tokio::time::interval(Duration::from_secs(1));
    redraw.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = redraw.tick() => {}
            event = event_rx.recv() => {
                let Some(event) = event else {
                    break;
                };
                if app.handle_event(event) {
                    break;
                }
                app.sync_ticker(&event_tx);
            }
        }
    }

    app.shutdown();
    info!(calls = app.store.len(), "Callboard stopped");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

/// Terminal input runs on its own thread; crossterm reads block.
fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>, poll: Duration) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(poll) {
            if let Ok(evt) = event::read() {
                let sent = match evt {
                    CrosstermEvent::Key(key) => sender.blocking_send(TuiEvent::Input(key)),
                    CrosstermEvent::Resize(width, height) => {
                        sender.blocking_send(TuiEvent::Resize { width, height })
                    }
                    _ => Ok(()),
                };
                if sent.is_err() {
                    break;
                }
            }
        }
    });
}
