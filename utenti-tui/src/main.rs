use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use utenti_core::{build_client, spawn_fetch, Config, FetchOutcome};
use utenti_tui::{App, UI};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load config (defaults when no file exists)
    let config = Config::load()?;

    // Kick off the one-shot fetch before touching the terminal
    let client = build_client(Duration::from_secs(config.request_timeout_secs))?;
    let fetch_rx = spawn_fetch(client, config.endpoint.clone());

    // Create app state
    let mut app = App::new();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create UI
    let mut ui = UI::new();

    // Main event loop
    let res = run_event_loop(&mut terminal, &mut app, &mut ui, fetch_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

async fn run_event_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    ui: &mut UI,
    mut fetch_rx: mpsc::UnboundedReceiver<FetchOutcome>,
) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|f| ui.render(f, app))?;

        // Drain the fetch channel (at most one outcome ever arrives)
        while let Ok(outcome) = fetch_rx.try_recv() {
            app.finish_fetch(outcome);
        }

        // Poll for events with timeout
        if let Some(event) = App::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => {
                    app.handle_key_event(key);
                }
                Event::Resize(_, _) => {
                    // Terminal resized, will re-render on next loop
                }
                _ => {}
            }
        }

        // Exit if requested
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
