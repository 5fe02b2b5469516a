//! tably-tui - Terminal UI for Tably
//!
//! Browse a restaurant catalog progressively: restaurant list, the open
//! restaurant's menu, and the open item's detail.

use tably_tui::{
    app::{event::EventHandler, reduce, Action, AppState},
    error::Result,
    services::{CatalogEvent, ServiceHandle},
    terminal::{install_panic_hook, restore_terminal, setup_terminal},
    ui,
};

fn main() -> Result<()> {
    // Logging is opt-in: stderr output garbles the alternate screen unless
    // the user redirects it
    if std::env::var_os("TABLY_LOG_LEVEL").is_some()
        || std::env::var_os("TABLY_LOG_FORMAT").is_some()
    {
        libtably::logging::init_default();
    }

    let config = match libtably::Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "config not loaded, using defaults");
            libtably::Config::default()
        }
    };

    let mut services = ServiceHandle::new(&config)?;

    // Install panic hook to restore terminal on panic
    install_panic_hook();

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &mut services);

    restore_terminal(terminal)?;

    result
}

fn run_app(terminal: &mut tably_tui::terminal::Tui, services: &mut ServiceHandle) -> Result<()> {
    let mut state = AppState::new();

    // One-shot load on mount; re-renders never re-trigger it
    let catalog_rx = services.start_load();

    let event_handler = EventHandler::new(state.config.tick_rate_ms);

    loop {
        terminal.draw(|frame| {
            ui::render(frame, &state);
        })?;

        let action: Action = event_handler.next()?.into();
        state = reduce(state, action);

        // Apply the load outcome once it arrives
        if let Some(ref rx) = catalog_rx {
            while let Ok(event) = rx.try_recv() {
                let action = match event {
                    CatalogEvent::Loaded(catalog) => Action::CatalogLoaded(catalog),
                    CatalogEvent::LoadFailed(error) => Action::CatalogLoadFailed(error),
                };
                state = reduce(state, action);
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
