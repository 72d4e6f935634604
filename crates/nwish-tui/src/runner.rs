//! Main TUI runner - entry point and event loop
//!
//! - `run`: sets up the terminal, background tasks and state
//! - `run_loop`: drains background messages, renders, then waits for the
//!   next terminal event or spinner tick

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use nwish_app::config::Settings;
use nwish_app::message::Message;
use nwish_app::state::AppState;
use nwish_app::{pages, process, signals, UpdateAction};
use nwish_core::prelude::*;
use nwish_core::Document;
use tokio::sync::mpsc;

use crate::theme::Theme;
use crate::tick::TickScheduler;
use crate::{event, render, terminal};

/// Longest a single event poll may block, so background messages are not
/// held up
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Run the TUI for `document`
pub async fn run(document: Document, settings: Settings) -> Result<()> {
    let mouse_capture = settings.ui.mouse;

    // Install panic hook for terminal restoration
    terminal::install_panic_hook(mouse_capture);

    let theme = Theme::from_settings(&settings.theme);
    info!(
        "Starting screen: render_mode={}, mouse={}, {} nav entries",
        settings.ui.render_mode,
        mouse_capture,
        settings.nav.len()
    );

    // Unified message channel for signals and page loading
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(16);
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());
    pages::spawn_page_loader(settings.nav.clone(), msg_tx);

    let mut state = AppState::new(document, settings);

    // Initialize terminal
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if mouse_capture {
        if let Err(e) = terminal::enable_mouse_capture() {
            warn!("{}", e);
        }
    }

    let result = run_loop(&mut term, &mut state, &theme, msg_rx);

    if mouse_capture {
        if let Err(e) = terminal::disable_mouse_capture() {
            warn!("{}", e);
        }
    }
    if let Err(e) = ratatui::try_restore() {
        error!("{}", Error::TerminalRestore(e.to_string()));
    }
    signal_task.abort();

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    theme: &Theme,
    mut msg_rx: mpsc::Receiver<Message>,
) -> Result<()> {
    let mut ticks = TickScheduler::new();
    if let Some(action) = state.init() {
        if let Some(follow_up) = handle_action(terminal, &mut ticks, action)? {
            dispatch(terminal, state, &mut ticks, follow_up)?;
        }
    }

    while !state.should_quit() {
        // Process background messages (signal handler, page loader)
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(terminal, state, &mut ticks, msg)?;
        }
        if state.should_quit() {
            break;
        }

        // Render
        terminal.draw(|frame| render::view(frame, state, theme))?;

        let now = Instant::now();
        if ticks.take_due(now) {
            dispatch(terminal, state, &mut ticks, Message::Tick)?;
            continue;
        }

        // Handle terminal events
        if let Some(message) = event::poll(ticks.poll_timeout(now, IDLE_POLL))? {
            dispatch(terminal, state, &mut ticks, message)?;
        }
    }

    info!("Event loop finished");
    Ok(())
}

/// Run a message through the update loop and carry out the resulting actions.
/// Actions that produce a message (a size query) feed it back in order.
fn dispatch(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    ticks: &mut TickScheduler,
    message: Message,
) -> Result<()> {
    let mut pending = VecDeque::from([message]);
    while let Some(msg) = pending.pop_front() {
        for action in process::process_message(state, msg) {
            if let Some(follow_up) = handle_action(terminal, ticks, action)? {
                pending.push_back(follow_up);
            }
        }
    }
    Ok(())
}

/// `TERM` as seen by this process, for diagnosing size query failures
fn terminal_hint() -> String {
    std::env::var("TERM").unwrap_or_else(|_| "TERM unset".to_string())
}

/// Perform one action; returns a message when the action observes the
/// terminal
fn handle_action(
    terminal: &mut ratatui::DefaultTerminal,
    ticks: &mut TickScheduler,
    action: UpdateAction,
) -> Result<Option<Message>> {
    match action {
        UpdateAction::ScheduleTick(delay) => {
            ticks.schedule(Instant::now(), delay);
            Ok(None)
        }
        UpdateAction::Resync => {
            trace!("Resync: clearing terminal");
            terminal.clear().context("Clearing terminal for resync")?;
            Ok(None)
        }
        UpdateAction::RequestSize => {
            let (width, height) = crossterm::terminal::size()
                .with_context(|| format!("Querying terminal size ({})", terminal_hint()))?;
            debug!("Terminal size {}x{}", width, height);
            Ok(Some(Message::Resize { width, height }))
        }
    }
}
