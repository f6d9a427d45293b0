//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Routing
//!
//! ```text
//! TuiEvent ─┬─ ForceQuit ───────────────────────────→ Action::Quit
//!           ├─ alert open? ─→ Alert ─→ Dismiss ─────→ Action::DismissAlert
//!           ├─ Escape ──────────────────────────────→ Action::Quit
//!           └─ NewMovieFormView ─→ Submit ─→ form.submit(&app.movies)
//!                                             ├─→ Action::AddMovie
//!                                             └─→ Action::SubmitRejected
//! ```
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms and only redraws after
//! an event (key, paste, or resize).
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::form::SubmitError;
use crate::core::movie::Movie;
use crate::core::state::App;
use crate::core::validation::UrlErrorPolicy;
use crate::tui::component::EventHandler;
use crate::tui::components::{Alert, AlertEvent, FormViewEvent, NewMovieFormView};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub form: NewMovieFormView,
}

impl TuiState {
    pub fn new(policy: UrlErrorPolicy) -> Self {
        Self {
            form: NewMovieFormView::new(policy),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is harmlessly ignored by terminals without it
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!(
            "Terminal modes enabled (bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub fn run(config: &ResolvedConfig, movies: Vec<Movie>) -> std::io::Result<()> {
    let mut app = App::new(movies);
    let mut tui = TuiState::new(config.url_errors);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&app, &mut tui, &event) {
                if update(&mut app, action) == Effect::Quit {
                    break 'event_loop;
                }
            }
        }
    }

    info!("Exiting with {} movies in the catalog", app.movies.len());
    ratatui::restore();
    Ok(())
}

/// Decide what a terminal event means, given the current state.
fn route_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => return None,
        TuiEvent::ForceQuit => return Some(Action::Quit),
        _ => {}
    }

    // The alert is blocking: nothing reaches the form until it closes
    if let Some(message) = &app.alert {
        return match Alert::new(message).handle_event(event) {
            Some(AlertEvent::Dismiss) => Some(Action::DismissAlert),
            None => None,
        };
    }

    if matches!(event, TuiEvent::Escape) {
        return Some(Action::Quit);
    }

    match tui.form.handle_event(event)? {
        FormViewEvent::Submit => Some(tui.form.submit(&app.movies)),
        FormViewEvent::SubmitDisabled => {
            debug!("Submit requested while Add is disabled");
            Some(Action::SubmitRejected(SubmitError::Incomplete))
        }
        FormViewEvent::Changed => None,
    }
}
