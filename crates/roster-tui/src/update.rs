//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use std::time::Instant;

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use roster_core::session::Identity;

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::home::{self, HomeOutcome, HomeState};
use crate::login::{self, LoginOutcome, LoginState};
use crate::route::Route;
use crate::state::AppState;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            schedule_probe(app, Instant::now())
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            if app.tasks.state_mut(kind).finish_if_active(completed.id) {
                update(app, *completed.result)
            } else {
                tracing::debug!(?kind, id = completed.id.0, "discarding inactive task result");
                vec![]
            }
        }
        UiEvent::UsersLoaded {
            session_key,
            result,
        } => {
            match app.home.get_mut(session_key) {
                Some(home) => home.apply_users(result),
                None => tracing::debug!(session_key, "discarding users for torn-down session"),
            }
            vec![]
        }
        UiEvent::UsersCancelled { session_key } => {
            if let Some(home) = app.home.get_mut(session_key) {
                home.abort_fetch();
            }
            vec![]
        }
        UiEvent::NetworkChecked(status) => {
            if app.network.record(status) {
                tracing::info!(?status, "connectivity changed");
            }
            vec![]
        }
    }
}

/// Applies a successful login and mounts the home instance for the session.
pub fn apply_login(app: &mut AppState, identity: Identity) -> Vec<UiEffect> {
    app.session.login(identity);
    app.login = LoginState::default();
    mount_home(app)
}

/// Logs out, tears down the session-scoped home and cancels its fetch.
pub fn apply_logout(app: &mut AppState) -> Vec<UiEffect> {
    let token = app.tasks.users_fetch.take_cancel();
    app.session.logout();
    app.home.reset();
    vec![UiEffect::CancelTask {
        kind: TaskKind::UsersFetch,
        token,
    }]
}

/// Binds the home slot to the current session key. A freshly built instance
/// starts its initial user fetch.
fn mount_home(app: &mut AppState) -> Vec<UiEffect> {
    let session_key = app.session.state().session_key();
    let (home, rebuilt) = app.home.bind_with(session_key, HomeState::default);
    if !rebuilt {
        return vec![];
    }
    home.begin_fetch(false);
    vec![UiEffect::FetchUsers {
        task: Some(app.task_seq.next_id()),
        session_key,
    }]
}

fn refresh_users(app: &mut AppState) -> Vec<UiEffect> {
    if app.tasks.users_fetch.is_running() {
        return vec![];
    }
    let session_key = app.session.state().session_key();
    let Some(home) = app.home.get_mut(session_key) else {
        return vec![];
    };
    if home.is_fetching() {
        return vec![];
    }
    home.begin_fetch(true);
    vec![UiEffect::FetchUsers {
        task: Some(app.task_seq.next_id()),
        session_key,
    }]
}

fn schedule_probe(app: &mut AppState, now: Instant) -> Vec<UiEffect> {
    if app.tasks.network_probe.is_running() || !app.network.probe_due(now) {
        return vec![];
    }
    app.network.mark_probe_started(now);
    vec![UiEffect::ProbeNetwork {
        task: Some(app.task_seq.next_id()),
    }]
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Paste(text) => {
            if app.route() == Route::Login {
                login::handle_login_paste(&mut app.login, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match app.route() {
        Route::Login => {
            let min_len = app.config.min_password_len;
            match login::handle_login_key(&mut app.login, key, min_len) {
                LoginOutcome::None => vec![],
                LoginOutcome::Submitted(identity) => apply_login(app, identity),
                LoginOutcome::Quit => vec![UiEffect::Quit],
            }
        }
        Route::Home => {
            let session_key = app.session.state().session_key();
            let Some(home) = app.home.get_mut(session_key) else {
                return vec![];
            };
            match home::handle_home_key(home, key) {
                HomeOutcome::None => vec![],
                HomeOutcome::Refresh => refresh_users(app),
                HomeOutcome::Logout => apply_logout(app),
                HomeOutcome::Quit => vec![UiEffect::Quit],
            }
        }
    }
}
