//! Top-level screen selection.

use roster_core::session::AuthState;

/// Which screen the router shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    /// Session-scoped home screen.
    Home,
}

impl Route {
    pub fn for_auth(auth: &AuthState) -> Self {
        if auth.is_authenticated() {
            Route::Home
        } else {
            Route::Login
        }
    }
}
