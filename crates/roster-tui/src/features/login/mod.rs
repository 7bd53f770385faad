//! Login screen feature slice.
//!
//! Collects credentials and validates them locally. A valid submission is
//! handed to the reducer, which performs the session transition.

mod render;
mod state;
mod update;

pub use render::render_login;
pub use state::{LoginField, LoginState, TextField};
pub use update::{LoginOutcome, handle_login_key, handle_login_paste};
