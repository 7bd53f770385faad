//! Home screen feature slice.
//!
//! Everything here is session-scoped: the reducer keeps `HomeState` in a
//! `SessionScoped` slot, so a logout discards the counter, the loaded users
//! and any pending error together.

mod render;
mod state;
mod update;

pub use render::render_home;
pub use state::{HomeState, LoadState};
pub use update::{HomeOutcome, handle_home_key};
