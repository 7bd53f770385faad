//! CLI command handlers.

pub mod config;
pub mod status;
pub mod tui;
pub mod users;
