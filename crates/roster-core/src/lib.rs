//! Core Roster library (session store, config, user directory, connectivity).

pub mod config;
pub mod counter;
pub mod credentials;
pub mod logging;
pub mod network;
pub mod session;
pub mod users;
