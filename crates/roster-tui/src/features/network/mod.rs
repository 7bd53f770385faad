//! Connectivity indicator feature slice.
//!
//! The reducer schedules a probe on Tick whenever `probe_due` says so; the
//! banner is hidden until the first probe completes.

mod render;
mod state;

pub use render::render_network_banner;
pub use state::NetworkState;
