//! Feature slices.
//!
//! Each slice owns its state, key handling and rendering.

pub mod home;
pub mod login;
pub mod network;
