//! Authentication session lifecycle.
//!
//! ## Module Structure
//!
//! - `store.rs`: `SessionStore`, the single owner and mutator of `AuthState`
//! - `scope.rs`: `SessionScoped<T>`, view state bound to a session key
//!
//! ## State Machine
//!
//! ```text
//!            login(id)                    login(id')
//!   LoggedOut ────────▶ LoggedIn ◀────────────┐
//!      ▲  │               │  └────────────────┘
//!      │  └─ logout() ─┐  │ logout()
//!      │     key += 1  │  │ key += 1
//!      └───────────────┴──┘
//! ```
//!
//! Every logout bumps `session_key`, even when already logged out. Anything
//! held in a `SessionScoped` slot is rebuilt once it observes the new key.

mod scope;
mod store;

pub use scope::SessionScoped;
pub use store::{AuthState, Identity, SessionPhase, SessionStore, SubscriptionId};
