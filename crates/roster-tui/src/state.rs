//! Application state composition.
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── session: SessionStore            (auth state, session key)
//! ├── login: LoginState                (credential form)
//! ├── home: SessionScoped<HomeState>   (counter, users; rebuilt per session)
//! ├── network: NetworkState            (connectivity banner)
//! ├── task_seq: TaskSeq                (async task id generator)
//! └── tasks: Tasks                     (task lifecycle state)
//! ```
//!
//! The session store is created here once and lives as long as the runtime.
//! Screens read it; only the reducer calls its transitions.

use roster_core::config::Config;
use roster_core::session::{SessionScoped, SessionStore};

use crate::common::{TaskSeq, Tasks};
use crate::home::HomeState;
use crate::login::LoginState;
use crate::network::NetworkState;
use crate::route::Route;

pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    pub config: Config,
    /// Single owner of authentication state.
    pub session: SessionStore,
    pub login: LoginState,
    /// Home screen state keyed by session key.
    pub home: SessionScoped<HomeState>,
    pub network: NetworkState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let network = NetworkState::new(config.probe_interval());
        Self {
            should_quit: false,
            config,
            session: SessionStore::new(),
            login: LoginState::default(),
            home: SessionScoped::new(),
            network,
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
        }
    }

    pub fn route(&self) -> Route {
        Route::for_auth(self.session.state())
    }

    /// Home instance for the current session, if mounted.
    pub fn current_home(&self) -> Option<&HomeState> {
        self.home.get(self.session.state().session_key())
    }
}
