/// Authenticated user record carried by the login transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Authentication status, identity and session-reset counter.
///
/// Only `SessionStore` can change it, so `user.is_some() == is_authenticated`
/// holds for every value an observer can see.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthState {
    is_authenticated: bool,
    user: Option<Identity>,
    session_key: u64,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn user(&self) -> Option<&Identity> {
        self.user.as_ref()
    }

    pub fn session_key(&self) -> u64 {
        self.session_key
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_authenticated {
            SessionPhase::LoggedIn
        } else {
            SessionPhase::LoggedOut
        }
    }
}

/// Logical session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    LoggedOut,
    LoggedIn,
}

/// Handle returned by `SessionStore::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&AuthState) + Send>;

/// Single source of truth for authentication state.
///
/// Transitions apply in call order. Subscribers run synchronously after the
/// state is fully updated and before the transition returns.
pub struct SessionStore {
    state: AuthState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SessionStore {
    /// Creates a store in the initial `LoggedOut` state with key 0.
    pub fn new() -> Self {
        Self {
            state: AuthState::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Marks the session as authenticated for `identity`.
    ///
    /// Logging in while already logged in replaces the current user. The
    /// session key is never touched.
    pub fn login(&mut self, identity: Identity) {
        tracing::info!(
            email = %identity.email,
            session_key = self.state.session_key,
            "session login"
        );
        self.state.is_authenticated = true;
        self.state.user = Some(identity);
        self.notify();
    }

    /// Clears the session and bumps the session key.
    ///
    /// The key is bumped on every call, including redundant logouts.
    pub fn logout(&mut self) {
        self.state.is_authenticated = false;
        self.state.user = None;
        self.state.session_key += 1;
        tracing::info!(session_key = self.state.session_key, "session logout");
        self.notify();
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> AuthState {
        self.state.clone()
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Registers a listener called after every transition.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&AuthState) + Send + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        let state = &self.state;
        for (_, listener) in &mut self.listeners {
            listener(state);
        }
    }
}
