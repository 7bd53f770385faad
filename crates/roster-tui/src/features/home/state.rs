use roster_core::users::User;

/// User-list loading phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    /// First load; the list area shows a spinner.
    Loading,
    /// Reload requested by the user; the current list stays visible.
    Refreshing,
}

/// Per-session home screen state.
#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub counter: u32,
    pub users: Vec<User>,
    pub load: LoadState,
    pub error: Option<String>,
    /// Index of the first visible user.
    pub scroll: usize,
    /// Set once a fetch has completed, successfully or not.
    pub loaded_once: bool,
}

impl HomeState {
    pub fn is_fetching(&self) -> bool {
        self.load != LoadState::Idle
    }

    pub fn begin_fetch(&mut self, refresh: bool) {
        self.error = None;
        self.load = if refresh && self.loaded_once {
            LoadState::Refreshing
        } else {
            LoadState::Loading
        };
    }

    pub fn apply_users(&mut self, result: Result<Vec<User>, String>) {
        self.load = LoadState::Idle;
        self.loaded_once = true;
        match result {
            Ok(users) => {
                self.users = users;
                self.error = None;
                self.scroll = self.scroll.min(self.users.len().saturating_sub(1));
            }
            Err(message) => {
                self.error = Some(if message.is_empty() {
                    "Failed to load users.".to_string()
                } else {
                    message
                });
            }
        }
    }

    /// Marks an interrupted fetch as finished without touching data.
    pub fn abort_fetch(&mut self) {
        self.load = LoadState::Idle;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.users.len().saturating_sub(1);
        self.scroll = (self.scroll + lines).min(max);
    }
}
