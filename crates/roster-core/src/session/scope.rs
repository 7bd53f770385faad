/// View state bound to one session key.
///
/// Holds at most one instance. Binding to a key other than the bound one
/// drops the old instance and builds a fresh one, which is how logout resets
/// ephemeral view state without an explicit reset API on the view itself.
#[derive(Debug)]
pub struct SessionScoped<T> {
    slot: Option<(u64, T)>,
}

impl<T> Default for SessionScoped<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SessionScoped<T> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Returns the instance for `key`, building it with `make` if the slot is
    /// empty or bound to a different key.
    ///
    /// The second element is true when a new instance was built.
    pub fn bind_with<F>(&mut self, key: u64, make: F) -> (&mut T, bool)
    where
        F: FnOnce() -> T,
    {
        let rebuilt = !matches!(&self.slot, Some((bound, _)) if *bound == key);
        if rebuilt && let Some((old, _)) = self.slot.take() {
            tracing::debug!(old_key = old, new_key = key, "session scope rebind");
        }
        let (_, value) = self.slot.get_or_insert_with(|| (key, make()));
        (value, rebuilt)
    }

    /// Instance bound to `key`, if any.
    pub fn get(&self, key: u64) -> Option<&T> {
        match &self.slot {
            Some((bound, value)) if *bound == key => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: u64) -> Option<&mut T> {
        match &mut self.slot {
            Some((bound, value)) if *bound == key => Some(value),
            _ => None,
        }
    }

    /// Key of the bound instance.
    pub fn bound_key(&self) -> Option<u64> {
        self.slot.as_ref().map(|(key, _)| *key)
    }

    /// Drops the instance. Returns it if one was bound.
    pub fn reset(&mut self) -> Option<T> {
        self.slot.take().map(|(_, value)| value)
    }
}

impl<T: Default> SessionScoped<T> {
    /// Same as `bind_with` using `T::default()`.
    pub fn bind(&mut self, key: u64) -> &mut T {
        self.bind_with(key, T::default).0
    }
}
