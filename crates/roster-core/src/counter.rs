//! Home-screen counter reducer.

/// Counter actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    /// Never goes below zero.
    Decrement,
    Reset,
}

/// Applies `action` to `count`.
pub fn reduce(count: u32, action: CounterAction) -> u32 {
    match action {
        CounterAction::Increment => count.saturating_add(1),
        CounterAction::Decrement => count.saturating_sub(1),
        CounterAction::Reset => 0,
    }
}
