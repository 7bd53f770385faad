//! Home feature reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_core::counter::{self, CounterAction};

use super::state::HomeState;

/// Requests the main reducer handles on behalf of the home screen.
#[derive(Debug, PartialEq, Eq)]
pub enum HomeOutcome {
    None,
    Refresh,
    Logout,
    Quit,
}

const PAGE: usize = 10;

pub fn handle_home_key(home: &mut HomeState, key: KeyEvent) -> HomeOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => HomeOutcome::Quit,
        KeyCode::Char('l') if ctrl => HomeOutcome::Logout,
        KeyCode::Char('q') | KeyCode::Esc => HomeOutcome::Quit,
        KeyCode::Char('o') => HomeOutcome::Logout,
        KeyCode::Char('r') => HomeOutcome::Refresh,
        KeyCode::Char('+' | '=') => {
            home.counter = counter::reduce(home.counter, CounterAction::Increment);
            HomeOutcome::None
        }
        KeyCode::Char('-') => {
            home.counter = counter::reduce(home.counter, CounterAction::Decrement);
            HomeOutcome::None
        }
        KeyCode::Char('0') => {
            home.counter = counter::reduce(home.counter, CounterAction::Reset);
            HomeOutcome::None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            home.scroll_up(1);
            HomeOutcome::None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            home.scroll_down(1);
            HomeOutcome::None
        }
        KeyCode::PageUp => {
            home.scroll_up(PAGE);
            HomeOutcome::None
        }
        KeyCode::PageDown => {
            home.scroll_down(PAGE);
            HomeOutcome::None
        }
        _ => HomeOutcome::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(home: &mut HomeState, ch: char) -> HomeOutcome {
        handle_home_key(home, KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE))
    }

    #[test]
    fn test_counter_keys() {
        let mut home = HomeState::default();
        press(&mut home, '+');
        press(&mut home, '+');
        press(&mut home, '=');
        press(&mut home, '-');
        assert_eq!(home.counter, 2);

        press(&mut home, '0');
        press(&mut home, '-');
        assert_eq!(home.counter, 0);
    }

    #[test]
    fn test_outcomes() {
        let mut home = HomeState::default();
        assert_eq!(press(&mut home, 'r'), HomeOutcome::Refresh);
        assert_eq!(press(&mut home, 'o'), HomeOutcome::Logout);
        assert_eq!(press(&mut home, 'q'), HomeOutcome::Quit);
        assert_eq!(
            handle_home_key(
                &mut home,
                KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL)
            ),
            HomeOutcome::Logout
        );
    }
}
