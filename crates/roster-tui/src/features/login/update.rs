//! Login feature reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use roster_core::credentials;
use roster_core::session::Identity;

use super::state::LoginState;

/// What the reducer should do after a login key press.
#[derive(Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    None,
    /// Credentials passed local validation.
    Submitted(Identity),
    Quit,
}

pub fn handle_login_key(
    login: &mut LoginState,
    key: KeyEvent,
    min_password_len: usize,
) -> LoginOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => LoginOutcome::Quit,
        KeyCode::Esc => LoginOutcome::Quit,
        KeyCode::Enter => submit(login, min_password_len),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            login.focus = login.focus.toggle();
            LoginOutcome::None
        }
        KeyCode::Char('u') if ctrl => {
            login.focused_mut().clear();
            LoginOutcome::None
        }
        KeyCode::Char(ch) if !ctrl => {
            login.focused_mut().insert(ch);
            LoginOutcome::None
        }
        KeyCode::Backspace => {
            login.focused_mut().backspace();
            LoginOutcome::None
        }
        KeyCode::Delete => {
            login.focused_mut().delete();
            LoginOutcome::None
        }
        KeyCode::Left => {
            login.focused_mut().move_left();
            LoginOutcome::None
        }
        KeyCode::Right => {
            login.focused_mut().move_right();
            LoginOutcome::None
        }
        KeyCode::Home => {
            login.focused_mut().move_home();
            LoginOutcome::None
        }
        KeyCode::End => {
            login.focused_mut().move_end();
            LoginOutcome::None
        }
        _ => LoginOutcome::None,
    }
}

/// Pastes into the focused field. Line breaks are dropped; spaces are kept
/// since they can be part of a password.
pub fn handle_login_paste(login: &mut LoginState, text: &str) {
    let line: String = text.chars().filter(|ch| !matches!(ch, '\r' | '\n')).collect();
    login.focused_mut().insert_str(&line);
}

fn submit(login: &mut LoginState, min_password_len: usize) -> LoginOutcome {
    match credentials::validate(login.email.value(), login.password.value(), min_password_len) {
        Ok(identity) => {
            login.errors = credentials::CredentialErrors::default();
            LoginOutcome::Submitted(identity)
        }
        Err(errors) => {
            tracing::debug!(
                email_invalid = errors.email.is_some(),
                password_invalid = errors.password.is_some(),
                "login rejected"
            );
            login.errors = errors;
            LoginOutcome::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::login::LoginField;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(login: &mut LoginState, text: &str) {
        for ch in text.chars() {
            handle_login_key(login, key(KeyCode::Char(ch)), 6);
        }
    }

    #[test]
    fn test_typing_goes_to_focused_field() {
        let mut login = LoginState::default();
        type_text(&mut login, "a@b.com");
        handle_login_key(&mut login, key(KeyCode::Tab), 6);
        type_text(&mut login, "secret");

        assert_eq!(login.email.value(), "a@b.com");
        assert_eq!(login.password.value(), "secret");
        assert_eq!(login.focus, LoginField::Password);
    }

    #[test]
    fn test_submit_valid_returns_identity() {
        let mut login = LoginState::default();
        type_text(&mut login, "a@b.com");
        handle_login_key(&mut login, key(KeyCode::Down), 6);
        type_text(&mut login, "secret");

        let outcome = handle_login_key(&mut login, key(KeyCode::Enter), 6);
        assert_eq!(outcome, LoginOutcome::Submitted(Identity::new("a@b.com")));
    }

    #[test]
    fn test_submit_invalid_sets_messages() {
        let mut login = LoginState::default();
        type_text(&mut login, "bad");

        let outcome = handle_login_key(&mut login, key(KeyCode::Enter), 6);
        assert_eq!(outcome, LoginOutcome::None);
        assert_eq!(login.errors.email.as_deref(), Some(credentials::INVALID_EMAIL));
        assert!(login.errors.password.is_some());
    }

    #[test]
    fn test_messages_clear_after_fixing_fields() {
        let mut login = LoginState::default();
        handle_login_key(&mut login, key(KeyCode::Enter), 6);
        assert!(!login.errors.is_empty());

        type_text(&mut login, "a@b.com");
        handle_login_key(&mut login, key(KeyCode::Tab), 6);
        type_text(&mut login, "secret");
        handle_login_key(&mut login, key(KeyCode::Enter), 6);
        assert!(login.errors.is_empty());
    }

    #[test]
    fn test_escape_and_ctrl_c_quit() {
        let mut login = LoginState::default();
        assert_eq!(
            handle_login_key(&mut login, key(KeyCode::Esc), 6),
            LoginOutcome::Quit
        );
        assert_eq!(
            handle_login_key(
                &mut login,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                6
            ),
            LoginOutcome::Quit
        );
        assert_eq!(login.email.value(), "");
    }

    #[test]
    fn test_paste_keeps_spaces_and_drops_line_breaks() {
        let mut login = LoginState::default();
        login.focus = LoginField::Password;

        handle_login_paste(&mut login, "  pass word \r\n");

        assert_eq!(login.password.value(), "  pass word ");
        assert_eq!(login.email.value(), "");
    }
}
