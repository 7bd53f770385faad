//! Top-level view.
//!
//! Pure function of `AppState`: picks the screen from the session route and
//! delegates to the feature views.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin};

use crate::home::render_home;
use crate::login::render_login;
use crate::network::render_network_banner;
use crate::route::Route;
use crate::state::AppState;

pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();

    match app.route() {
        Route::Login => render_login(frame, &app.login, area),
        Route::Home => {
            let banner_height = u16::from(app.network.status.label().is_some());
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(banner_height), Constraint::Min(0)])
                .split(area);

            render_network_banner(frame, app.network.status, chunks[0]);

            // A Home route without a mounted instance only exists between
            // login and the first reducer pass; draw nothing until then.
            let Some(home) = app.current_home() else {
                return;
            };
            let email = app.session.state().user().map(|user| user.email.as_str());
            let body = chunks[1].inner(Margin::new(1, 0));
            render_home(frame, home, email, app.spinner_frame, body);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use roster_core::config::Config;
    use roster_core::network::NetworkStatus;
    use roster_core::session::Identity;

    use super::*;
    use crate::update;

    fn draw(app: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_logged_out_shows_login() {
        let app = AppState::new(Config::default());
        let screen = draw(&app);
        assert!(screen.contains("Login"));
        assert!(!screen.contains("Welcome"));
    }

    #[test]
    fn test_logged_in_shows_home_with_banner() {
        let mut app = AppState::new(Config::default());
        update::apply_login(&mut app, Identity::new("a@b.com"));
        app.network.record(NetworkStatus::Offline);

        let screen = draw(&app);
        assert!(screen.contains("Welcome, a@b.com!"));
        assert!(screen.contains("Offline"));
    }

    #[test]
    fn test_banner_hidden_until_first_probe() {
        let mut app = AppState::new(Config::default());
        update::apply_login(&mut app, Identity::new("a@b.com"));

        let screen = draw(&app);
        assert!(!screen.contains("Online"));
        assert!(!screen.contains("Offline"));
    }
}
