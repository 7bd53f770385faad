//! Home feature view.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{HomeState, LoadState};
use crate::common::truncate_with_ellipsis;

/// Spinner frames for loading indicators.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Rows used by one user entry (name + email).
const ROWS_PER_USER: usize = 2;

/// Renders the session-scoped home screen.
pub fn render_home(
    frame: &mut Frame,
    home: &HomeState,
    email: Option<&str>,
    spinner_frame: usize,
    area: Rect,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Greeting
            Constraint::Length(3), // Counter
            Constraint::Min(3),    // Users
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_greeting(frame, email, chunks[0]);
    render_counter(frame, home.counter, chunks[1]);
    render_users(frame, home, spinner_frame, chunks[2]);
    render_hints(frame, chunks[3]);
}

fn render_greeting(frame: &mut Frame, email: Option<&str>, area: Rect) {
    let greeting = match email {
        Some(email) => format!("Welcome, {email}!"),
        None => "Welcome!".to_string(),
    };
    let title = Paragraph::new(Line::from(Span::styled(
        truncate_with_ellipsis(&greeting, area.width.saturating_sub(12) as usize),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, area);

    let logout = Paragraph::new(Line::from(vec![
        Span::styled("o", Style::default().fg(Color::Cyan)),
        Span::styled(" Logout", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(logout, area);
}

fn render_counter(frame: &mut Frame, count: u32, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Counter ");
    let line = Line::from(vec![
        Span::styled(
            count.to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "   + increment  - decrement  0 reset",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_users(frame: &mut Frame, home: &HomeState, spinner_frame: usize, area: Rect) {
    let spinner = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    let title = if home.load == LoadState::Refreshing {
        format!(" Users {spinner} refreshing ")
    } else {
        " Users ".to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let lines: Vec<Line<'static>> = if home.load == LoadState::Loading {
        vec![Line::from(Span::styled(
            format!("{spinner} Loading users..."),
            Style::default().fg(Color::Yellow),
        ))]
    } else if let Some(error) = &home.error {
        vec![
            Line::from(Span::styled(
                truncate_with_ellipsis(error, width),
                Style::default().fg(Color::Red),
            )),
            Line::from(Span::styled(
                "Press r to retry.",
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else if home.users.is_empty() {
        if home.loaded_once {
            vec![Line::from("No users.")]
        } else {
            Vec::new()
        }
    } else {
        let visible = (inner.height as usize / ROWS_PER_USER).max(1);
        home.users
            .iter()
            .skip(home.scroll)
            .take(visible)
            .flat_map(|user| {
                [
                    Line::from(Span::styled(
                        truncate_with_ellipsis(&user.name, width),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        truncate_with_ellipsis(&user.email, width),
                        Style::default().fg(Color::Gray),
                    )),
                ]
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_hints(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(Color::Cyan);
    let text = Style::default().fg(Color::DarkGray);
    let hints = Line::from(vec![
        Span::styled("r", key),
        Span::styled(" refresh  ", text),
        Span::styled("↑/↓", key),
        Span::styled(" scroll  ", text),
        Span::styled("o", key),
        Span::styled(" logout  ", text),
        Span::styled("q", key),
        Span::styled(" quit", text),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use roster_core::users::User;

    use super::*;

    fn rendered(home: &HomeState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| render_home(frame, home, Some("a@b.com"), 0, frame.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_greeting_and_counter() {
        let home = HomeState {
            counter: 5,
            ..Default::default()
        };
        let screen = rendered(&home);
        assert!(screen.contains("Welcome, a@b.com!"));
        assert!(screen.contains('5'));
    }

    #[test]
    fn test_users_listed() {
        let mut home = HomeState::default();
        home.apply_users(Ok(vec![User {
            id: 1,
            name: "Leanne Graham".to_string(),
            email: "Sincere@april.biz".to_string(),
        }]));
        let screen = rendered(&home);
        assert!(screen.contains("Leanne Graham"));
        assert!(screen.contains("Sincere@april.biz"));
    }

    #[test]
    fn test_empty_and_error_states() {
        let mut home = HomeState::default();
        home.apply_users(Ok(Vec::new()));
        assert!(rendered(&home).contains("No users."));

        home.apply_users(Err("Request failed: 404".to_string()));
        assert!(rendered(&home).contains("Request failed: 404"));
    }

    #[test]
    fn test_loading_state() {
        let mut home = HomeState::default();
        home.begin_fetch(false);
        assert!(rendered(&home).contains("Loading users..."));
    }
}
