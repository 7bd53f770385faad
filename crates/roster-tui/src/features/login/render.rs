//! Login feature view.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::{LoginField, LoginState, TextField};
use crate::common::{centered_area, prefix_width, render_panel};

const PANEL_WIDTH: u16 = 56;
const PANEL_HEIGHT: u16 = 13;
/// Columns taken by the focus marker before a field value.
const FIELD_PREFIX: u16 = 2;

/// Renders the login form centered in `area`.
pub fn render_login(frame: &mut Frame, login: &LoginState, area: Rect) {
    let panel = centered_area(area, PANEL_WIDTH, PANEL_HEIGHT);
    let inner = render_panel(frame, panel, "Login", Color::Cyan);
    let inner = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );

    let mut lines = vec![Line::from("")];
    let email_row = push_field(
        &mut lines,
        "Email",
        login.email.value().to_string(),
        login.focus == LoginField::Email,
        login.errors.email.as_deref(),
    );
    let password_row = push_field(
        &mut lines,
        "Password",
        "•".repeat(login.password.char_count()),
        login.focus == LoginField::Password,
        login.errors.password.as_deref(),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" log in  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" switch field  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" quit", Style::default().fg(Color::DarkGray)),
    ]));

    frame.render_widget(Paragraph::new(lines), inner);

    let (row, field, masked) = match login.focus {
        LoginField::Email => (email_row, &login.email, false),
        LoginField::Password => (password_row, &login.password, true),
    };
    if let Some(position) = cursor_position(inner, row, field, masked) {
        frame.set_cursor_position(position);
    }
}

/// Appends label, value and optional error lines. Returns the value row.
fn push_field(
    lines: &mut Vec<Line<'static>>,
    label: &'static str,
    display: String,
    focused: bool,
    error: Option<&str>,
) -> u16 {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    lines.push(Line::from(Span::styled(label, label_style)));

    let value_row = lines.len() as u16;
    let marker = if focused { "› " } else { "  " };
    lines.push(Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Cyan)),
        Span::raw(display),
    ]));

    match error {
        Some(message) => lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        ))),
        None => lines.push(Line::from("")),
    }
    value_row
}

fn cursor_position(inner: Rect, row: u16, field: &TextField, masked: bool) -> Option<Position> {
    if row >= inner.height {
        return None;
    }
    let offset = if masked {
        field.cursor()
    } else {
        prefix_width(field.value(), field.cursor())
    } as u16;
    let x = (inner.x + FIELD_PREFIX + offset).min(inner.right().saturating_sub(1));
    Some(Position::new(x, inner.y + row))
}
