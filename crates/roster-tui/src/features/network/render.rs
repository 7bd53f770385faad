use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use roster_core::network::NetworkStatus;

/// Renders the Online/Offline banner. Draws nothing while the status is unknown.
pub fn render_network_banner(frame: &mut Frame, status: NetworkStatus, area: Rect) {
    let Some(label) = status.label() else {
        return;
    };
    let (fg, bg) = match status {
        NetworkStatus::Online => (Color::Rgb(0x1e, 0x7e, 0x34), Color::Rgb(0xdf, 0xf6, 0xdd)),
        _ => (Color::Rgb(0xa6, 0x1b, 0x1b), Color::Rgb(0xfc, 0xe8, 0xe6)),
    };
    let banner = Paragraph::new(Line::from(Span::styled(
        label,
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(Style::default().bg(bg));
    frame.render_widget(banner, area);
}
