//! Footer: support contact and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the footer
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let support = format!(" Support: {} ", app.settings.support_contact);
    let hints = " F1:Help  F2:Terms  Ctrl+Q:Quit ";

    let left_len = support.chars().count();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());

    let mut spans = vec![Span::styled(support, Style::default().fg(Color::DarkGray))];
    // Drop the support line rather than the hints on narrow terminals
    if padding_len == 0 {
        spans.clear();
    } else {
        spans.push(Span::raw(" ".repeat(padding_len)));
    }
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
