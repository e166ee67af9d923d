//! Terms & conditions dialog

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::terms_sections;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the terms dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Terms & Conditions ")
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(" ↑/↓ scroll  [Enter] I Accept ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} Payment Gateway", app.settings.brand),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];
    for (i, section) in terms_sections(app.settings).into_iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("{}. {}", i + 1, section.title),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            section.body,
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.terms_scroll, 0));
    frame.render_widget(paragraph, area);
}
