//! Order summary side panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

/// Render the order summary
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let order = app.wizard.order();

    let block = Block::default()
        .title(" Order Summary ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let label = Style::default().fg(Color::DarkGray);
    let or_dash = |value: &str| {
        if value.trim().is_empty() {
            "-".to_string()
        } else {
            value.to_string()
        }
    };

    let mut lines = vec![
        Line::from(Span::styled(
            order.course.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Name", label)),
        Line::from(or_dash(&order.name)),
        Line::from(Span::styled("Email", label)),
        Line::from(or_dash(&order.email)),
        Line::from(Span::styled("Phone", label)),
        Line::from(format!("{} {}", order.country.code(), or_dash(&order.phone))),
        Line::from(""),
        Line::from(Span::styled("Total", label)),
        Line::from(Span::styled(
            format!("{}", order.price),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )),
    ];

    if !order.currency.is_base() {
        lines.push(Line::from(Span::styled(
            format!("≈ {}", order.display_price()),
            Style::default().fg(Color::DarkGray),
        )));
    }
    if order.promo_applied {
        lines.push(Line::from(Span::styled(
            format!("Promo {} (-{})", order.promo_code, order.savings()),
            Style::default().fg(Color::Green),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
