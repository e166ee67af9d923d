//! Payment step: payee details and the pay action

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

/// Render the payment step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let order = app.wizard.order();
    let merchant = app.wizard.merchant();

    let block = Block::default()
        .title(" UPI Payment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let label = Style::default().fg(Color::Gray);
    let value = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            "Complete payment using any UPI app",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Payment to"), label),
            Span::styled(merchant.name.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<14}", "UPI ID"), label),
            Span::styled(merchant.vpa.as_str(), value),
        ]),
        Line::from(vec![
            Span::styled(format!("{:<14}", "Amount"), label),
            Span::styled(format!("{}", order.price), value.fg(Color::Blue)),
        ]),
    ];

    if !order.currency.is_base() {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<14}", ""), label),
            Span::styled(
                format!("approx. {} (charged in INR)", order.display_price()),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[Enter] Pay {} via UPI", order.price),
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        "[Esc] Go Back",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
