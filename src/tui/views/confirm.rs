//! Confirm step
//!
//! What is shown depends on the confirm sub-phase: the countdown, the
//! "I Have Paid" prompt, the transaction ID field, or the verification
//! notice once the payment has been recorded.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::models::Field;
use crate::tui::app::App;
use crate::tui::layout::rows;
use crate::wizard::ConfirmPhase;

/// Render the confirm step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let completed = app.wizard.is_completed();
    let title = if completed {
        " Payment Under Verification "
    } else {
        " Confirm Payment "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if completed { Color::Green } else { Color::Cyan }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.wizard.confirm_phase() {
        Some(ConfirmPhase::WaitingForCountdown) => render_waiting(frame, app, inner),
        Some(ConfirmPhase::AwaitingConfirmation) => render_awaiting_click(frame, app, inner),
        Some(ConfirmPhase::AwaitingTransactionId) => render_txn_entry(frame, app, inner),
        Some(ConfirmPhase::Completed) => render_completed(frame, app, inner),
        None => {}
    }
}

fn subtitle() -> Line<'static> {
    Line::from(Span::styled(
        "Enter the transaction ID to complete",
        Style::default().fg(Color::DarkGray),
    ))
}

fn go_back_line(enabled: bool) -> Line<'static> {
    let style = if enabled {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };
    Line::from(Span::styled("[Esc] Go Back", style))
}

/// The link, for buyers whose terminal could not hand it to a UPI app
fn link_lines<'a>(app: &'a App<'_>) -> Vec<Line<'a>> {
    match &app.last_link {
        Some(link) => vec![
            Line::from(""),
            Line::from(Span::styled(
                "Payment link:",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(link.as_str(), Style::default().fg(Color::Blue))),
        ],
        None => Vec::new(),
    }
}

fn render_waiting(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = rows(area, &[2, 1, 1, 1]);

    let intro = Paragraph::new(vec![
        subtitle(),
        Line::from("⏱ Please wait while we process your payment..."),
    ]);
    frame.render_widget(intro, chunks[0]);

    if let Some(countdown) = app.wizard.countdown() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
            .ratio(countdown.elapsed_fraction().clamp(0.0, 1.0))
            .label(format!("{} seconds remaining", countdown.remaining()));
        frame.render_widget(gauge, chunks[2]);
    }

    let mut lines = link_lines(app);
    lines.push(Line::from(""));
    lines.push(go_back_line(true));
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), chunks[4]);
}

fn render_awaiting_click(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        subtitle(),
        Line::from(""),
        Line::from("After payment, press Enter to confirm:"),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] ✔ I Have Paid",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(link_lines(app));
    lines.push(Line::from(""));
    lines.push(go_back_line(true));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_txn_entry(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = rows(area, &[2, 1, 1, 1]);
    frame.render_widget(Paragraph::new(vec![subtitle()]), chunks[0]);

    if let Some(input) = app.input(Field::TxnId) {
        frame.render_widget(input, chunks[1]);
    }
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Find this in your UPI app payment history",
            Style::default().fg(Color::DarkGray),
        )),
        chunks[2],
    );

    let submitting = app.wizard.is_submitting();
    let action = if submitting {
        Span::styled("⟳ Processing...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "[Enter] Submit Payment",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    };
    let lines = vec![Line::from(""), Line::from(action), go_back_line(!submitting)];
    frame.render_widget(Paragraph::new(lines), chunks[4]);
}

fn render_completed(frame: &mut Frame, app: &App, area: Rect) {
    let order = app.wizard.order();
    let lines = vec![
        Line::from(Span::styled(
            "✔ Payment Under Verification",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Your payment for {} is being verified.", order.course)),
        Line::from("You will receive a confirmation email once verified."),
        Line::from(""),
        Line::from(vec![
            Span::styled("Transaction ID: ", Style::default().fg(Color::Gray)),
            Span::styled(
                order.txn_id.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] Done",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}
