//! Details step: course price, buyer fields and the promo code

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Field;
use crate::tui::app::{App, DetailsFocus};
use crate::tui::layout::rows;

/// Render the details step
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Your Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = rows(inner, &[3, 1, 1, 1, 1, 1, 1, 1, 1, 1]);

    render_course(frame, app, chunks[0]);
    render_text_field(frame, app, Field::Name, chunks[2]);
    render_text_field(frame, app, Field::Email, chunks[3]);
    render_selector(
        frame,
        "Country code",
        &format!("{} {}", app.wizard.order().country.code(), app.wizard.order().country.entry().country),
        app.focus == DetailsFocus::Country,
        chunks[4],
    );
    render_text_field(frame, app, Field::Phone, chunks[5]);
    render_selector(
        frame,
        "Currency",
        &format!("{} {}", app.wizard.order().currency.code(), app.wizard.order().currency.name()),
        app.focus == DetailsFocus::Currency,
        chunks[6],
    );
    render_text_field(frame, app, Field::PromoCode, chunks[7]);

    let hint = if app.focus == DetailsFocus::PromoCode && !app.wizard.order().promo_applied {
        "[Enter] Apply promo code"
    } else {
        "[Enter] Continue to Payment"
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(hint, chunks[9]);
}

/// Course name with current and struck-through list price
fn render_course(frame: &mut Frame, app: &App, area: Rect) {
    let order = app.wizard.order();

    let mut price_line = vec![Span::styled(
        order.display_price(),
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    )];
    if order.promo_applied {
        price_line.push(Span::raw("  "));
        price_line.push(Span::styled(
            order.display_original_price(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        ));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            order.course.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(price_line),
    ];
    if order.promo_applied {
        lines.push(Line::from(Span::styled(
            format!("✔ Promo code applied, you save {}", order.currency.display_price(order.savings())),
            Style::default().fg(Color::Green),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_text_field(frame: &mut Frame, app: &App, field: Field, area: Rect) {
    if let Some(input) = app.input(field) {
        frame.render_widget(input, area);
    }
}

/// A `◀ value ▶` row changed with the arrow keys
fn render_selector(frame: &mut Frame, label: &str, value: &str, focused: bool, area: Rect) {
    let (label_style, value_style) = if focused {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else {
        (Style::default().fg(Color::Gray), Style::default().fg(Color::Yellow))
    };

    let line = Line::from(vec![
        Span::styled(format!("{:<14}", label), label_style),
        Span::raw(": "),
        Span::styled(format!("◀ {} ▶", value), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
