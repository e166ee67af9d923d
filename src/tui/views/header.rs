//! Header: brand and step progress

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::models::Step;
use crate::tui::app::App;

/// Render the header
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let step = app.wizard.step();

    let block = Block::default()
        .title(format!(" {} ", app.settings.brand))
        .title_style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(" Secure Payment ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .percent(step.progress_percent())
        .label(step_label(step));

    frame.render_widget(gauge, area);
}

fn step_label(current: Step) -> String {
    [Step::Details, Step::Payment, Step::Confirm]
        .iter()
        .map(|step| {
            let marker = if step.number() < current.number() {
                "✔"
            } else if *step == current {
                "●"
            } else {
                "○"
            };
            format!("{} {}", marker, step)
        })
        .collect::<Vec<_>>()
        .join("  ─  ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_label_marks_progress() {
        let label = step_label(Step::Payment);
        assert!(label.starts_with("✔ "));
        assert!(label.contains("● "));
        assert!(label.ends_with("○ Confirm"));
    }
}
