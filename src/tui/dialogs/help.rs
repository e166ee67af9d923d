//! Help dialog
//!
//! Shows the keyboard shortcuts for the current step

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::Step;
use crate::tui::app::App;
use crate::tui::keybindings::{format_keybinding, get_keybindings, KeyContext};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.wizard.step()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Help lines for a step
fn help_lines(step: Step) -> Vec<Line<'static>> {
    let mut lines = vec![
        section(&format!("Step {} of 3: {}", step.number(), step)),
        Line::from(""),
    ];
    for kb in get_keybindings(KeyContext::from(step)) {
        lines.push(key_line(&format_keybinding(kb), kb.description));
    }

    lines.push(Line::from(""));
    lines.push(section("Dialogs"));
    lines.push(Line::from(""));
    for kb in get_keybindings(KeyContext::Dialog)
        .into_iter()
        .filter(|kb| kb.context == KeyContext::Dialog)
    {
        lines.push(key_line(&format_keybinding(kb), kb.description));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn section(title: &str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title.to_string(),
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_help_follows_step() {
        let payment = text(&help_lines(Step::Payment));
        assert!(payment.contains("Step 2 of 3: Payment"));
        assert!(payment.contains("Pay via UPI"));
        assert!(!payment.contains("Next field"));

        let details = text(&help_lines(Step::Details));
        assert!(details.contains("Shift+Tab"));
        assert!(details.contains("Close dialog"));
    }
}
