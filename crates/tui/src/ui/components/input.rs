use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::Theme;

/// Renders a one-line text field: the value, or the placeholder when empty,
/// with a bar cursor while focused.
pub fn render_input(
    frame: &mut Frame<'_>,
    area: Rect,
    value: &str,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let cursor = if focused { "│" } else { "" };

    let line = if value.is_empty() {
        Line::from(vec![
            Span::styled(cursor, Style::default().fg(theme.accent)),
            Span::styled(placeholder.to_string(), Style::default().fg(theme.text_muted)),
        ])
    } else {
        let style = if focused {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.text)
        };
        Line::from(Span::styled(format!("{value}{cursor}"), style))
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Renders a select: the chosen label (or placeholder) between arrows that
/// light up while focused.
pub fn render_select(
    frame: &mut Frame<'_>,
    area: Rect,
    selected: Option<&str>,
    placeholder: &str,
    focused: bool,
    theme: &Theme,
) {
    let arrow_style = if focused {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.border)
    };
    let value = match selected {
        Some(label) => Span::styled(label.to_string(), Style::default().fg(theme.text)),
        None => Span::styled(placeholder.to_string(), Style::default().fg(theme.text_muted)),
    };

    let line = Line::from(vec![
        Span::styled("‹ ", arrow_style),
        value,
        Span::styled(" ›", arrow_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Label of a push button, e.g. `[ + Add Expense ]`.
pub fn button<'a>(label: &str, focused: bool, theme: &Theme) -> Span<'a> {
    let style = if focused {
        Style::default()
            .fg(theme.surface)
            .bg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.accent)
    };
    Span::styled(format!("[ {label} ]"), style)
}

/// A button drawn for layout only; it reacts to nothing.
pub fn inert_button<'a>(label: &str, theme: &Theme) -> Span<'a> {
    Span::styled(format!("[ {label} ]"), Style::default().fg(theme.inert))
}
