//! Key hint rendering for the bottom bar.

use ratatui::{style::Style, text::Span};

use crate::{app::Focus, ui::theme::Theme};

/// A single keyboard hint (key + action description).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyHint {
    pub key: String,
    pub action: String,
}

impl KeyHint {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Converts a list of key hints into styled spans for rendering.
pub fn hints_to_spans(hints: &[KeyHint], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(
            hint.key.clone(),
            Style::default().fg(theme.accent),
        ));
        spans.push(Span::raw(format!(" {}", hint.action)));
    }

    spans
}

/// Creates a separator span for dividing hint groups.
pub fn hint_separator(theme: &Theme) -> Span<'static> {
    Span::styled("  │  ", Style::default().fg(theme.border))
}

/// Hints for the focused form control.
pub fn field_hints(focus: Focus) -> Vec<KeyHint> {
    match focus {
        Focus::Amount | Focus::Description => vec![KeyHint::new("Backspace", "delete")],
        Focus::Category => vec![
            KeyHint::new("←→", "choose"),
            KeyHint::new("letter", "jump"),
            KeyHint::new("Backspace", "clear"),
        ],
        Focus::AddButton => vec![KeyHint::new("Space", "add")],
    }
}

pub fn form_hints() -> Vec<KeyHint> {
    vec![
        KeyHint::new("Tab", "next"),
        KeyHint::new("Shift+Tab", "prev"),
        KeyHint::new("Enter", "add expense"),
        KeyHint::new("PgUp/PgDn", "scroll"),
    ]
}

pub fn global_hints() -> Vec<KeyHint> {
    vec![KeyHint::new("Esc", "quit")]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_alternate_key_and_action() {
        let theme = Theme::default();
        let spans = hints_to_spans(&[KeyHint::new("Tab", "next"), KeyHint::new("Esc", "quit")], &theme);
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Tab next  Esc quit");
    }
}
