pub mod components;
pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};

use crate::app::AppState;
use components::hints::{field_hints, form_hints, global_hints, hint_separator, hints_to_spans};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Ledger view
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    screens::expenses::render(frame, layout[0], state);
    render_bottom_bar(frame, layout[1], state, &Theme::default());
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = hints_to_spans(&form_hints(), theme);
    parts.push(hint_separator(theme));
    parts.extend(hints_to_spans(&field_hints(state.focus), theme));
    parts.push(hint_separator(theme));
    parts.extend(hints_to_spans(&global_hints(), theme));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
