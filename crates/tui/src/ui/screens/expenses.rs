use ledger::{Expense, Ledger};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
};

use crate::{
    app::{AppState, Focus},
    ui::{
        components::{
            card::Card,
            date::DateDisplay,
            input::{button, inert_button, render_input, render_select},
            money::{format_amount, styled_amount, styled_total},
        },
        theme::Theme,
    },
};

pub const TITLE: &str = "Expense Tracker";
pub const EMPTY_LEDGER: &str = "No expenses recorded yet";

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState) {
    let theme = Theme::default();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title + total
            Constraint::Length(3), // Entry form
            Constraint::Min(0),    // Recent expenses
        ])
        .split(area);

    render_header(frame, layout[0], &state.ledger, &theme);
    render_form(frame, layout[1], state, &theme);
    render_list(frame, layout[2], state, &theme);
}

fn render_header(frame: &mut Frame<'_>, area: Rect, ledger: &Ledger, theme: &Theme) {
    let total = styled_total(ledger.total(), theme);
    let total_width = total.width() as u16 + 4;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(total_width)])
        .split(area);

    // Vertically centered with the total card
    let title_area = Rect {
        y: columns[0].y + columns[0].height / 2,
        height: 1,
        ..columns[0]
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            TITLE,
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        title_area,
    );

    Card::new("", theme).render_with(
        frame,
        columns[1],
        Paragraph::new(Line::from(total)).alignment(Alignment::Center),
    );
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let card = Card::new("New expense", theme).focused(true);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    let fields = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
            Constraint::Ratio(1, 4),
        ])
        .split(inner)
        .iter()
        .map(|field| Rect {
            width: field.width.saturating_sub(1),
            ..*field
        })
        .collect::<Vec<_>>();

    let draft = &state.draft;
    render_input(
        frame,
        fields[0],
        &draft.amount,
        "Amount",
        state.focus == Focus::Amount,
        theme,
    );
    render_select(
        frame,
        fields[1],
        draft.category.map(|c| c.label()),
        "Category",
        state.focus == Focus::Category,
        theme,
    );
    render_input(
        frame,
        fields[2],
        &draft.description,
        "Description (optional)",
        state.focus == Focus::Description,
        theme,
    );
    frame.render_widget(
        Paragraph::new(button(
            "+ Add Expense",
            state.focus == Focus::AddButton,
            theme,
        )),
        fields[3],
    );
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let ledger = &state.ledger;
    // Sort and Analytics are drawn but bound to nothing.
    let actions = Line::from(vec![
        inert_button("↕ Sort", theme),
        Span::raw(" "),
        inert_button("◔ Analytics", theme),
        Span::raw(" "),
    ]);
    let card = Card::new("Recent Expenses", theme).actions(actions);
    let inner = card.inner(area);
    card.render_frame(frame, area);

    if ledger.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                EMPTY_LEDGER,
                Style::default().fg(theme.text_muted),
            ))
            .alignment(Alignment::Center),
            Rect {
                height: inner.height.min(1),
                ..inner
            },
        );
        return;
    }

    let width = inner.width as usize;
    let last = ledger.len() - 1;
    let items = ledger
        .iter()
        .enumerate()
        .map(|(i, expense)| {
            ListItem::new(expense_lines(
                expense,
                &state.dates,
                width,
                i == last,
                theme,
            ))
        })
        .collect::<Vec<_>>();

    // The list offset follows the selection, so older rows scroll into view.
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(last)));

    let list = List::new(items).highlight_style(Style::default().bg(theme.border));
    frame.render_stateful_widget(list, inner, &mut list_state);
}

/// Category and amount on the first line, then description and date, then a
/// divider unless this is the last row.
fn expense_lines(
    expense: &Expense,
    dates: &DateDisplay,
    width: usize,
    last: bool,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.text_muted);
    let category = expense.category().label();
    let amount = format_amount(expense.amount());
    let pad = width.saturating_sub(category.chars().count() + amount.chars().count());

    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                category,
                Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" ".repeat(pad)),
            styled_amount(expense.amount(), theme),
        ]),
        Line::from(Span::styled(
            expense.description_or_placeholder().to_string(),
            muted,
        )),
        Line::from(Span::styled(dates.format(expense.date()), muted)),
    ];
    if !last {
        lines.push(Line::from(Span::styled(
            "─".repeat(width),
            Style::default().fg(theme.border),
        )));
    }
    lines
}
