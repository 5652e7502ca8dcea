use ledger::MoneyCents;
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::ui::theme::Theme;

/// Glyph printed in front of every amount.
pub const CURRENCY_GLYPH: &str = "$";

/// Formats an amount with the currency glyph and two fraction digits.
#[must_use]
pub fn format_amount(amount: MoneyCents) -> String {
    format!("{CURRENCY_GLYPH}{amount}")
}

/// Span for a single expense amount.
#[must_use]
pub fn styled_amount(amount: MoneyCents, theme: &Theme) -> Span<'static> {
    Span::styled(
        format_amount(amount),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    )
}

/// Span for the running total, e.g. `Total: $30.00`.
#[must_use]
pub fn styled_total(total: MoneyCents, theme: &Theme) -> Span<'static> {
    Span::styled(
        format!("Total: {}", format_amount(total)),
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_glyph() {
        assert_eq!(format_amount(MoneyCents::ZERO), "$0.00");
        assert_eq!(format_amount(MoneyCents::new(1250)), "$12.50");
    }
}
