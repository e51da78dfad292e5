//! Empty state component renderer.

use crate::ui::helpers::{self, Screen};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered two-line empty state message starting at `row`.
///
/// Shown in place of the grid when the store is empty or nothing matches
/// the search term.
pub fn render_empty_state(screen: &mut Screen, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    screen.position_cursor(row, 1);
    screen.push(Theme::bold());
    screen.styled(&Theme::fg(&theme.colors.text_secondary), &helpers::center(&empty.message, cols));

    for (offset, line) in helpers::wrap(&empty.subtitle, cols.saturating_sub(4)).iter().enumerate() {
        screen.position_cursor(row + 2 + offset, 1);
        screen.styled(&Theme::fg(&theme.colors.text_tertiary), &helpers::center(line, cols));
    }
}
