//! Search bar component renderer.
//!
//! Renders the search input box and, below it, the suggestion dropdown.

use crate::ui::helpers::{self, Screen};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 1;

/// Renders the 3-line search box at the specified row.
///
/// ```text
/// ╭──────────────────────────╮
/// │ ⌕ Search profiles...     │
/// ╰──────────────────────────╯
/// ```
///
/// The border takes the primary color while the box has focus. An empty
/// query shows the dimmed placeholder. Returns the next row.
pub fn render_search_bar(screen: &mut Screen, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let colors = &theme.colors;
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = Theme::fg(if search.focused { &colors.primary } else { &colors.border });

    screen.position_cursor(row, SEARCH_BOX_MARGIN + 1);
    screen.styled(&border, &format!("╭{}╮", "─".repeat(inner_width)));

    screen.position_cursor(row + 1, SEARCH_BOX_MARGIN + 1);
    screen.styled(&border, "│");
    screen.push(&Theme::fg(&colors.text_tertiary));
    screen.push(" ⌕ ");
    let text_width = inner_width.saturating_sub(4);
    if search.query.is_empty() {
        screen.push(Theme::dim());
        screen.push(&helpers::fit(search.placeholder, text_width));
    } else {
        screen.push(&Theme::fg(&colors.text_primary));
        let cursor = if search.focused { "▏" } else { "" };
        screen.push(&helpers::fit(&format!("{}{cursor}", search.query), text_width));
    }
    screen.push(" ");
    screen.push(Theme::reset());
    screen.styled(&border, "│");

    screen.position_cursor(row + 2, SEARCH_BOX_MARGIN + 1);
    screen.styled(&border, &format!("╰{}╯", "─".repeat(inner_width)));

    row + 3
}

/// Renders the suggestion dropdown starting at `row`, one entry per line,
/// aligned with the inside of the search box.
pub fn render_suggestions(screen: &mut Screen, row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let colors = &theme.colors;
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);

    for (offset, item) in search.suggestions.iter().enumerate() {
        screen.position_cursor(row + offset, SEARCH_BOX_MARGIN + 2);
        if item.highlighted {
            screen.push(&Theme::bg(&colors.primary));
            screen.push(&Theme::fg(&colors.background));
        } else {
            screen.push(&Theme::bg(&colors.background_secondary));
            screen.push(&Theme::fg(&colors.secondary));
        }
        screen.push(&helpers::fit(&format!(" ⌕ {}", item.text), inner_width));
        screen.push(Theme::reset());
    }
}
