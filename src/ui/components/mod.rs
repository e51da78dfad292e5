//! Composable UI component renderers.
//!
//! Each component draws one part of the screen into a [`Screen`]:
//!
//! - [`header`]: title bar with theme toggle, and the result-count line
//! - [`search`]: search box and suggestion dropdown
//! - [`cards`]: the profile card grid
//! - [`empty`]: empty state message shown instead of the grid
//! - [`footer`]: keybinding hints
//! - [`overlay`]: menu, form and dialogs drawn on top
//!
//! [`render_layout`] composes them in paint order; see
//! [`crate::ui::viewmodel`] for the row layout.

mod cards;
mod empty;
mod footer;
mod header;
mod overlay;
mod search;

use crate::ui::helpers::Screen;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{UIViewModel, COUNT_ROW, GRID_TOP, HEADER_ROW, SEARCH_TOP, SUGGESTIONS_TOP};

use cards::render_cards;
use empty::render_empty_state;
use footer::render_footer;
use header::{render_header, render_result_count};
use overlay::render_overlay;
use search::{render_search_bar, render_suggestions};

/// Renders a horizontal border line at the specified row (1-indexed).
///
/// Returns the next available row position.
fn render_border(screen: &mut Screen, row: usize, color: &str, cols: usize) -> usize {
    screen.position_cursor(row, 1);
    screen.styled(&Theme::fg(color), &"─".repeat(cols));
    row + 1
}

/// Paints a full frame.
///
/// Paint order: header, search box, count line, grid or empty state,
/// border and footer, then the suggestion dropdown and any overlay on top.
pub fn render_layout(screen: &mut Screen, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    // View model rows are 0-indexed; the screen is 1-indexed.
    render_header(screen, HEADER_ROW + 1, &vm.header, theme, cols);
    render_search_bar(screen, SEARCH_TOP + 1, &vm.search_bar, theme, cols);
    render_result_count(screen, COUNT_ROW + 1, &vm.result_count, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(screen, GRID_TOP + 2, empty, theme, cols);
    } else {
        render_cards(screen, &vm.cards, theme);
    }

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    if border_row > GRID_TOP {
        render_border(screen, border_row, &theme.colors.border, cols);
    }
    render_footer(screen, footer_row, &vm.footer, theme, cols);

    if !vm.search_bar.suggestions.is_empty() {
        render_suggestions(screen, SUGGESTIONS_TOP + 1, &vm.search_bar, theme, cols);
    }
    if let Some(overlay) = &vm.overlay {
        render_overlay(screen, overlay, theme, rows, cols);
    }
}
