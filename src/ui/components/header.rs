//! Header component renderer.
//!
//! Draws the title bar (title, refresh indicator, theme toggle) and the
//! result-count line with the add button beneath the search box.

use crate::ui::helpers::{self, Screen};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{right_aligned_start, HeaderInfo, ADD_BUTTON_LABEL};

const REFRESHING_LABEL: &str = "⟳ Refreshing…";

/// Renders the header title bar at the specified row.
///
/// The title sits on the left in bold, the theme toggle is right-aligned so
/// its columns match [`right_aligned_start`]. Returns the next row.
pub fn render_header(screen: &mut Screen, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let colors = &theme.colors;
    let toggle_col = right_aligned_start(header.theme_label, cols);

    screen.position_cursor(row, 1);
    screen.push(&Theme::bg(&colors.background_secondary));
    screen.push(Theme::bold());
    screen.push(&Theme::fg(&colors.primary));
    let title = helpers::truncate(&header.title, toggle_col);
    screen.push(&title);
    screen.push(Theme::reset());

    let mut used = helpers::width(&title);
    screen.push(&Theme::bg(&colors.background_secondary));
    if header.refreshing && used + helpers::width(REFRESHING_LABEL) + 1 < toggle_col {
        screen.push(&Theme::fg(&colors.text_tertiary));
        screen.push(" ");
        screen.push(REFRESHING_LABEL);
        used += helpers::width(REFRESHING_LABEL) + 1;
    }
    screen.pad(toggle_col.saturating_sub(used));

    screen.push(&Theme::fg(&colors.text_secondary));
    screen.push(header.theme_label);
    screen.pad(cols.saturating_sub(toggle_col + helpers::width(header.theme_label)));
    screen.push(Theme::reset());
    row + 1
}

/// Renders "N profiles ..." on the left and the add button on the right.
pub fn render_result_count(screen: &mut Screen, row: usize, count: &str, theme: &Theme, cols: usize) -> usize {
    let button_col = right_aligned_start(ADD_BUTTON_LABEL, cols);

    screen.position_cursor(row, 1);
    screen.push(&Theme::fg(&theme.colors.text_secondary));
    screen.push(" ");
    screen.push(&helpers::fit(count, button_col.saturating_sub(1)));
    screen.push(Theme::reset());

    screen.position_cursor(row, button_col + 1);
    screen.push(Theme::bold());
    screen.styled(&Theme::fg(&theme.colors.primary), ADD_BUTTON_LABEL);
    row + 1
}
